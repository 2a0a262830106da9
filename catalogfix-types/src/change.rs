use serde::{Deserialize, Serialize};
use std::fmt;

/// Added to a zero-based row index to get the line a spreadsheet user sees:
/// one for 1-based numbering, one for the header row.
pub const HEADER_OFFSET: usize = 2;

const LINE_SEPARATOR: &str = " \u{a0}\u{a0}|\u{a0}\u{a0} ";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    BadCharacters,
    Truncated,
    Rounded,
    VatCode,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::BadCharacters => "bad_characters",
            ChangeKind::Truncated => "truncated",
            ChangeKind::Rounded => "rounded",
            ChangeKind::VatCode => "vat_code",
        }
    }
}

/// One field-level correction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeRecord {
    pub line: usize,
    pub kind: ChangeKind,
    pub column: String,
    pub message: String,
}

impl ChangeRecord {
    pub fn for_row(
        row: usize,
        kind: ChangeKind,
        column: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            line: row + HEADER_OFFSET,
            kind,
            column: column.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}{}{}", self.line, LINE_SEPARATOR, self.message)
    }
}

/// Records produced by a single fixer stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeSection {
    pub title: String,

    #[serde(default)]
    pub records: Vec<ChangeRecord>,
}

/// Change log grouped by fixer stage, in pipeline order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeLog {
    #[serde(default)]
    pub sections: Vec<ChangeSection>,
}

impl ChangeLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_section(&mut self, title: impl Into<String>, records: Vec<ChangeRecord>) {
        self.sections.push(ChangeSection {
            title: title.into(),
            records,
        });
    }

    pub fn section(&self, title: &str) -> Option<&ChangeSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    /// All records in pipeline order, ignoring the grouping.
    pub fn flatten(&self) -> impl Iterator<Item = &ChangeRecord> + '_ {
        self.sections.iter().flat_map(|s| s.records.iter())
    }

    /// Rendered `Line N | ...` strings in pipeline order.
    pub fn lines(&self) -> Vec<String> {
        self.flatten().map(ToString::to_string).collect()
    }

    pub fn total(&self) -> usize {
        self.sections.iter().map(|s| s.records.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}
