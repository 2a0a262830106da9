use crate::columns::{Field, HeaderAliases};
use crate::config::DescriptionConfig;
use crate::fixers::{Fixed, Fixer, FixerMeta};
use catalogfix_types::{ChangeKind, ChangeRecord, Table, Value};
use std::collections::BTreeSet;
use tracing::{debug, trace};

/// Removes disallowed characters from descriptions and caps their length.
#[derive(Debug, Clone)]
pub struct DescriptionFixer {
    bad_chars: BTreeSet<char>,
    max_len: usize,
    aliases: HeaderAliases,
}

impl DescriptionFixer {
    pub const META: FixerMeta = FixerMeta {
        key: "description",
        section: "Description Fixes",
        description: "Removes bad characters and shortens long descriptions",
    };

    pub fn new(config: &DescriptionConfig, aliases: &HeaderAliases) -> Self {
        Self {
            bad_chars: config.bad_chars.chars().collect(),
            max_len: config.max_len,
            aliases: aliases.clone(),
        }
    }

    fn clean(&self, desc: &str) -> String {
        desc.chars().filter(|c| !self.bad_chars.contains(c)).collect()
    }

    fn shorten(&self, cleaned: &str) -> Option<String> {
        if cleaned.chars().count() > self.max_len {
            Some(cleaned.chars().take(self.max_len).collect())
        } else {
            None
        }
    }
}

impl Default for DescriptionFixer {
    fn default() -> Self {
        Self::new(&DescriptionConfig::default(), &HeaderAliases::default())
    }
}

impl Fixer for DescriptionFixer {
    fn meta(&self) -> FixerMeta {
        Self::META
    }

    fn fix(&self, table: &Table) -> Fixed {
        let Some(col) = self.aliases.resolve(table, Field::Description) else {
            return Fixed::unchanged(table);
        };
        let column = table.columns()[col].clone();

        let mut out = table.clone();
        let mut changes = Vec::new();

        for (row, value) in table.column_values(col) {
            let Value::Text(original) = value else {
                trace!(row, "description is not text; skipping");
                continue;
            };

            let cleaned = self.clean(original);
            if cleaned != *original {
                changes.push(ChangeRecord::for_row(
                    row,
                    ChangeKind::BadCharacters,
                    &column,
                    format!(
                        "Bad characters removed from description: '{original}', updated to '{cleaned}'"
                    ),
                ));
            }

            let fixed = match self.shorten(&cleaned) {
                Some(short) => {
                    changes.push(ChangeRecord::for_row(
                        row,
                        ChangeKind::Truncated,
                        &column,
                        format!("Long description: '{original}' shortened to '{short}'"),
                    ));
                    short
                }
                None => cleaned,
            };

            if fixed != *original {
                out.set(row, col, Value::Text(fixed));
            }
        }

        debug!(column = %column, changes = changes.len(), "description fixes");
        Fixed {
            table: out,
            changes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn table(descs: Vec<Value>) -> Table {
        let mut t = Table::new(["description"]);
        for d in descs {
            t.push_row([d]).unwrap();
        }
        t
    }

    #[test]
    fn removes_bad_characters() {
        let t = table(vec![Value::from("50% off, Bob's")]);
        let fixed = DescriptionFixer::default().fix(&t);

        assert_eq!(fixed.table.value(0, "description"), Some(&Value::from("50 off Bobs")));
        assert_eq!(fixed.changes.len(), 1);
        assert_eq!(fixed.changes[0].kind, ChangeKind::BadCharacters);
        assert_eq!(
            fixed.changes[0].message,
            "Bad characters removed from description: '50% off, Bob's', updated to '50 off Bobs'"
        );
        assert_eq!(fixed.changes[0].line, 2);
    }

    #[test]
    fn truncates_to_max_len() {
        let long = "x".repeat(60);
        let t = table(vec![Value::Null, Value::from(long.as_str())]);
        let fixed = DescriptionFixer::default().fix(&t);

        let expected = "x".repeat(50);
        assert_eq!(fixed.table.value(1, "description"), Some(&Value::from(expected.as_str())));
        assert_eq!(fixed.changes.len(), 1);
        assert_eq!(fixed.changes[0].kind, ChangeKind::Truncated);
        assert_eq!(fixed.changes[0].line, 3);
        assert_eq!(
            fixed.changes[0].message,
            format!("Long description: '{long}' shortened to '{expected}'")
        );
    }

    #[test]
    fn both_fixes_can_fire_for_one_row() {
        let original = format!("{}'%", "a".repeat(55));
        let t = table(vec![Value::from(original.as_str())]);
        let fixed = DescriptionFixer::default().fix(&t);

        let kinds: Vec<_> = fixed.changes.iter().map(|c| c.kind).collect();
        assert_eq!(kinds, vec![ChangeKind::BadCharacters, ChangeKind::Truncated]);
        assert_eq!(
            fixed.table.value(0, "description"),
            Some(&Value::from("a".repeat(50).as_str()))
        );
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let desc = "é".repeat(50);
        let t = table(vec![Value::from(desc.as_str())]);
        let fixed = DescriptionFixer::default().fix(&t);
        assert!(fixed.changes.is_empty());
        assert_eq!(fixed.table, t);
    }

    #[test]
    fn non_text_values_are_untouched() {
        let t = table(vec![Value::Null, Value::Integer(7), Value::Float(f64::NAN)]);
        let fixed = DescriptionFixer::default().fix(&t);
        assert!(fixed.changes.is_empty());
        assert_eq!(fixed.table.value(1, "description"), Some(&Value::Integer(7)));
    }

    #[test]
    fn missing_column_is_a_no_op() {
        let mut t = Table::new(["sku", "vatrate"]);
        t.push_row([Value::from("A'1"), Value::Float(23.0)]).unwrap();
        let fixed = DescriptionFixer::default().fix(&t);
        assert!(fixed.changes.is_empty());
        assert_eq!(fixed.table, t);
    }

    #[test]
    fn input_table_is_not_mutated() {
        let t = table(vec![Value::from("it's")]);
        let before = t.clone();
        let fixed = DescriptionFixer::default().fix(&t);
        assert_eq!(t, before);
        assert_eq!(fixed.table.value(0, "description"), Some(&Value::from("its")));
    }

    #[test]
    fn custom_config_is_respected() {
        let config = DescriptionConfig {
            bad_chars: "#".to_string(),
            max_len: 5,
        };
        let fixer = DescriptionFixer::new(&config, &HeaderAliases::default());
        let t = table(vec![Value::from("it's #1 product")]);
        let fixed = fixer.fix(&t);
        assert_eq!(fixed.table.value(0, "description"), Some(&Value::from("it's ")));
    }

    #[test]
    fn resolves_aliased_header_and_reports_actual_name() {
        let mut t = Table::new(["Product Description"]);
        t.push_row([Value::from("a,b")]).unwrap();
        let fixed = DescriptionFixer::default().fix(&t);
        assert_eq!(fixed.changes[0].column, "Product Description");
        assert_eq!(fixed.table.get(0, 0), Some(&Value::from("ab")));
    }
}
