use crate::columns::{Field, HeaderAliases};
use crate::config::VatCodeTable;
use crate::fixers::{Fixed, Fixer, FixerMeta};
use catalogfix_types::{ChangeKind, ChangeRecord, Table, Value};
use tracing::debug;

/// Replaces known VAT percentages with internal VAT codes.
#[derive(Debug, Clone, Default)]
pub struct VatFixer {
    codes: VatCodeTable,
    aliases: HeaderAliases,
}

impl VatFixer {
    pub const META: FixerMeta = FixerMeta {
        key: "vat",
        section: "VAT Fixes",
        description: "Maps VAT percentages to VAT codes",
    };

    pub fn new(codes: VatCodeTable, aliases: &HeaderAliases) -> Self {
        Self {
            codes,
            aliases: aliases.clone(),
        }
    }
}

impl Fixer for VatFixer {
    fn meta(&self) -> FixerMeta {
        Self::META
    }

    fn fix(&self, table: &Table) -> Fixed {
        let Some(col) = self.aliases.resolve(table, Field::VatRate) else {
            return Fixed::unchanged(table);
        };
        let column = &table.columns()[col];

        let mut out = table.clone();
        let mut changes = Vec::new();

        for (row, value) in table.column_values(col) {
            let Some(code) = value.as_f64().and_then(|rate| self.codes.code_for(rate)) else {
                continue;
            };
            out.set(row, col, Value::Integer(code));
            changes.push(ChangeRecord::for_row(
                row,
                ChangeKind::VatCode,
                column,
                format!("VAT Rate {value} updated to code {code}"),
            ));
        }

        debug!(column = %column, changes = changes.len(), "vat fixes");
        Fixed {
            table: out,
            changes,
        }
    }
}
