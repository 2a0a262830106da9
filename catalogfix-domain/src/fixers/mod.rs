use crate::config::CatalogConfig;
use catalogfix_types::{ChangeRecord, Table};

mod decimals;
mod description;
mod vat;

pub use decimals::DecimalFixer;
pub use description::DescriptionFixer;
pub use vat::VatFixer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixerMeta {
    pub key: &'static str,
    /// Title of this fixer's section in the change log.
    pub section: &'static str,
    pub description: &'static str,
}

/// Output of one fixer: a fresh copy of the table and what changed in it.
#[derive(Debug, Clone, PartialEq)]
pub struct Fixed {
    pub table: Table,
    pub changes: Vec<ChangeRecord>,
}

impl Fixed {
    pub(crate) fn unchanged(table: &Table) -> Self {
        Self {
            table: table.clone(),
            changes: Vec::new(),
        }
    }
}

/// A stateless, field-level fixer.
///
/// Implementations never touch the input table; they return a corrected copy.
pub trait Fixer: Send + Sync {
    fn meta(&self) -> FixerMeta;

    fn fix(&self, table: &Table) -> Fixed;
}

/// Metadata for every built-in fixer, in pipeline order.
pub fn builtin_fixer_metas() -> Vec<FixerMeta> {
    vec![
        DescriptionFixer::META,
        DecimalFixer::META,
        VatFixer::META,
    ]
}

/// Built-in fixers for `config`, in pipeline order. The decimal stage is only
/// included when `round_decimals` is set.
pub fn builtin_fixers(config: &CatalogConfig) -> Vec<Box<dyn Fixer>> {
    let mut fixers: Vec<Box<dyn Fixer>> = vec![Box::new(DescriptionFixer::new(
        &config.description,
        &config.aliases,
    ))];
    if config.round_decimals {
        fixers.push(Box::new(DecimalFixer::new(&config.aliases)));
    }
    fixers.push(Box::new(VatFixer::new(
        config.vat.codes.clone(),
        &config.aliases,
    )));
    fixers
}
