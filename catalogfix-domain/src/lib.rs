//! Domain logic: turn a raw catalog table into a corrected table plus a change log.
//!
//! This crate owns *what* gets fixed and how each fix is described. Presenting the
//! change log is the `catalogfix-render` crate's job.

mod columns;
mod config;
mod error;
mod fixers;
mod pipeline;

pub use columns::{Field, HeaderAliases, normalize_header};
pub use config::{CatalogConfig, DescriptionConfig, VatCode, VatCodeTable, VatConfig, parse_config};
pub use error::ConfigError;
pub use fixers::{
    DecimalFixer, DescriptionFixer, Fixed, Fixer, FixerMeta, VatFixer, builtin_fixer_metas,
    builtin_fixers,
};
pub use pipeline::{Pipeline, PipelineOutcome};
