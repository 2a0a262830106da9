//! Error types for catalogfix-domain.
//!
//! Fixers never fail: ineligible cells are skipped and missing columns turn a
//! fixer into a no-op. The only fallible step is building a pipeline from
//! configuration.

use crate::columns::Field;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration text is not valid TOML or has the wrong shape.
    #[error("invalid config: {0}")]
    InvalidToml(#[from] toml::de::Error),

    #[error("VAT rate {0} is not a finite number")]
    NonFiniteVatRate(f64),

    #[error("VAT rate {0} is mapped more than once")]
    DuplicateVatRate(f64),

    #[error("description max_len must be greater than zero")]
    ZeroMaxLength,

    #[error("alias list for `{0}` is empty")]
    EmptyAliases(Field),
}
