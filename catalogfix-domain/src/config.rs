//! Fixer configuration.
//!
//! Everything a fixer needs (disallowed characters, VAT codes, header aliases)
//! is passed in explicitly, so callers can run different VAT schemes side by
//! side. Configuration is usually embedded as TOML:
//!
//! ```toml
//! round_decimals = true
//!
//! [description]
//! bad_chars = "',%"
//! max_len = 50
//!
//! [[vat.codes]]
//! rate = 23.0
//! code = 1
//! ```

use crate::columns::{Field, HeaderAliases};
use crate::error::ConfigError;
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Rewrite every header with `normalize_header` before the fixers run.
    pub normalize_headers: bool,

    /// Run the decimal stage. Off unless asked for.
    pub round_decimals: bool,

    pub description: DescriptionConfig,

    pub vat: VatConfig,

    pub aliases: HeaderAliases,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DescriptionConfig {
    /// Every character in this string is removed from descriptions.
    pub bad_chars: String,

    /// Maximum description length, in characters.
    pub max_len: usize,
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            bad_chars: "',%".to_string(),
            max_len: 50,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VatConfig {
    pub codes: VatCodeTable,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct VatCode {
    pub rate: f64,
    pub code: i64,
}

/// Percentage → internal VAT code.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct VatCodeTable(Vec<VatCode>);

impl Default for VatCodeTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl VatCodeTable {
    /// 23% → 1, 13.5% → 2, 9% → 3.
    pub fn standard() -> Self {
        Self(vec![
            VatCode { rate: 23.0, code: 1 },
            VatCode { rate: 13.5, code: 2 },
            VatCode { rate: 9.0, code: 3 },
        ])
    }

    /// [`standard`](Self::standard) plus 0% → 0.
    pub fn standard_with_zero_rated() -> Self {
        let mut table = Self::standard();
        table.0.insert(0, VatCode { rate: 0.0, code: 0 });
        table
    }

    pub fn new(codes: Vec<VatCode>) -> Self {
        Self(codes)
    }

    /// Code for an exactly matching rate. NaN never matches.
    pub fn code_for(&self, rate: f64) -> Option<i64> {
        self.0.iter().find(|c| c.rate == rate).map(|c| c.code)
    }

    pub fn codes(&self) -> &[VatCode] {
        &self.0
    }
}

/// Parse and validate a TOML configuration.
pub fn parse_config(contents: &str) -> Result<CatalogConfig, ConfigError> {
    let config: CatalogConfig = toml::from_str(contents)?;
    config.validate()?;
    Ok(config)
}

impl CatalogConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.description.max_len == 0 {
            return Err(ConfigError::ZeroMaxLength);
        }

        let codes = self.vat.codes.codes();
        for (i, c) in codes.iter().enumerate() {
            if !c.rate.is_finite() {
                return Err(ConfigError::NonFiniteVatRate(c.rate));
            }
            if codes[..i].iter().any(|prev| prev.rate == c.rate) {
                return Err(ConfigError::DuplicateVatRate(c.rate));
            }
        }

        for field in [Field::Description, Field::VatRate]
            .into_iter()
            .chain(Field::MONEY)
        {
            if self.aliases.for_field(field).is_empty() {
                return Err(ConfigError::EmptyAliases(field));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").expect("parse");
        assert!(!config.normalize_headers);
        assert!(!config.round_decimals);
        assert_eq!(config.description.bad_chars, "',%");
        assert_eq!(config.description.max_len, 50);
        assert_eq!(config.vat.codes, VatCodeTable::standard());
        assert_eq!(config.aliases, HeaderAliases::default());
    }

    #[test]
    fn parses_all_sections() {
        let config = parse_config(
            r##"
normalize_headers = true
round_decimals = true

[description]
bad_chars = "#"
max_len = 20

[[vat.codes]]
rate = 0.0
code = 0

[[vat.codes]]
rate = 23.0
code = 1

[aliases]
description = ["item text"]
"##,
        )
        .expect("parse");

        assert!(config.normalize_headers);
        assert!(config.round_decimals);
        assert_eq!(config.description.bad_chars, "#");
        assert_eq!(config.description.max_len, 20);
        assert_eq!(config.vat.codes.code_for(0.0), Some(0));
        assert_eq!(config.vat.codes.code_for(13.5), None);
        assert_eq!(config.aliases.description, vec!["item text".to_string()]);
        assert_eq!(config.aliases.vat_rate, HeaderAliases::default().vat_rate);
    }

    #[test]
    fn rejects_zero_max_len() {
        let err = parse_config("[description]\nmax_len = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroMaxLength));
    }

    #[test]
    fn rejects_duplicate_rates() {
        let err = parse_config(
            "[[vat.codes]]\nrate = 9.0\ncode = 3\n\n[[vat.codes]]\nrate = 9.0\ncode = 4\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateVatRate(r) if r == 9.0));
    }

    #[test]
    fn rejects_non_finite_rates() {
        let err = parse_config("[[vat.codes]]\nrate = nan\ncode = 3\n").unwrap_err();
        assert!(matches!(err, ConfigError::NonFiniteVatRate(_)));
    }

    #[test]
    fn rejects_empty_alias_lists() {
        let err = parse_config("[aliases]\nrrp = []\n").unwrap_err();
        assert!(matches!(err, ConfigError::EmptyAliases(Field::Rrp)));
    }

    #[test]
    fn rejects_malformed_toml() {
        let err = parse_config("round_decimals = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidToml(_)));
    }

    #[test]
    fn zero_rated_variant_adds_zero_code() {
        let table = VatCodeTable::standard_with_zero_rated();
        assert_eq!(table.code_for(0.0), Some(0));
        assert_eq!(table.code_for(-0.0), Some(0));
        assert_eq!(table.code_for(23.0), Some(1));
        assert_eq!(table.code_for(f64::NAN), None);
        assert_eq!(VatCodeTable::standard().code_for(0.0), None);
    }
}
