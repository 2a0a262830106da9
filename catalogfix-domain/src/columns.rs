use catalogfix_types::Table;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// Lowercase, trim, and drop every space: `" Cost Price "` becomes `"costprice"`.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "")
}

/// Logical catalog fields that fixers look up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Description,
    CostPrice,
    Rrp,
    SellingPrice,
    StagingPrice,
    VatRate,
}

impl Field {
    pub const MONEY: [Field; 4] = [
        Field::CostPrice,
        Field::Rrp,
        Field::SellingPrice,
        Field::StagingPrice,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Description => "description",
            Field::CostPrice => "cost_price",
            Field::Rrp => "rrp",
            Field::SellingPrice => "selling_price",
            Field::StagingPrice => "staging_price",
            Field::VatRate => "vat_rate",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepted header spellings per field.
///
/// Matching is exact after [`normalize_header`] is applied to both sides, so
/// `"Cost Price"` in a sheet matches the alias `"costprice"`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HeaderAliases {
    pub description: Vec<String>,
    pub cost_price: Vec<String>,
    pub rrp: Vec<String>,
    pub selling_price: Vec<String>,
    pub staging_price: Vec<String>,
    pub vat_rate: Vec<String>,
}

impl Default for HeaderAliases {
    fn default() -> Self {
        fn list(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            description: list(&[
                "description",
                "desc",
                "productdescription",
                "itemdescription",
            ]),
            cost_price: list(&["costprice", "cost", "unitcost"]),
            rrp: list(&["rrp", "recommendedretailprice", "retailprice"]),
            selling_price: list(&["sellingprice", "saleprice", "price"]),
            staging_price: list(&["stgprice", "stagingprice"]),
            vat_rate: list(&["vatrate", "vat", "vat%", "taxrate"]),
        }
    }
}

impl HeaderAliases {
    pub fn for_field(&self, field: Field) -> &[String] {
        match field {
            Field::Description => &self.description,
            Field::CostPrice => &self.cost_price,
            Field::Rrp => &self.rrp,
            Field::SellingPrice => &self.selling_price,
            Field::StagingPrice => &self.staging_price,
            Field::VatRate => &self.vat_rate,
        }
    }

    /// Index of the first table column, in table order, whose normalized name
    /// matches one of the field's aliases.
    pub fn resolve(&self, table: &Table, field: Field) -> Option<usize> {
        let aliases: Vec<String> = self
            .for_field(field)
            .iter()
            .map(|a| normalize_header(a))
            .collect();

        let found = table
            .columns()
            .iter()
            .position(|c| aliases.contains(&normalize_header(c)));

        match found {
            Some(idx) => debug!(field = %field, column = %table.columns()[idx], "resolved column"),
            None => debug!(field = %field, "no matching column"),
        }
        found
    }
}
