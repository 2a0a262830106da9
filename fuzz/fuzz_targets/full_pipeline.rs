#![no_main]

//! Fuzz target for the full description -> decimals -> VAT pipeline.
//!
//! Builds a catalog from structured arbitrary input and checks the invariants
//! that must hold for any table.

use catalogfix_domain::{CatalogConfig, Pipeline};
use catalogfix_types::{Table, Value};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, arbitrary::Arbitrary)]
struct PipelineInput {
    rows: Vec<RowInput>,
    round_decimals: bool,
    normalize_headers: bool,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct RowInput {
    description: CellInput,
    cost_price: CellInput,
    vat_rate: CellInput,
}

#[derive(Debug, arbitrary::Arbitrary)]
enum CellInput {
    Null,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl From<CellInput> for Value {
    fn from(c: CellInput) -> Self {
        match c {
            CellInput::Null => Value::Null,
            CellInput::Integer(i) => Value::Integer(i),
            CellInput::Float(f) => Value::Float(f),
            CellInput::Text(s) => Value::Text(s),
        }
    }
}

fuzz_target!(|input: PipelineInput| {
    let mut table = Table::new(["Description", "Cost Price", "VAT Rate"]);
    for row in input.rows {
        let _ = table.push_row([
            row.description.into(),
            row.cost_price.into(),
            row.vat_rate.into(),
        ]);
    }

    let config = CatalogConfig {
        round_decimals: input.round_decimals,
        normalize_headers: input.normalize_headers,
        ..CatalogConfig::default()
    };
    let Ok(pipeline) = Pipeline::new(&config) else {
        return;
    };

    // Debug output, since NaN cells never compare equal.
    let before = format!("{table:?}");
    let out = pipeline.run(&table);

    assert_eq!(format!("{table:?}"), before);
    assert_eq!(out.table.row_count(), table.row_count());

    for row in out.table.rows() {
        if let Value::Text(desc) = &row[0] {
            assert!(desc.chars().count() <= 50);
            assert!(!desc.contains(['\'', ',', '%']));
        }
    }

    let second = pipeline.run(&out.table);
    assert!(
        second
            .changes
            .section("Description Fixes")
            .is_some_and(|s| s.records.is_empty())
    );
});
