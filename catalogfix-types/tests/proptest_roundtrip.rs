//! Property-based tests for the table DTOs.
//!
//! These tests verify that:
//! - Cells and tables survive a JSON round-trip with their variants intact
//! - Rows of the wrong width are rejected on deserialization
//! - `format_float` output parses back to the same float and never reads as an integer

use catalogfix_types::value::format_float;
use catalogfix_types::{Table, Value};
use proptest::prelude::*;

/// Floats with at most two decimals, which JSON renders and parses exactly.
fn arb_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<i64>().prop_map(Value::Integer),
        (-1_000_000_000i64..1_000_000_000).prop_map(|c| Value::Float(c as f64 / 100.0)),
        "[a-zA-Z0-9 ,'%.-]{0,20}".prop_map(Value::Text),
    ]
}

fn arb_table() -> impl Strategy<Value = Table> {
    (1usize..5).prop_flat_map(|width| {
        prop::collection::vec(prop::collection::vec(arb_value(), width), 0..8).prop_map(
            move |rows| {
                let mut t = Table::new((0..width).map(|i| format!("col{i}")));
                for row in rows {
                    t.push_row(row).unwrap();
                }
                t
            },
        )
    })
}

proptest! {
    #[test]
    fn value_roundtrips_through_json(v in arb_value()) {
        let json = serde_json::to_string(&v).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, v);
    }

    #[test]
    fn table_roundtrips_through_json(t in arb_table()) {
        let json = serde_json::to_string(&t).unwrap();
        let back: Table = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, t);
    }

    #[test]
    fn ragged_rows_are_rejected(width in 1usize..5, extra in 1usize..3) {
        let json = serde_json::json!({
            "columns": (0..width).map(|i| format!("col{i}")).collect::<Vec<_>>(),
            "rows": [vec![serde_json::Value::Null; width + extra]],
        });
        prop_assert!(serde_json::from_value::<Table>(json).is_err());
    }

    #[test]
    fn format_float_parses_back(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let rendered = format_float(x);
        let parsed: f64 = rendered.parse().unwrap();
        prop_assert_eq!(parsed.to_bits(), x.to_bits());
        prop_assert!(rendered.contains('.') || rendered.contains('e'));
    }
}
