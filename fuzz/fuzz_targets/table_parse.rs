#![no_main]

//! Fuzz target for table JSON parsing.
//!
//! Arbitrary JSON must either be rejected or produce a table whose rows all
//! match the column count.

use catalogfix_types::Table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    if let Ok(table) = serde_json::from_str::<Table>(s) {
        let width = table.columns().len();
        assert!(table.rows().iter().all(|r| r.len() == width));
        let _ = serde_json::to_string(&table);
    }

    let _ = serde_json::from_str::<Vec<catalogfix_types::Value>>(s);
    let _ = serde_json::from_str::<catalogfix_types::ChangeLog>(s);
});
