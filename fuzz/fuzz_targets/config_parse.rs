#![no_main]

//! Fuzz target for TOML configuration parsing.

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must also build a pipeline.
    if let Ok(config) = catalogfix_domain::parse_config(s) {
        assert!(catalogfix_domain::Pipeline::new(&config).is_ok());
    }
});
