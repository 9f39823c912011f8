#![no_main]

use libfuzzer_sys::fuzz_target;
use mockify::backend::{MockConfig, generate_mock_boilerplate};

fuzz_target!(|data: &[u8]| {
    // Whole pipeline: lex, parse, classify, emit. Errors are fine, panics are not.
    if let Ok(s) = std::str::from_utf8(data) {
        let _ = generate_mock_boilerplate(s, &MockConfig::default());
    }
});
