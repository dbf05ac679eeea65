#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and unknown-key suggestions should never panic
        let _ = rollback::config::parse_with_warnings(content, Path::new("fuzz.json"));
    }
});
