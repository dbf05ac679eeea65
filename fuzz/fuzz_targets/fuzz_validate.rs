#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Whatever parses must validate without panicking
        if let Ok((raw, _)) = rollback::config::parse_with_warnings(content, Path::new("fuzz.json")) {
            let _ = rollback::application::validate(&raw, Path::new("/nonexistent.tar.gz"));
        }
    }
});
