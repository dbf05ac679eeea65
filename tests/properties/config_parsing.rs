//! Property tests for config file parsing.

use std::path::Path;

use proptest::prelude::*;
use serde_json::{Map, Value};

use rollback::config::{parse_with_warnings, KNOWN_KEYS};

proptest! {
    /// PROPERTY: arbitrary content never panics the parser.
    #[test]
    fn property_parse_never_panics(content in ".{0,200}") {
        let _ = parse_with_warnings(&content, Path::new("fuzz.json"));
    }

    /// PROPERTY: every unknown key yields exactly one warning; known keys none.
    #[test]
    fn property_unknown_keys_each_warn_once(
        unknown in proptest::collection::btree_set("x[a-z]{1,10}", 0..6),
        host in "[a-z.]{1,12}",
    ) {
        let mut object = Map::new();
        object.insert("host".to_string(), Value::String(host));
        for key in &unknown {
            object.insert(key.clone(), Value::Bool(true));
        }
        let content = serde_json::to_string_pretty(&Value::Object(object)).unwrap();

        let (_, warnings) = parse_with_warnings(&content, Path::new("deploy.json")).unwrap();
        let mut warned: Vec<String> = warnings.into_iter().map(|w| w.key).collect();
        warned.sort();
        let expected: Vec<String> = unknown.into_iter().collect();

        prop_assert_eq!(warned, expected);
        prop_assert!(KNOWN_KEYS.contains(&"host"));
    }
}
