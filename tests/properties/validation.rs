//! Property tests for argument validation.

use std::path::Path;

use proptest::prelude::*;
use serde_json::{json, Value};

use rollback::application::validate;
use rollback::domain::value_objects::ConfigField;
use rollback::RawDeploymentConfig;

/// Any JSON scalar a config author might plausibly write, or nothing
fn field_value() -> impl Strategy<Value = Option<Value>> {
    prop_oneof![
        Just(None),
        Just(Some(Value::Null)),
        any::<bool>().prop_map(|b| Some(json!(b))),
        any::<i64>().prop_map(|n| Some(json!(n))),
        "[ \t]{0,3}".prop_map(|s| Some(json!(s))),
        "[A-Za-z0-9_./@-]{1,24}".prop_map(|s| Some(json!(s))),
        Just(Some(json!(["a", "b"]))),
    ]
}

fn is_usable(value: &Option<Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.trim().is_empty())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one violation per unusable field, in host/path/username/ssh-key order.
    #[test]
    fn property_violations_name_exactly_the_bad_fields(
        host in field_value(),
        path in field_value(),
        username in field_value(),
        ssh_key in field_value(),
        ssh_port in field_value(),
        post_command in field_value(),
    ) {
        let mut expected = Vec::new();
        for (value, field) in [
            (&host, ConfigField::Host),
            (&path, ConfigField::Path),
            (&username, ConfigField::Username),
            (&ssh_key, ConfigField::SshKey),
        ] {
            if !is_usable(value) {
                expected.push(field);
            }
        }
        // The backup never exists here
        expected.push(ConfigField::BackupFile);

        let raw = RawDeploymentConfig {
            host,
            path,
            username,
            ssh_key,
            ssh_port,
            post_command,
        };

        let violations = validate(&raw, Path::new("/nonexistent/rollback/backup.tar.gz"))
            .expect_err("backup is missing");
        let fields: Vec<ConfigField> = violations.iter().map(|v| v.field()).collect();
        prop_assert_eq!(fields, expected);
    }

    /// PROPERTY: with usable fields and an existing backup, validation passes
    /// whatever `ssh-port` and `post-command` hold.
    #[test]
    fn property_optional_fields_never_fail_validation(
        ssh_port in field_value(),
        post_command in field_value(),
    ) {
        let dir = tempfile::tempdir().unwrap();
        let backup = dir.path().join("backup.tar.gz");
        std::fs::write(&backup, b"x").unwrap();

        let raw = RawDeploymentConfig {
            host: Some(json!("h")),
            path: Some(json!("/srv/app")),
            username: Some(json!("u")),
            ssh_key: Some(json!("/k")),
            ssh_port,
            post_command: post_command.clone(),
        };

        let inputs = validate(&raw, &backup).expect("valid config");
        prop_assert!(inputs.config.ssh_port() >= 1);
        prop_assert_eq!(inputs.config.post_command().is_some(), is_usable(&post_command));
    }
}
