//! Configuration types

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Keys the pipeline reads from the config file
pub const KNOWN_KEYS: &[&str] = &[
    "host",
    "username",
    "path",
    "ssh-key",
    "ssh-port",
    "post-command",
];

/// The deployment config file as parsed, before validation.
///
/// Every field is an untyped optional value so the validator can tell an
/// absent key from a key of the wrong type. JSON `null` reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RawDeploymentConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<Value>,
    /// Remote destination directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<Value>,
    /// Local private key path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_key: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ssh_port: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_command: Option<Value>,
}

impl RawDeploymentConfig {
    /// Render a raw value for the deployment summary
    pub fn display_value(value: Option<&Value>) -> String {
        match value {
            None => "(not set)".to_string(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}
