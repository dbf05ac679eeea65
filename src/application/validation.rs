//! Config Validator
//!
//! Checks the raw config values and the backup path in one pass. Every rule
//! runs independently so the operator gets the complete list of problems
//! from a single invocation.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::{json_type_name, RawDeploymentConfig};
use crate::domain::entities::{BackupReference, DeploymentConfig};
use crate::domain::value_objects::{resolve_port, ConfigField, PortSource, Violation};

/// Output of a successful validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedInputs {
    pub config: DeploymentConfig,
    pub backup: BackupReference,
    pub port_source: PortSource,
}

/// Validate the deployment arguments.
///
/// Violations come back in a fixed order: host, path, username, ssh-key,
/// backup-file. An unusable `ssh-port` is never a violation; it is replaced
/// by the default port.
pub fn validate(
    raw: &RawDeploymentConfig,
    backup_file: &Path,
) -> Result<ValidatedInputs, Vec<Violation>> {
    let mut violations = Vec::new();

    let host = collect(
        required_string(raw.host.as_ref(), ConfigField::Host),
        &mut violations,
    );
    let remote_path = collect(
        required_string(raw.path.as_ref(), ConfigField::Path),
        &mut violations,
    );
    let username = collect(
        required_string(raw.username.as_ref(), ConfigField::Username),
        &mut violations,
    );
    let ssh_key = collect(
        required_string(raw.ssh_key.as_ref(), ConfigField::SshKey),
        &mut violations,
    );
    let backup = collect(check_backup_file(backup_file), &mut violations);

    let (port, port_source) = resolve_port(raw.ssh_port.as_ref());

    match (host, remote_path, username, ssh_key, backup) {
        (Some(host), Some(remote_path), Some(username), Some(ssh_key), Some(backup)) => {
            let config = DeploymentConfig::new(host, remote_path, username, ssh_key)
                .with_ssh_port(port)
                .with_post_command(post_command(raw.post_command.as_ref()));
            Ok(ValidatedInputs {
                config,
                backup,
                port_source,
            })
        }
        _ => Err(violations),
    }
}

fn collect<T>(result: Result<T, Violation>, violations: &mut Vec<Violation>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(violation) => {
            violations.push(violation);
            None
        }
    }
}

fn required_string(value: Option<&Value>, field: ConfigField) -> Result<String, Violation> {
    match value {
        None | Some(Value::Null) => Err(Violation::Missing { field }),
        Some(Value::String(s)) if s.trim().is_empty() => Err(Violation::Blank { field }),
        Some(Value::String(s)) => Ok(s.trim().to_string()),
        Some(other) => Err(Violation::NotAString {
            field,
            found: json_type_name(other),
        }),
    }
}

fn check_backup_file(path: &Path) -> Result<BackupReference, Violation> {
    if path.to_string_lossy().trim().is_empty() {
        return Err(Violation::Missing {
            field: ConfigField::BackupFile,
        });
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_file() => Ok(BackupReference::new(path)),
        _ => Err(Violation::BackupNotAFile {
            path: path.to_path_buf(),
        }),
    }
}

/// A blank or non-string post command means "none"; otherwise verbatim
fn post_command(value: Option<&Value>) -> Option<String> {
    match value {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    }
}
