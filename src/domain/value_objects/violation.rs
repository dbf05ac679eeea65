//! Validation violations
//!
//! One `Violation` per malformed or missing deployment argument. The
//! validator collects all of them before reporting.

use std::path::PathBuf;

use serde::Serialize;

/// A deployment argument checked by the validator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ConfigField {
    Host,
    Path,
    Username,
    SshKey,
    BackupFile,
}

impl ConfigField {
    /// Key as written in the config file (or CLI flag for the backup file)
    pub fn key(&self) -> &'static str {
        match self {
            ConfigField::Host => "host",
            ConfigField::Path => "path",
            ConfigField::Username => "username",
            ConfigField::SshKey => "ssh-key",
            ConfigField::BackupFile => "backup-file",
        }
    }
}

impl std::fmt::Display for ConfigField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Violation {
    /// Field absent (or JSON null)
    Missing { field: ConfigField },
    /// Field present with a non-string JSON type
    NotAString {
        field: ConfigField,
        found: &'static str,
    },
    /// Field is a string that is empty after trimming
    Blank { field: ConfigField },
    /// Backup path does not resolve to an existing regular file
    BackupNotAFile { path: PathBuf },
}

impl Violation {
    /// The field this violation is about
    pub fn field(&self) -> ConfigField {
        match self {
            Violation::Missing { field }
            | Violation::NotAString { field, .. }
            | Violation::Blank { field } => *field,
            Violation::BackupNotAFile { .. } => ConfigField::BackupFile,
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::Missing { field } => write!(f, "no {} defined", field),
            Violation::NotAString { field, found } => {
                write!(f, "{} must be a string, found {}", field, found)
            }
            Violation::Blank { field } => write!(f, "{} is empty", field),
            Violation::BackupNotAFile { path } => write!(f, "{} is not a file", path.display()),
        }
    }
}
