//! Rollback Options
//!
//! Invocation inputs for the rollback use case.

use std::path::PathBuf;

/// Options for the rollback use case
#[derive(Debug, Clone)]
pub struct RollbackOptions {
    /// Backup archive to redeploy (checked by the validator)
    pub backup_file: PathBuf,
}

impl RollbackOptions {
    pub fn new(backup_file: impl Into<PathBuf>) -> Self {
        Self {
            backup_file: backup_file.into(),
        }
    }
}
