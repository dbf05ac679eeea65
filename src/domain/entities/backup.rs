//! BackupReference entity - the archive a run redeploys

use std::path::{Path, PathBuf};

/// Path to a backup archive that was an existing regular file at
/// validation time
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackupReference {
    path: PathBuf,
}

impl BackupReference {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
