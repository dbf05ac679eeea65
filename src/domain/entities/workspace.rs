//! Workspace entity - the scratch directory of one run
//!
//! The directory name is the creation time at minute granularity, so two
//! runs started in the same minute share a directory. The pipeline never
//! removes it.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};

/// `chrono` format of a workspace directory name (sortable)
pub const WORKSPACE_NAME_FORMAT: &str = "%Y-%m-%d-%H-%M";

/// A scratch directory holding the extracted backup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    directory: PathBuf,
    created_at: DateTime<Local>,
}

impl Workspace {
    /// Derive the workspace for `created_at` under `root`
    pub fn under(root: &Path, created_at: DateTime<Local>) -> Self {
        Self {
            directory: root.join(Self::directory_name(&created_at)),
            created_at,
        }
    }

    /// Directory name for a given creation time
    pub fn directory_name(created_at: &DateTime<Local>) -> String {
        created_at.format(WORKSPACE_NAME_FORMAT).to_string()
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}
