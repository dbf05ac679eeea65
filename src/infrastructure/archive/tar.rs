//! Tar Extractor
//!
//! Unpacks gzip-compressed tarballs with the system `tar`.

use std::process::Command;

use crate::domain::entities::{BackupReference, Workspace};
use crate::domain::ports::{ArchiveExtractor, ToolError, ToolOutput};
use crate::infrastructure::process::run_captured;

/// Extractor using `tar -xvzf <archive> -C <workspace>`
pub struct TarExtractor {
    program: String,
}

impl TarExtractor {
    pub fn new() -> Self {
        Self {
            program: "tar".to_string(),
        }
    }

    fn command(&self, backup: &BackupReference, workspace: &Workspace) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-xvzf")
            .arg(backup.path())
            .arg("-C")
            .arg(workspace.directory());
        cmd
    }
}

impl Default for TarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArchiveExtractor for TarExtractor {
    fn name(&self) -> &'static str {
        "tar"
    }

    fn extract(
        &self,
        backup: &BackupReference,
        workspace: &Workspace,
    ) -> Result<ToolOutput, ToolError> {
        run_captured(&mut self.command(backup, workspace))
    }
}
