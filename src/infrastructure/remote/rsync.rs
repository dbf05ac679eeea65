//! Rsync Synchronizer
//!
//! Mirrors the workspace with `rsync -az --delete` over ssh.

use std::path::Path;
use std::process::Command;

use super::ssh::SshTransport;
use crate::domain::entities::{DeploymentConfig, Workspace};
use crate::domain::ports::{RemoteSynchronizer, ToolError, ToolOutput};
use crate::infrastructure::process::run_captured;

/// Mirror transfer using rsync
///
/// Archive mode and compression; remote files absent from the workspace are
/// deleted, so the remote path ends up an exact copy.
pub struct RsyncSynchronizer {
    program: String,
}

impl RsyncSynchronizer {
    pub fn new() -> Self {
        Self {
            program: "rsync".to_string(),
        }
    }

    fn command(&self, workspace: &Workspace, config: &DeploymentConfig) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-az")
            .arg("--delete")
            .arg("-e")
            .arg(SshTransport::for_config(config).remote_shell())
            .arg(contents_of(workspace.directory())) // trailing slash = copy contents
            .arg(config.destination());
        cmd
    }
}

impl Default for RsyncSynchronizer {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteSynchronizer for RsyncSynchronizer {
    fn name(&self) -> &'static str {
        "rsync"
    }

    fn mirror(
        &self,
        workspace: &Workspace,
        config: &DeploymentConfig,
    ) -> Result<ToolOutput, ToolError> {
        run_captured(&mut self.command(workspace, config))
    }
}

fn contents_of(dir: &Path) -> String {
    let dir = dir.display().to_string();
    if dir.ends_with('/') {
        dir
    } else {
        format!("{}/", dir)
    }
}
