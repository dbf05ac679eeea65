//! Remote Synchronizer Port
//!
//! Mirrors a local workspace onto `username@host:remote_path`. The transfer
//! is destructive: remote files that are absent locally are deleted.

use super::tool_output::{ToolError, ToolOutput};
use crate::domain::entities::{DeploymentConfig, Workspace};

/// Capability that performs the authenticated mirror transfer
pub trait RemoteSynchronizer {
    /// Name of the underlying tool (for diagnostics)
    fn name(&self) -> &'static str;

    /// Make the remote path an exact copy of the workspace contents
    fn mirror(
        &self,
        workspace: &Workspace,
        config: &DeploymentConfig,
    ) -> Result<ToolOutput, ToolError>;
}
