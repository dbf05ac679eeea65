//! Remote Runner Port
//!
//! Runs one command on the remote host over a fresh session.

use super::tool_output::{ToolError, ToolOutput};
use crate::domain::entities::DeploymentConfig;

/// Capability that executes a command on the deployment target
pub trait RemoteRunner {
    /// Run `command` verbatim on the host described by `config`
    fn run(&self, config: &DeploymentConfig, command: &str) -> Result<ToolOutput, ToolError>;
}
