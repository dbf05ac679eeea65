//! DeploymentConfig entity - the validated remote target of one run
//!
//! Built once by the validator and passed by reference into every stage.
//! Nothing mutates it after construction.

use std::path::{Path, PathBuf};

use crate::domain::value_objects::DEFAULT_SSH_PORT;

/// Validated deployment parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentConfig {
    host: String,
    remote_path: String,
    username: String,
    ssh_key_path: PathBuf,
    ssh_port: u16,
    post_command: Option<String>,
}

impl DeploymentConfig {
    /// Create a config with the default port and no post command
    pub fn new(
        host: impl Into<String>,
        remote_path: impl Into<String>,
        username: impl Into<String>,
        ssh_key_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            host: host.into(),
            remote_path: remote_path.into(),
            username: username.into(),
            ssh_key_path: ssh_key_path.into(),
            ssh_port: DEFAULT_SSH_PORT,
            post_command: None,
        }
    }

    pub fn with_ssh_port(mut self, port: u16) -> Self {
        self.ssh_port = port;
        self
    }

    pub fn with_post_command(mut self, command: Option<String>) -> Self {
        self.post_command = command;
        self
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn remote_path(&self) -> &str {
        &self.remote_path
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn ssh_key_path(&self) -> &Path {
        &self.ssh_key_path
    }

    pub fn ssh_port(&self) -> u16 {
        self.ssh_port
    }

    pub fn post_command(&self) -> Option<&str> {
        self.post_command.as_deref()
    }

    /// `user@host`
    pub fn login(&self) -> String {
        format!("{}@{}", self.username, self.host)
    }

    /// `user@host:path`, the rsync destination
    pub fn destination(&self) -> String {
        format!("{}:{}", self.login(), self.remote_path)
    }
}
