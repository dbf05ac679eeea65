//! SSH transport options and remote command runner

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use crate::domain::entities::DeploymentConfig;
use crate::domain::ports::{RemoteRunner, ToolError, ToolOutput};
use crate::infrastructure::process::{run_captured, shell_quote};

/// Host keys are accepted on first use and never recorded
const TRUST_ON_FIRST_USE: [&str; 4] = [
    "-o",
    "StrictHostKeyChecking=no",
    "-o",
    "UserKnownHostsFile=/dev/null",
];

/// Authentication options shared by every ssh session of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshTransport {
    port: u16,
    key: PathBuf,
}

impl SshTransport {
    pub fn for_config(config: &DeploymentConfig) -> Self {
        Self {
            port: config.ssh_port(),
            key: config.ssh_key_path().to_path_buf(),
        }
    }

    /// `ssh` arguments preceding the destination
    pub fn args(&self) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            "-p".into(),
            self.port.to_string().into(),
            "-i".into(),
            self.key.clone().into_os_string(),
        ];
        args.extend(TRUST_ON_FIRST_USE.iter().map(OsString::from));
        args
    }

    /// Remote shell for `rsync -e`
    pub fn remote_shell(&self) -> String {
        format!(
            "ssh -p {} -i {} {}",
            self.port,
            shell_quote(&self.key.to_string_lossy()),
            TRUST_ON_FIRST_USE.join(" ")
        )
    }
}

/// Runs the post command with `ssh <options> user@host <command>`
pub struct SshRunner {
    program: String,
}

impl SshRunner {
    pub fn new() -> Self {
        Self {
            program: "ssh".to_string(),
        }
    }

    fn command(&self, config: &DeploymentConfig, command: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(SshTransport::for_config(config).args())
            .arg(config.login())
            .arg(command);
        cmd
    }
}

impl Default for SshRunner {
    fn default() -> Self {
        Self::new()
    }
}

impl RemoteRunner for SshRunner {
    fn run(&self, config: &DeploymentConfig, command: &str) -> Result<ToolOutput, ToolError> {
        run_captured(&mut self.command(config, command))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn config() -> DeploymentConfig {
        DeploymentConfig::new("app.example.org", "/srv/app", "deploy", "/keys/id_ed25519")
            .with_ssh_port(2222)
    }

    #[test]
    fn remote_shell_disables_host_key_checking() {
        let shell = SshTransport::for_config(&config()).remote_shell();
        assert_eq!(
            shell,
            "ssh -p 2222 -i /keys/id_ed25519 -o StrictHostKeyChecking=no -o UserKnownHostsFile=/dev/null"
        );
    }

    #[test]
    fn remote_shell_quotes_key_with_spaces() {
        let config = DeploymentConfig::new("h", "/p", "u", "/Users/ci/My Keys/id");
        let shell = SshTransport::for_config(&config).remote_shell();
        assert!(shell.contains("-i '/Users/ci/My Keys/id'"), "{shell}");
        assert!(shell.starts_with("ssh -p 22 "), "{shell}");
    }

    #[test]
    fn runner_passes_command_verbatim_as_last_argument() {
        let cmd = SshRunner::new().command(&config(), "cd /srv/app && ./restart.sh 'now'");
        let args: Vec<&OsStr> = cmd.get_args().collect();

        assert_eq!(cmd.get_program(), "ssh");
        assert_eq!(
            args,
            vec![
                OsStr::new("-p"),
                OsStr::new("2222"),
                OsStr::new("-i"),
                OsStr::new("/keys/id_ed25519"),
                OsStr::new("-o"),
                OsStr::new("StrictHostKeyChecking=no"),
                OsStr::new("-o"),
                OsStr::new("UserKnownHostsFile=/dev/null"),
                OsStr::new("deploy@app.example.org"),
                OsStr::new("cd /srv/app && ./restart.sh 'now'"),
            ]
        );
    }
}
