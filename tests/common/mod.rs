//! Common test utilities for Rollback CLI tests.
//!
//! Provides `TestEnv`: an isolated temp directory holding the config file,
//! the backup archive, the workspace root and (on unix) fake `tar`, `rsync`
//! and `ssh` executables that record their arguments instead of touching a
//! network.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Result of running the rollback binary
#[derive(Debug)]
pub struct TestResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| serde_json::from_str(l).expect("stdout line is not JSON"))
            .collect()
    }
}

/// Isolated environment for one CLI invocation
pub struct TestEnv {
    pub dir: TempDir,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("workspaces")).unwrap();
        Self {
            dir,
            env: Vec::new(),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }

    /// Directory passed as `--workspace-root`
    pub fn workspace_root(&self) -> PathBuf {
        self.path("workspaces")
    }

    /// Workspaces created so far
    pub fn workspaces(&self) -> Vec<PathBuf> {
        let mut dirs: Vec<PathBuf> = fs::read_dir(self.workspace_root())
            .unwrap()
            .flatten()
            .map(|e| e.path())
            .collect();
        dirs.sort();
        dirs
    }

    pub fn write_config(&self, json: &str) -> PathBuf {
        let path = self.path("deploy.json");
        fs::write(&path, json).unwrap();
        path
    }

    /// A file standing in for the backup archive (fake tar never reads it)
    pub fn write_backup(&self) -> PathBuf {
        let path = self.path("app-backup.tar.gz");
        fs::write(&path, b"not really gzip").unwrap();
        path
    }

    pub fn set_env(&mut self, key: &str, value: &str) {
        self.env.push((key.to_string(), value.to_string()));
    }

    /// Run with `--workspace-root` pointing into this environment
    pub fn run(&self, args: &[&str]) -> TestResult {
        let root = self.workspace_root();
        let mut full: Vec<&str> = args.to_vec();
        full.push("--workspace-root");
        full.push(root.to_str().unwrap());
        self.run_raw(&full)
    }

    /// Run with exactly `args`
    pub fn run_raw(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_rollback"));
        cmd.current_dir(self.dir.path())
            .args(args)
            .env("NO_COLOR", "1")
            .env_remove("ROLLBACK_WORKSPACE_ROOT")
            .env_remove("GITHUB_ACTIONS");
        for (key, value) in &self.env {
            cmd.env(key, value);
        }

        let output = cmd.output().unwrap();
        TestResult {
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Config with every required key, pointing at an unreachable host
pub fn valid_config(extra: &str) -> String {
    format!(
        r#"{{
  "host": "app.example.invalid",
  "path": "/srv/app",
  "username": "deploy",
  "ssh-key": "/keys/id_ed25519"{extra}
}}"#
    )
}

#[cfg(unix)]
pub mod fake_tools {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Install fake `tar`, `rsync` and `ssh` that append `<name> <args>` to
    /// `tools.log` and exit with `FAKE_<NAME>_EXIT` (default 0).
    pub fn install(env: &mut TestEnv) -> PathBuf {
        let bin = env.path("fake-bin");
        fs::create_dir_all(&bin).unwrap();
        let log = env.path("tools.log");

        for (name, var) in [
            ("tar", "FAKE_TAR_EXIT"),
            ("rsync", "FAKE_RSYNC_EXIT"),
            ("ssh", "FAKE_SSH_EXIT"),
        ] {
            let script = format!(
                "#!/bin/sh\nprintf '%s\\n' \"{name} $*\" >> \"$FAKE_TOOL_LOG\"\necho \"{name} output\"\nexit ${{{var}:-0}}\n"
            );
            let path = bin.join(name);
            fs::write(&path, script).unwrap();
            fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        }

        let path = std::env::var("PATH").unwrap_or_default();
        env.set_env("PATH", &format!("{}:{}", bin.display(), path));
        env.set_env("FAKE_TOOL_LOG", log.to_str().unwrap());
        log
    }

    /// Recorded invocations, one per line
    pub fn calls(log: &Path) -> Vec<String> {
        fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }
}
