//! Tool Output
//!
//! Captured result of an external process (tar, rsync, ssh). Every
//! transport port reports through these two types.

/// Exit status and captured streams of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Exit code (`None` when terminated by a signal)
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    pub fn new(code: Option<i32>, stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// stdout followed by stderr, trimmed, for diagnostics
    pub fn combined(&self) -> String {
        let stdout = self.stdout.trim_end();
        let stderr = self.stderr.trim_end();
        match (stdout.is_empty(), stderr.is_empty()) {
            (true, true) => String::new(),
            (false, true) => stdout.to_string(),
            (true, false) => stderr.to_string(),
            (false, false) => format!("{}\n{}", stdout, stderr),
        }
    }
}

impl From<std::process::Output> for ToolOutput {
    fn from(output: std::process::Output) -> Self {
        Self {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }
}

/// Failure of an external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolError {
    /// The process could not be started (not installed, not executable)
    Spawn { program: String, message: String },
    /// The process ran and reported a non-zero completion status
    Failed { program: String, output: ToolOutput },
}

impl ToolError {
    /// Captured diagnostic text for the operator
    pub fn diagnostic(&self) -> String {
        match self {
            ToolError::Spawn { program, message } => {
                format!("failed to run {}: {}", program, message)
            }
            ToolError::Failed { program, output } => {
                let status = match output.code {
                    Some(code) => format!("{} exited with code {}", program, code),
                    None => format!("{} was terminated by a signal", program),
                };
                let captured = output.combined();
                if captured.is_empty() {
                    status
                } else {
                    format!("{}\n{}", captured, status)
                }
            }
        }
    }
}

impl std::fmt::Display for ToolError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.diagnostic())
    }
}

impl std::error::Error for ToolError {}
