//! External process execution
//!
//! Runs a tool to completion and captures its output. There is no timeout:
//! a hung process blocks the caller until it exits.

use std::process::Command;

use crate::domain::ports::{ToolError, ToolOutput};

/// Run `command` and capture stdout/stderr.
///
/// Returns `Ok` only for a zero exit status.
pub fn run_captured(command: &mut Command) -> Result<ToolOutput, ToolError> {
    let program = command.get_program().to_string_lossy().into_owned();

    let output = command.output().map_err(|e| ToolError::Spawn {
        program: program.clone(),
        message: e.to_string(),
    })?;

    let success = output.status.success();
    let output = ToolOutput::from(output);
    if success {
        Ok(output)
    } else {
        Err(ToolError::Failed { program, output })
    }
}

/// Quote for a POSIX shell, only when needed
pub fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./=:@%+,".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', "'\\''"))
    }
}
