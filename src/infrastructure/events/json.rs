//! JSON Event Sink
//!
//! Outputs rollback events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use serde_json::json;

use crate::domain::ports::{RollbackEvent, RollbackEventSink, ToolOutput};

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    /// Mutex to ensure thread-safe writes
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

fn output_json(output: &ToolOutput) -> serde_json::Value {
    json!({
        "code": output.code,
        "stdout": output.stdout,
        "stderr": output.stderr,
    })
}

impl RollbackEventSink for JsonEventSink {
    fn on_event(&self, event: RollbackEvent) {
        let json = match event {
            RollbackEvent::Started { summary } => json!({
                "event": "start",
                "command": "rollback",
                "host": summary.host,
                "path": summary.path,
                "username": summary.username,
                "ssh_key": summary.ssh_key,
                "ssh_port": summary.ssh_port,
                "backup_file": summary.backup_file.display().to_string(),
                "post_command": summary.post_command,
            }),

            RollbackEvent::ViolationFound { violation } => json!({
                "event": "violation",
                "command": "rollback",
                "field": violation.field().key(),
                "message": violation.to_string(),
            }),

            RollbackEvent::PortResolved { port, defaulted } => json!({
                "event": "port_resolved",
                "command": "rollback",
                "port": port,
                "defaulted": defaulted,
            }),

            RollbackEvent::StateChanged { from, to } => json!({
                "event": "state",
                "command": "rollback",
                "from": from,
                "to": to,
            }),

            RollbackEvent::WorkspaceReady { path } => json!({
                "event": "workspace",
                "command": "rollback",
                "path": path.display().to_string(),
            }),

            RollbackEvent::StageStarted { stage, detail } => json!({
                "event": "stage_start",
                "command": "rollback",
                "stage": stage,
                "detail": detail,
            }),

            RollbackEvent::StageSucceeded { stage, output } => json!({
                "event": "stage_done",
                "command": "rollback",
                "stage": stage,
                "output": output_json(&output),
            }),

            RollbackEvent::PostCommandSkipped => json!({
                "event": "post_command_skipped",
                "command": "rollback",
            }),

            RollbackEvent::Failed { stage, message } => json!({
                "event": "complete",
                "command": "rollback",
                "status": "failure",
                "stage": stage,
                "message": message,
            }),

            RollbackEvent::Completed { workspace } => json!({
                "event": "complete",
                "command": "rollback",
                "status": "success",
                "workspace": workspace.display().to_string(),
            }),
        };

        self.write_event(json);
    }

    fn wants_detailed_events(&self) -> bool {
        true // JSON mode wants all events
    }
}
