//! Rollback Event Port
//!
//! Provides an observable interface for the rollback pipeline.
//! Enables progress reporting, JSON event streams, and debugging.

use std::path::PathBuf;

use super::tool_output::ToolOutput;
use crate::domain::value_objects::{PipelineState, Stage, Violation};

/// Effective inputs of a run, as read from the CLI and the config file
///
/// Values are rendered for display only; they have not been validated yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentSummary {
    pub host: String,
    pub path: String,
    pub username: String,
    pub ssh_key: String,
    pub ssh_port: String,
    pub backup_file: PathBuf,
    pub post_command: Option<String>,
}

/// Event emitted during a rollback
#[derive(Debug, Clone)]
pub enum RollbackEvent {
    /// Run started with these inputs
    Started { summary: DeploymentSummary },

    /// A deployment argument was rejected (one event per violation)
    ViolationFound { violation: Violation },

    /// Effective SSH port decided
    PortResolved { port: u16, defaulted: bool },

    /// Orchestrator moved to a new state
    StateChanged {
        from: PipelineState,
        to: PipelineState,
    },

    /// Workspace directory exists and is ready for extraction
    WorkspaceReady { path: PathBuf },

    /// A stage is about to invoke its external tool
    StageStarted { stage: Stage, detail: String },

    /// A stage finished successfully
    StageSucceeded { stage: Stage, output: ToolOutput },

    /// No post command configured; the run ends after the sync
    PostCommandSkipped,

    /// The run failed; no further stage will execute
    Failed { stage: Stage, message: String },

    /// The run reached COMPLETE
    Completed { workspace: PathBuf },
}

/// Trait for receiving rollback events
///
/// Implementations:
/// - ConsoleEventSink: human-readable progress in the terminal
/// - JsonEventSink: NDJSON event stream for CI
/// - NoopEventSink: silent operation
pub trait RollbackEventSink: Send + Sync {
    /// Handle a rollback event
    fn on_event(&self, event: RollbackEvent);

    /// Check if this sink wants state transitions and tool output
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl RollbackEventSink for NoopEventSink {
    fn on_event(&self, _event: RollbackEvent) {
        // Do nothing
    }

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
