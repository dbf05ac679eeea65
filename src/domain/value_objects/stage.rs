//! Stage and pipeline state value objects
//!
//! - `Stage`: the unit of work that can fail (one per error class)
//! - `PipelineState`: the orchestrator's position in the state machine
//! - `PipelineOutcome`: the single terminal report of one run

use serde::Serialize;

/// A pipeline stage that can produce a terminal failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Stage {
    /// Config validation (aggregated field violations)
    Validation,
    /// Scratch directory allocation
    Workspace,
    /// Archive extraction into the workspace
    Extraction,
    /// Mirror transfer to the remote host
    Sync,
    /// Optional remote command after a successful sync
    PostCommand,
}

impl Stage {
    /// Short label used in diagnostics and JSON events
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Validation => "validation",
            Stage::Workspace => "workspace",
            Stage::Extraction => "extraction",
            Stage::Sync => "sync",
            Stage::PostCommand => "post-command",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrator state
///
/// `Init → Validated → Extracted → Synced → Complete`, with `Failed`
/// reachable from every non-terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PipelineState {
    Init,
    Validated,
    Extracted,
    Synced,
    Complete,
    Failed,
}

impl PipelineState {
    pub fn as_str(&self) -> &'static str {
        match self {
            PipelineState::Init => "INIT",
            PipelineState::Validated => "VALIDATED",
            PipelineState::Extracted => "EXTRACTED",
            PipelineState::Synced => "SYNCED",
            PipelineState::Complete => "COMPLETE",
            PipelineState::Failed => "FAILED",
        }
    }
}

impl std::fmt::Display for PipelineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal result of a pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineOutcome {
    Success,
    Failure { stage: Stage, message: String },
}

impl PipelineOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PipelineOutcome::Success)
    }

    /// The failing stage, if any
    pub fn failed_stage(&self) -> Option<Stage> {
        match self {
            PipelineOutcome::Success => None,
            PipelineOutcome::Failure { stage, .. } => Some(*stage),
        }
    }
}
