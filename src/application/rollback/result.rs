//! Rollback Result
//!
//! The single terminal report of a pipeline run.

use crate::domain::entities::Workspace;
use crate::domain::value_objects::{PipelineOutcome, PipelineState};
use crate::error::StageError;

/// Result of a rollback run
#[derive(Debug, Clone)]
pub struct RollbackReport {
    /// Success, or the failing stage and its diagnostic
    pub outcome: PipelineOutcome,
    /// `Complete` or `Failed`
    pub final_state: PipelineState,
    /// Last non-failed state the run reached
    pub reached: PipelineState,
    /// The failure, when the run failed
    pub error: Option<StageError>,
    /// Workspace directory, once allocated (it is never removed)
    pub workspace: Option<Workspace>,
    /// Effective SSH port, once validation passed
    pub ssh_port: Option<u16>,
}

impl RollbackReport {
    pub(super) fn complete(workspace: Workspace, ssh_port: Option<u16>) -> Self {
        Self {
            outcome: PipelineOutcome::Success,
            final_state: PipelineState::Complete,
            reached: PipelineState::Complete,
            error: None,
            workspace: Some(workspace),
            ssh_port,
        }
    }

    pub(super) fn failed(
        reached: PipelineState,
        error: StageError,
        workspace: Option<Workspace>,
        ssh_port: Option<u16>,
    ) -> Self {
        Self {
            outcome: PipelineOutcome::Failure {
                stage: error.stage(),
                message: error.to_string(),
            },
            final_state: PipelineState::Failed,
            reached,
            error: Some(error),
            workspace,
            ssh_port,
        }
    }

    pub fn is_success(&self) -> bool {
        self.outcome.is_success()
    }
}
