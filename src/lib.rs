//! Rollback - restore a backup archive onto a remote host
//!
//! A rollback extracts a local `.tar.gz` backup into a timestamped
//! workspace, mirrors it onto `user@host:path` with rsync over ssh, and
//! optionally runs one command on the remote host afterwards. Each stage
//! runs only if the previous one succeeded.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{RollbackOptions, RollbackReport, RollbackUseCase};
pub use config::{ConfigWarning, RawDeploymentConfig};
pub use domain::entities::{BackupReference, DeploymentConfig, Workspace};
pub use domain::value_objects::{PipelineOutcome, PipelineState, Stage, Violation};
pub use error::{RollbackError, RollbackResult, StageError};
