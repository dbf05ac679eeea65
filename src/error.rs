//! Error types for Rollback
//!
//! Uses `thiserror` for library errors. `RollbackError` covers everything that
//! can go wrong before the pipeline starts (argument and config handling);
//! `StageError` is the single terminal failure of a pipeline stage.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::value_objects::{Stage, Violation};

/// Result type alias for Rollback operations
pub type RollbackResult<T> = Result<T, RollbackError>;

/// Argument and configuration errors
#[derive(Error, Debug)]
pub enum RollbackError {
    /// Config file path does not exist
    #[error("config file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Config file path exists but is not a regular file
    #[error("{path} is not a valid file")]
    ConfigNotAFile { path: PathBuf },

    /// Config file could not be read
    #[error("error reading config file {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON
    #[error("invalid JSON in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Config file is valid JSON but not an object
    #[error("{path} must contain a JSON object, found {found}")]
    ConfigNotAnObject { path: PathBuf, found: &'static str },
}

/// Terminal failure of one pipeline stage
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StageError {
    /// One or more deployment arguments were rejected
    #[error("error in arguments: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    /// Scratch directory could not be created
    #[error("could not create workspace {path}: {message}")]
    Workspace { path: PathBuf, message: String },

    /// Archive extraction failed
    #[error("error extracting {archive}:\n{output}")]
    Extraction { archive: PathBuf, output: String },

    /// Remote mirror transfer failed
    #[error("error running rsync to {destination}:\n{output}")]
    Sync { destination: String, output: String },

    /// Post command exited non-zero (the sync had already completed)
    #[error("sync completed but post command '{command}' failed:\n{output}")]
    PostCommand { command: String, output: String },
}

impl StageError {
    /// The stage that produced this failure
    pub fn stage(&self) -> Stage {
        match self {
            Self::Validation(_) => Stage::Validation,
            Self::Workspace { .. } => Stage::Workspace,
            Self::Extraction { .. } => Stage::Extraction,
            Self::Sync { .. } => Stage::Sync,
            Self::PostCommand { .. } => Stage::PostCommand,
        }
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
