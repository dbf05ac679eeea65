//! Workspace Allocator Port
//!
//! Produces the scratch directory of a run and guarantees it exists.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::entities::Workspace;

/// The workspace directory could not be created
#[derive(Debug, Error)]
#[error("mkdir {path}: {source}")]
pub struct WorkspaceError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Capability that allocates a fresh, existing workspace directory
pub trait WorkspaceAllocator {
    fn allocate(&self) -> Result<Workspace, WorkspaceError>;
}
