//! Domain Entities
//!
//! - `DeploymentConfig` - validated remote target of a run
//! - `BackupReference` - the archive being redeployed
//! - `Workspace` - scratch directory holding the extracted archive

mod backup;
mod deployment_config;
mod workspace;

pub use backup::BackupReference;
pub use deployment_config::DeploymentConfig;
pub use workspace::{Workspace, WORKSPACE_NAME_FORMAT};
