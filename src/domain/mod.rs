//! Domain Layer
//!
//! The core of Rollback - pipeline types and the interfaces of its
//! external collaborators.
//!
//! ## Structure
//!
//! - `entities/` - DeploymentConfig, BackupReference, Workspace
//! - `value_objects/` - Stage, PipelineState, PipelineOutcome, Violation
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Immutable inputs** - Stages receive the validated config by reference
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod value_objects;
