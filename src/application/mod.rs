//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, value objects, ports)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `RollbackUseCase` - Drives the rollback state machine
//!   (validate, allocate workspace, extract, mirror, post command)
//!
//! ## Services
//!
//! - `validate` - Check every deployment argument and build the config

pub mod rollback;
pub mod validation;

pub use rollback::{RollbackOptions, RollbackReport, RollbackUseCase};
pub use validation::{validate, ValidatedInputs};
