//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod ssh_port;
mod stage;
mod violation;

pub use config_warning::ConfigWarning;
pub use ssh_port::{resolve_port, PortSource, DEFAULT_SSH_PORT};
pub use stage::{PipelineOutcome, PipelineState, Stage};
pub use violation::{ConfigField, Violation};
