//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//!
//! ## Usage
//!
//! ```ignore
//! use rollback::presentation::factory;
//!
//! // Create the rollback use case with all dependencies wired up
//! let use_case = factory::create_rollback_use_case(None);
//! let report = use_case.execute(&raw, &options);
//! ```

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::create_rollback_use_case;
