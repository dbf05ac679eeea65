//! Rollback Module
//!
//! Orchestrates one rollback deployment.
//!
//! ## Structure
//!
//! - `options` - Invocation inputs (`RollbackOptions`)
//! - `result` - Terminal report (`RollbackReport`)
//! - `use_case` - State machine driver (`RollbackUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use rollback::application::rollback::{RollbackOptions, RollbackUseCase};
//!
//! let use_case = RollbackUseCase::new(workspaces, extractor, synchronizer, runner);
//! let report = use_case.execute(&raw_config, &RollbackOptions::new(backup_file));
//! ```

mod options;
mod result;
mod use_case;

pub use options::RollbackOptions;
pub use result::RollbackReport;
pub use use_case::RollbackUseCase;
