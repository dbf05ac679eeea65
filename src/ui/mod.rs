//! Terminal presentation for the binary: capability detection, error
//! rendering, config warnings, CI annotations.

pub mod ci;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod terminal;
