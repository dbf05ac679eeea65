//! Event sink adapters
//!
//! Concrete implementations of `RollbackEventSink`.

mod console;
mod json;

pub use console::{warning_line, ConsoleEventSink};
pub use json::JsonEventSink;
