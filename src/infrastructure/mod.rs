//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `archive/` - Backup extraction (tar)
//! - `remote/` - Mirror transfer (rsync) and remote commands (ssh)
//! - `events/` - Event sinks (console, NDJSON)
//! - `workspace` - Timestamped scratch directories
//! - `process` - Captured child process execution

pub mod archive;
pub mod events;
pub mod process;
pub mod remote;
pub mod workspace;

// Re-export for convenience
pub use archive::TarExtractor;
pub use events::{ConsoleEventSink, JsonEventSink};
pub use remote::{RsyncSynchronizer, SshRunner};
pub use workspace::{LocalWorkspaceAllocator, SystemClock};
