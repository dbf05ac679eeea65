//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations; tests provide
//! fakes that simulate success or failure without spawning processes.

pub mod archive_extractor;
pub mod remote_runner;
pub mod remote_synchronizer;
pub mod rollback_events;
pub mod tool_output;
pub mod workspace_allocator;

pub use archive_extractor::ArchiveExtractor;
pub use remote_runner::RemoteRunner;
pub use remote_synchronizer::RemoteSynchronizer;
pub use rollback_events::{DeploymentSummary, NoopEventSink, RollbackEvent, RollbackEventSink};
pub use tool_output::{ToolError, ToolOutput};
pub use workspace_allocator::{WorkspaceAllocator, WorkspaceError};
