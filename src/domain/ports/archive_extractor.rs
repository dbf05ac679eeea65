//! Archive Extractor Port
//!
//! Unpacks a backup archive into a workspace, preserving its internal
//! directory structure.

use super::tool_output::{ToolError, ToolOutput};
use crate::domain::entities::{BackupReference, Workspace};

/// Capability that decompresses a backup into a directory
pub trait ArchiveExtractor {
    /// Name of the underlying tool (for diagnostics)
    fn name(&self) -> &'static str;

    /// Extract the full archive into `workspace`.
    ///
    /// A failed extraction may leave partial files behind; callers never
    /// reuse the workspace.
    fn extract(
        &self,
        backup: &BackupReference,
        workspace: &Workspace,
    ) -> Result<ToolOutput, ToolError>;
}
