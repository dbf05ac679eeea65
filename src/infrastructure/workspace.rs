//! Local workspace allocation
//!
//! Creates `<root>/<YYYY-MM-DD-HH-mm>` for a run. The directory is never
//! removed; a same-minute run reuses it.

use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::Workspace;
use crate::domain::ports::{WorkspaceAllocator, WorkspaceError};

/// Source of the current time
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

impl<F> Clock for F
where
    F: Fn() -> DateTime<Local>,
{
    fn now(&self) -> DateTime<Local> {
        self()
    }
}

/// Allocates workspaces under a base directory on the local disk
pub struct LocalWorkspaceAllocator<C: Clock = SystemClock> {
    root: PathBuf,
    clock: C,
}

impl LocalWorkspaceAllocator {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self::with_clock(root, SystemClock)
    }
}

impl<C: Clock> LocalWorkspaceAllocator<C> {
    pub fn with_clock(root: impl Into<PathBuf>, clock: C) -> Self {
        Self {
            root: root.into(),
            clock,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl<C: Clock> WorkspaceAllocator for LocalWorkspaceAllocator<C> {
    fn allocate(&self) -> Result<Workspace, WorkspaceError> {
        let workspace = Workspace::under(&self.root, self.clock.now());
        fs::create_dir_all(workspace.directory()).map_err(|source| WorkspaceError {
            path: workspace.directory().to_path_buf(),
            source,
        })?;
        Ok(workspace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn fixed() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 11, 2, 8, 15, 42).unwrap()
    }

    #[test]
    fn allocate_creates_timestamped_directory() {
        let dir = tempdir().unwrap();
        let allocator = LocalWorkspaceAllocator::with_clock(dir.path().join("nested"), fixed);

        let workspace = allocator.allocate().unwrap();

        assert_eq!(workspace.directory(), dir.path().join("nested/2024-11-02-08-15"));
        assert!(workspace.directory().is_dir());
        assert_eq!(workspace.created_at(), fixed());
    }

    #[test]
    fn same_minute_reuses_directory() {
        let dir = tempdir().unwrap();
        let allocator = LocalWorkspaceAllocator::with_clock(dir.path(), fixed);

        let first = allocator.allocate().unwrap();
        std::fs::write(first.directory().join("left-over"), b"x").unwrap();
        let second = allocator.allocate().unwrap();

        assert_eq!(first.directory(), second.directory());
    }

    #[test]
    fn root_that_is_a_file_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("not-a-dir");
        std::fs::write(&file, b"x").unwrap();
        let allocator = LocalWorkspaceAllocator::with_clock(&file, fixed);

        let err = allocator.allocate().unwrap_err();

        assert_eq!(err.path, file.join("2024-11-02-08-15"));
    }

    #[test]
    fn system_clock_allocator_uses_given_root() {
        let dir = tempdir().unwrap();
        let allocator = LocalWorkspaceAllocator::new(dir.path());
        assert_eq!(allocator.root(), dir.path());
        assert!(allocator.allocate().unwrap().directory().starts_with(dir.path()));
    }
}
