//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::PathBuf;

use crate::application::RollbackUseCase;
use crate::config::workspace_root_from_env;
use crate::infrastructure::{
    LocalWorkspaceAllocator, RsyncSynchronizer, SshRunner, SystemClock, TarExtractor,
};

/// Type alias for the concrete RollbackUseCase with all dependencies
pub type ConcreteRollbackUseCase = RollbackUseCase<
    LocalWorkspaceAllocator<SystemClock>,
    TarExtractor,
    RsyncSynchronizer,
    SshRunner,
>;

/// Where workspaces are created: the explicit root, then
/// `ROLLBACK_WORKSPACE_ROOT`, then the OS temp directory.
pub fn resolve_workspace_root(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(workspace_root_from_env)
        .unwrap_or_else(std::env::temp_dir)
}

/// Create a rollback use case with all dependencies wired up
pub fn create_rollback_use_case(workspace_root: Option<PathBuf>) -> ConcreteRollbackUseCase {
    RollbackUseCase::new(
        LocalWorkspaceAllocator::new(resolve_workspace_root(workspace_root)),
        TarExtractor::new(),
        RsyncSynchronizer::new(),
        SshRunner::new(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins() {
        let root = resolve_workspace_root(Some(PathBuf::from("/var/tmp/rollbacks")));
        assert_eq!(root, PathBuf::from("/var/tmp/rollbacks"));
    }

    #[test]
    fn create_rollback_use_case_uses_explicit_root() {
        // Construction only; nothing runs until execute
        let _use_case = create_rollback_use_case(Some(PathBuf::from("/var/tmp/rollbacks")));
    }
}
