//! Configuration module for Rollback
//!
//! The deployment target is described by a JSON file:
//!
//! ```json
//! {
//!   "host": "app.example.org",
//!   "username": "deploy",
//!   "path": "/srv/app",
//!   "ssh-key": "/home/ci/.ssh/deploy_ed25519",
//!   "ssh-port": 22,
//!   "post-command": "sudo systemctl restart app"
//! }
//! ```
//!
//! Precedence for the workspace root:
//! 1. CLI flag `--workspace-root` (highest priority)
//! 2. Environment variable `ROLLBACK_WORKSPACE_ROOT`
//! 3. OS temp directory (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{
    json_type_name, load_with_warnings, parse_with_warnings, workspace_root_from_env,
    WORKSPACE_ROOT_ENV,
};
pub use types::{RawDeploymentConfig, KNOWN_KEYS};
