//! Remote transports
//!
//! Both remote stages authenticate the same way (key, port,
//! trust-on-first-use host keys) but open separate sessions:
//! - `RsyncSynchronizer` - mirror transfer with `--delete`
//! - `SshRunner` - one post command over a fresh ssh connection

mod rsync;
mod ssh;

pub use rsync::RsyncSynchronizer;
pub use ssh::{SshRunner, SshTransport};
