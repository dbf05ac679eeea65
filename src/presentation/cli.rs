//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! Both `--backup-file` and `--config-file` are required; clap rejects an
//! invocation missing either before any stage runs.

use std::path::PathBuf;

use clap::Parser;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Rollback - restore a backup archive onto a remote host over rsync/ssh
#[derive(Parser, Debug)]
#[command(name = "rollback")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "The config file is a JSON object with host, path, username, ssh-key,\nand optional ssh-port (default 22) and post-command."
)]
pub struct Cli {
    /// Backup archive (.tar.gz) to restore
    #[arg(long, value_name = "PATH")]
    pub backup_file: PathBuf,

    /// JSON deployment config
    #[arg(long, value_name = "PATH")]
    pub config_file: PathBuf,

    /// Directory that receives the timestamped workspace
    /// [env: ROLLBACK_WORKSPACE_ROOT] [default: system temp dir]
    #[arg(long, value_name = "DIR")]
    pub workspace_root: Option<PathBuf>,

    /// Output NDJSON events for CI
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v shows tool output, -vv state transitions)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
