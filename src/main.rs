//! Rollback CLI - restore a backup archive onto a remote host
//!
//! Usage: rollback --backup-file <PATH> --config-file <PATH>
//!
//! Extracts the backup into a timestamped workspace, mirrors it to the
//! configured host with rsync over ssh, then runs the optional post command.
//! Exits 0 when every stage completed, 1 otherwise.

mod commands;
mod ui;

use clap::Parser;
use rollback::presentation::Cli;

fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    match commands::deploy::cmd_rollback(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            ui::error::print_error(&err, json);
            std::process::exit(1);
        }
    }
}
