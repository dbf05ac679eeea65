//! Console Event Sink
//!
//! Human-readable progress: summary and progress on stdout, violations and
//! failures on stderr. Captured tool output is shown for failures, and for
//! successful stages when verbose.

use std::io::{self, Write};
use std::sync::Mutex;

use crossterm::style::Stylize;

use crate::domain::ports::{DeploymentSummary, RollbackEvent, RollbackEventSink, ToolOutput};
use crate::domain::value_objects::Stage;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Success,
    Error,
    Warning,
    Info,
    Dim,
}

/// Event sink that renders progress for a terminal
pub struct ConsoleEventSink {
    out: Mutex<Box<dyn Write + Send>>,
    err: Mutex<Box<dyn Write + Send>>,
    color: bool,
    unicode: bool,
    verbose: u8,
}

impl ConsoleEventSink {
    /// Sink writing to the process stdout/stderr
    pub fn new(color: bool, unicode: bool, verbose: u8) -> Self {
        Self::with_writers(io::stdout(), io::stderr(), color, unicode, verbose)
    }

    /// Sink writing to custom writers (for testing)
    pub fn with_writers<O, E>(out: O, err: E, color: bool, unicode: bool, verbose: u8) -> Self
    where
        O: Write + Send + 'static,
        E: Write + Send + 'static,
    {
        Self {
            out: Mutex::new(Box::new(out)),
            err: Mutex::new(Box::new(err)),
            color,
            unicode,
            verbose,
        }
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        paint(text, tone, self.color)
    }

    fn icon(&self, tone: Tone) -> String {
        icon(tone, self.color, self.unicode)
    }

    fn stdout(&self, text: &str) {
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", text);
            let _ = out.flush();
        }
    }

    fn stderr(&self, text: &str) {
        if let Ok(mut err) = self.err.lock() {
            let _ = writeln!(err, "{}", text);
            let _ = err.flush();
        }
    }

    fn summary(&self, summary: &DeploymentSummary) -> String {
        let post_command = summary
            .post_command
            .as_deref()
            .unwrap_or("NO COMMAND DEFINED");
        let backup_file = summary.backup_file.display().to_string();
        let rows = [
            ("host", summary.host.as_str()),
            ("path", summary.path.as_str()),
            ("username", summary.username.as_str()),
            ("ssh key", summary.ssh_key.as_str()),
            ("ssh port", summary.ssh_port.as_str()),
            ("backup file", backup_file.as_str()),
            ("post command", post_command),
        ]
        .iter()
        .map(|(label, value)| format!("  {:<14}{}", format!("{}:", label), value))
        .collect::<Vec<_>>();

        format!("Deploy given the arguments\n{}", rows.join("\n"))
    }

    fn captured(&self, output: &ToolOutput) -> Option<String> {
        let text = output.combined();
        if text.is_empty() {
            return None;
        }
        let lines: Vec<String> = text
            .lines()
            .map(|line| format!("    {}", self.paint(line, Tone::Dim)))
            .collect();
        Some(lines.join("\n"))
    }
}

fn paint(text: &str, tone: Tone, color: bool) -> String {
    if !color {
        return text.to_string();
    }
    match tone {
        Tone::Success => text.green().to_string(),
        Tone::Error => text.red().to_string(),
        Tone::Warning => text.yellow().to_string(),
        Tone::Info => text.cyan().to_string(),
        Tone::Dim => text.dark_grey().to_string(),
    }
}

fn icon(tone: Tone, color: bool, unicode: bool) -> String {
    let glyph = match (tone, unicode) {
        (Tone::Success, true) => "✓",
        (Tone::Success, false) => "[OK]",
        (Tone::Error, true) => "✗",
        (Tone::Error, false) => "[FAIL]",
        (Tone::Warning, true) => "⚠",
        (Tone::Warning, false) => "[WARN]",
        (Tone::Info, true) => "●",
        (Tone::Info, false) => "[..]",
        (Tone::Dim, true) => "↳",
        (Tone::Dim, false) => "->",
    };
    paint(glyph, tone, color)
}

fn succeeded_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Validation => "Arguments validated",
        Stage::Workspace => "Workspace ready",
        Stage::Extraction => "Backup extracted",
        Stage::Sync => "Rsync executed successfully",
        Stage::PostCommand => "Post command executed successfully",
    }
}

impl RollbackEventSink for ConsoleEventSink {
    fn on_event(&self, event: RollbackEvent) {
        match event {
            RollbackEvent::Started { summary } => self.stdout(&self.summary(&summary)),

            RollbackEvent::ViolationFound { violation } => {
                self.stderr(&format!("{} {}", self.icon(Tone::Error), violation));
            }

            RollbackEvent::PortResolved { port, defaulted } => {
                if defaulted {
                    self.stdout(&format!("Using default port {}", port));
                } else {
                    self.stdout(&format!("Using port {}", port));
                }
            }

            RollbackEvent::StateChanged { from, to } => {
                if self.verbose >= 2 {
                    self.stdout(&self.paint(&format!("{} -> {}", from, to), Tone::Dim));
                }
            }

            RollbackEvent::WorkspaceReady { path } => {
                self.stdout(&format!(
                    "{} workspace {}",
                    self.icon(Tone::Dim),
                    path.display()
                ));
            }

            RollbackEvent::StageStarted { stage, detail } => {
                self.stdout(&format!(
                    "{} {}: {}",
                    self.icon(Tone::Info),
                    stage,
                    detail
                ));
            }

            RollbackEvent::StageSucceeded { stage, output } => {
                self.stdout(&format!(
                    "{} {}",
                    self.icon(Tone::Success),
                    succeeded_label(stage)
                ));
                if self.verbose >= 1 {
                    if let Some(captured) = self.captured(&output) {
                        self.stdout(&captured);
                    }
                }
            }

            RollbackEvent::PostCommandSkipped => {
                self.stdout(&format!(
                    "{} no post command defined, ending deploy",
                    self.icon(Tone::Dim)
                ));
            }

            RollbackEvent::Failed { message, .. } => {
                self.stderr(&format!(
                    "{} {}",
                    self.icon(Tone::Error),
                    self.paint(&message, Tone::Error)
                ));
            }

            RollbackEvent::Completed { .. } => {
                self.stdout(&format!(
                    "{} {}",
                    self.icon(Tone::Success),
                    self.paint("DONE", Tone::Success)
                ));
            }
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbose >= 2
    }
}

/// Render an unknown-key warning the way the console sink styles lines
pub fn warning_line(text: &str, color: bool, unicode: bool) -> String {
    format!(
        "{} {}",
        icon(Tone::Warning, color, unicode),
        paint(text, Tone::Warning, color)
    )
}
