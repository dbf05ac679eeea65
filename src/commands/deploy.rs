use std::sync::Arc;

use anyhow::Result;

use rollback::config::load_with_warnings;
use rollback::domain::ports::RollbackEventSink;
use rollback::infrastructure::{ConsoleEventSink, JsonEventSink};
use rollback::presentation::{create_rollback_use_case, Cli};
use rollback::RollbackOptions;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// Run one rollback. `Ok(false)` means a stage failed and has already been
/// reported through the event sink.
pub fn cmd_rollback(cli: Cli) -> Result<bool> {
    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    let (raw, warnings) = load_with_warnings(&cli.config_file)?;
    crate::ui::output::print_config_warnings(&cli.config_file, &warnings, &ui);

    let sink: Arc<dyn RollbackEventSink> = if ui.json {
        Arc::new(JsonEventSink::stdout())
    } else {
        Arc::new(ConsoleEventSink::new(ui.color, ui.unicode, ui.verbose))
    };

    let use_case = create_rollback_use_case(cli.workspace_root);
    let report = use_case.execute_with_events(&raw, &RollbackOptions::new(cli.backup_file), sink);

    if let Some(error) = report.error.as_ref().filter(|_| annotate(&ui)) {
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &error.to_string(),
                None,
                None,
                Some("Rollback"),
            )
        );
    }

    Ok(report.is_success())
}

fn annotate(ui: &UiContext) -> bool {
    !ui.json && ui.caps.is_github_actions
}
