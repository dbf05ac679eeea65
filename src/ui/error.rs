use std::path::Path;

use crossterm::style::Stylize;
use rollback::RollbackError;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};

pub fn format_error(err: &anyhow::Error) -> String {
    let caps = crate::ui::terminal::detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

fn format_error_with(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let icon = if supports_unicode { "✗" } else { "[ERROR]" };
    let header = if supports_color {
        format!("{} {}", icon.red(), err.to_string().red())
    } else {
        format!("{} {}", icon, err)
    };

    match err.downcast_ref::<RollbackError>().and_then(fix_hint) {
        Some(hint) => format!("{}\n  {}\n", header, hint),
        None => format!("{}\n", header),
    }
}

fn fix_hint(err: &RollbackError) -> Option<&'static str> {
    match err {
        RollbackError::ConfigNotFound { .. } | RollbackError::ConfigNotAFile { .. } => {
            Some("Pass --config-file with the path of a JSON deployment config.")
        }
        RollbackError::ConfigParse { .. } | RollbackError::ConfigNotAnObject { .. } => Some(
            "Expected an object like {\"host\": \"...\", \"path\": \"...\", \"username\": \"...\", \"ssh-key\": \"...\"}.",
        ),
        RollbackError::ConfigRead { .. } => None,
    }
}

fn error_file(err: &RollbackError) -> &Path {
    match err {
        RollbackError::ConfigNotFound { path }
        | RollbackError::ConfigNotAFile { path }
        | RollbackError::ConfigRead { path, .. }
        | RollbackError::ConfigParse { path, .. }
        | RollbackError::ConfigNotAnObject { path, .. } => path,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let output = serde_json::json!({
            "event": "error",
            "command": "rollback",
            "message": err.to_string(),
        });
        let _ = crate::ui::json::emit(output);
        return;
    }

    let caps = crate::ui::terminal::detect_capabilities();
    if caps.is_github_actions {
        let file = err
            .downcast_ref::<RollbackError>()
            .map(|e| error_file(e).to_string_lossy().to_string());
        println!(
            "{}",
            github_actions_annotation(
                AnnotationLevel::Error,
                &err.to_string(),
                file.as_deref(),
                None,
                Some("Rollback"),
            )
        );
    }

    eprint!("{}", format_error(err));
}
