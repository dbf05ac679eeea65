use std::path::Path;

use rollback::config::ConfigWarning;
use rollback::infrastructure::events::warning_line;

use crate::ui::ci::{github_actions_annotation, AnnotationLevel};
use crate::ui::context::UiContext;

/// Report unknown config keys (the run continues)
pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], ui: &UiContext) {
    for w in warnings {
        if ui.json {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "command": "rollback",
                "key": w.key,
                "file": path.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
            continue;
        }

        if ui.caps.is_github_actions {
            println!(
                "{}",
                github_actions_annotation(
                    AnnotationLevel::Warning,
                    &format!("unknown config key '{}'", w.key),
                    Some(&path.to_string_lossy()),
                    w.line,
                    None,
                )
            );
        }

        eprintln!("{}", render_config_warning(path, w, ui.color, ui.unicode));
    }
}

fn render_config_warning(path: &Path, w: &ConfigWarning, color: bool, unicode: bool) -> String {
    let location = match w.line {
        Some(line) => format!("{}:{}", path.display(), line),
        None => path.display().to_string(),
    };
    let mut text = warning_line(
        &format!("Unknown config key '{}' in {}", w.key, location),
        color,
        unicode,
    );
    if let Some(suggestion) = &w.suggestion {
        text.push_str(&format!("\n   Did you mean '{}'?", suggestion));
    }
    text
}
