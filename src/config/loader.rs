//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::error::{RollbackError, RollbackResult};

use super::types::{RawDeploymentConfig, KNOWN_KEYS};
use super::ConfigWarning;

/// Environment variable overriding the workspace base directory
pub const WORKSPACE_ROOT_ENV: &str = "ROLLBACK_WORKSPACE_ROOT";

/// Load the config file and collect non-fatal warnings (unknown keys).
///
/// Every failure (missing file, directory, unreadable, malformed JSON, not an
/// object) is returned as an error; nothing is only logged.
pub fn load_with_warnings(path: &Path) -> RollbackResult<(RawDeploymentConfig, Vec<ConfigWarning>)> {
    let metadata = fs::metadata(path).map_err(|source| match source.kind() {
        std::io::ErrorKind::NotFound => RollbackError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => RollbackError::ConfigRead {
            path: path.to_path_buf(),
            source,
        },
    })?;
    if !metadata.is_file() {
        return Err(RollbackError::ConfigNotAFile {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| RollbackError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config content; `path` is only used in errors and warnings.
pub fn parse_with_warnings(
    content: &str,
    path: &Path,
) -> RollbackResult<(RawDeploymentConfig, Vec<ConfigWarning>)> {
    let value: Value = serde_json::from_str(content).map_err(|e| RollbackError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    if !value.is_object() {
        return Err(RollbackError::ConfigNotAnObject {
            path: path.to_path_buf(),
            found: json_type_name(&value),
        });
    }

    let mut unknown_paths: Vec<String> = Vec::new();
    let config: RawDeploymentConfig = serde_ignored::deserialize(value, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| RollbackError::ConfigParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| ConfigWarning {
            line: find_line_number(content, &format!("\"{}\"", key)),
            suggestion: suggest_key(&key),
            file: path.to_path_buf(),
            key,
        })
        .collect();

    Ok((config, warnings))
}

/// Workspace root from `ROLLBACK_WORKSPACE_ROOT`, if set and non-empty
pub fn workspace_root_from_env() -> Option<PathBuf> {
    std::env::var_os(WORKSPACE_ROOT_ENV)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

/// JSON type name used in diagnostics
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    let unknown = unknown.to_lowercase();
    let mut best: Option<(&str, usize)> = None;
    for &candidate in KNOWN_KEYS {
        let dist = levenshtein(&unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
