#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationLevel {
    Warning,
    Error,
}

/// GitHub Actions workflow command (`::error file=..,line=..::message`)
pub fn github_actions_annotation(
    level: AnnotationLevel,
    message: &str,
    file: Option<&str>,
    line: Option<usize>,
    title: Option<&str>,
) -> String {
    let level_str = match level {
        AnnotationLevel::Warning => "warning",
        AnnotationLevel::Error => "error",
    };

    let mut props = Vec::new();
    if let Some(file) = file {
        props.push(format!("file={}", escape_property(file)));
    }
    if let Some(line) = line {
        props.push(format!("line={}", line));
    }
    if let Some(title) = title {
        props.push(format!("title={}", escape_property(title)));
    }

    let prop_str = if props.is_empty() {
        String::new()
    } else {
        format!(" {}", props.join(","))
    };

    format!("::{}{}::{}", level_str, prop_str, escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

// Properties additionally reserve ':' and ','
fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_escapes_newlines_in_tool_output() {
        let rendered = github_actions_annotation(
            AnnotationLevel::Error,
            "error running rsync to deploy@h:/srv/app:\nrsync exited with code 23",
            None,
            None,
            Some("Rollback"),
        );
        assert_eq!(
            rendered,
            "::error title=Rollback::error running rsync to deploy@h:/srv/app:%0Arsync exited with code 23"
        );
    }

    #[test]
    fn annotation_with_file_and_line() {
        let rendered = github_actions_annotation(
            AnnotationLevel::Warning,
            "unknown config key 'ssh_key'",
            Some("deploy,prod.json"),
            Some(3),
            None,
        );
        assert_eq!(
            rendered,
            "::warning file=deploy%2Cprod.json,line=3::unknown config key 'ssh_key'"
        );
    }
}
