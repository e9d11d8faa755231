use serde_json::Value;

use super::Check;
use super::data::{DataFile, Object, join};
use crate::error::{ErrorKind, Result};

/// Textual house style: LF endings, two-space indentation, no tabs or
/// trailing whitespace, one final newline, `__compat` before subfeatures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleCheck;

impl Check for StyleCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Style
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let text = file.text()?;
        let mut problems = check_text(text);

        if let Value::Object(root) = file.document()? {
            check_compat_first(root, "", &mut problems);
        }
        Ok(problems)
    }
}

fn check_text(text: &str) -> Vec<String> {
    let mut problems = Vec::new();

    if text.contains('\r') {
        problems.push("file uses CRLF line endings".to_string());
    }

    for (index, line) in text.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');
        if line.contains('\t') {
            problems.push(format!("line {line_no}: tab character"));
        }
        if line.ends_with(' ') {
            problems.push(format!("line {line_no}: trailing whitespace"));
        }
        let indent = line.len() - line.trim_start_matches(' ').len();
        if indent % 2 != 0 {
            problems.push(format!(
                "line {line_no}: indentation of {indent} spaces is not a multiple of two"
            ));
        }
    }

    if !text.ends_with('\n') {
        problems.push("missing newline at end of file".to_string());
    } else if text.ends_with("\n\n") {
        problems.push("blank lines at end of file".to_string());
    }

    problems
}

fn check_compat_first(node: &Object, path: &str, problems: &mut Vec<String>) {
    if node.contains_key("__compat") && node.keys().next().map(String::as_str) != Some("__compat")
    {
        let at = if path.is_empty() { "document" } else { path };
        problems.push(format!("{at}: __compat must be the first property"));
    }
    for (key, child) in node {
        if key.starts_with("__") {
            continue;
        }
        if let Value::Object(child) = child {
            check_compat_first(child, &join(path, key), problems);
        }
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
