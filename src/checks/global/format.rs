use super::{GlobalCheck, Repository};
use crate::error::{ErrorKind, Result};

/// Every data file must equal its canonical serialization.
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatCheck;

/// Two-space pretty JSON with a trailing newline, key order preserved.
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn canonical(value: &serde_json::Value) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    Ok(text)
}

impl GlobalCheck for FormatCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Format
    }

    fn check(&self, repository: &Repository) -> Result<Vec<String>> {
        let mut problems = Vec::new();

        for file in repository.all_files() {
            let (Ok(text), Ok(doc)) = (file.text(), file.document()) else {
                continue;
            };
            if text != canonical(doc)? {
                problems.push(format!("{} is not canonically formatted", file.label()));
            }
        }

        Ok(problems)
    }
}
