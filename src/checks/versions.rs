use serde_json::Value;

use super::Check;
use super::data::{DataFile, VersionValue, for_each_feature, parse_version, support_entries};
use crate::error::{ErrorKind, Result};

/// Version values are well-formed and `version_removed` follows
/// `version_added`.
#[derive(Debug, Clone, Copy, Default)]
pub struct VersionCheck;

/// A statement's `version_added`/`version_removed` value, classified.
enum Added {
    Version(VersionValue),
    Supported,
    Unsupported,
    Unknown,
    Invalid,
}

fn classify(value: Option<&Value>) -> Added {
    match value {
        Some(Value::String(raw)) => parse_version(raw).map_or(Added::Invalid, Added::Version),
        Some(Value::Bool(true)) => Added::Supported,
        Some(Value::Bool(false)) => Added::Unsupported,
        Some(Value::Null) | None => Added::Unknown,
        Some(_) => Added::Invalid,
    }
}

impl Check for VersionCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Version
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();

        for_each_feature(doc, |path, compat, _| {
            for (browser, statements) in support_entries(compat) {
                let at = format!("{path}: {browser}");
                for statement in statements {
                    let added = classify(statement.get("version_added"));
                    if matches!(added, Added::Invalid) {
                        problems.push(format!(
                            "{at}: invalid version_added {}",
                            statement.get("version_added").unwrap_or(&Value::Null)
                        ));
                    }

                    let Some(removed_raw) = statement.get("version_removed") else {
                        continue;
                    };
                    let removed = classify(Some(removed_raw));
                    match (&added, removed) {
                        (_, Added::Invalid | Added::Unsupported | Added::Unknown) => {
                            problems.push(format!("{at}: invalid version_removed {removed_raw}"));
                        }
                        (Added::Unsupported | Added::Unknown, _) => problems.push(format!(
                            "{at}: version_removed is set but version_added is not a release"
                        )),
                        (Added::Version(a), Added::Version(r)) if r.version <= a.version => {
                            problems.push(format!(
                                "{at}: version_removed {removed_raw} must be later than version_added {}",
                                statement.get("version_added").unwrap_or(&Value::Null)
                            ));
                        }
                        _ => {}
                    }
                }
            }
        });

        Ok(problems)
    }
}

#[cfg(test)]
#[path = "versions_tests.rs"]
mod tests;
