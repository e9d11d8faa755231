use serde_json::Value;

use super::Check;
use super::data::{DataFile, Object, for_each_feature, parse_version, support_entries};
use crate::error::{ErrorKind, Result};

/// Subfeatures cannot claim more support than their parent feature.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsistencyCheck;

/// `version_added` of the first (most relevant) statement for `browser`.
fn primary_added<'a>(compat: &'a Object, browser: &str) -> Option<&'a Value> {
    support_entries(compat)
        .into_iter()
        .find(|(id, _)| *id == browser)
        .and_then(|(_, statements)| statements.first().copied())
        .and_then(|statement| statement.get("version_added"))
}

impl Check for ConsistencyCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Consistency
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();

        for_each_feature(doc, |path, compat, parent| {
            let Some((parent_path, parent_compat)) = parent else {
                return;
            };
            for (browser, statements) in support_entries(compat) {
                let Some(child) = statements.first().and_then(|s| s.get("version_added")) else {
                    continue;
                };
                let Some(parent_added) = primary_added(parent_compat, browser) else {
                    continue;
                };
                match (parent_added, child) {
                    (Value::Bool(false), Value::String(_) | Value::Bool(true)) => {
                        problems.push(format!(
                            "{path}: {browser} claims support but {parent_path} has version_added false"
                        ));
                    }
                    (Value::String(p), Value::String(c)) => {
                        let (Some(pv), Some(cv)) = (parse_version(p), parse_version(c)) else {
                            continue;
                        };
                        // A ranged parent ("≤N") gives no lower bound to compare against.
                        if !pv.ranged && cv.version < pv.version {
                            problems.push(format!(
                                "{path}: {browser} version_added {c} is earlier than {parent_path} ({p})"
                            ));
                        }
                    }
                    _ => {}
                }
            }
        });

        Ok(problems)
    }
}

#[cfg(test)]
#[path = "consistency_tests.rs"]
mod tests;
