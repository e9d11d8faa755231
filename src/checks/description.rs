use serde_json::Value;

use super::Check;
use super::data::{DataFile, for_each_feature};
use crate::error::{ErrorKind, Result};

#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionCheck;

impl Check for DescriptionCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Description
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();

        for_each_feature(doc, |path, compat, _| {
            let Some(Value::String(description)) = compat.get("description") else {
                return;
            };
            if description.trim().is_empty() {
                problems.push(format!("{path}: description is empty"));
                return;
            }
            if description.trim() != description {
                problems.push(format!("{path}: description has surrounding whitespace"));
            }
            if description.ends_with('.') {
                problems.push(format!("{path}: description must not end with a period"));
            }
            if description.matches("<code>").count() != description.matches("</code>").count() {
                problems.push(format!("{path}: description has unbalanced <code> tags"));
            }
        });

        Ok(problems)
    }
}
