use std::collections::BTreeSet;

use serde_json::Value;

use super::Check;
use super::data::{DataFile, for_each_feature, support_entries};
use crate::error::{ErrorKind, Result};

/// Selected browsers must record actual release numbers instead of
/// `true` ("supported, version unknown") or `null` ("unknown").
#[derive(Debug, Clone, Default)]
pub struct RealValueCheck {
    browsers: BTreeSet<String>,
}

impl RealValueCheck {
    #[must_use]
    pub fn new<I, S>(browsers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            browsers: browsers.into_iter().map(Into::into).collect(),
        }
    }
}

impl Check for RealValueCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::RealValue
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();

        for_each_feature(doc, |path, compat, _| {
            for (browser, statements) in support_entries(compat) {
                if !self.browsers.contains(browser) {
                    continue;
                }
                for statement in statements {
                    for key in ["version_added", "version_removed"] {
                        match statement.get(key) {
                            Some(Value::Bool(true)) => problems
                                .push(format!("{path}: {browser} {key} must be a real value, not true")),
                            Some(Value::Null) => problems
                                .push(format!("{path}: {browser} {key} must be a real value, not null")),
                            _ => {}
                        }
                    }
                }
            }
        });

        Ok(problems)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(support: &str) -> Vec<String> {
        let text = format!(r#"{{"html": {{"a": {{"__compat": {{"support": {support}}}}}}}}}"#);
        RealValueCheck::new(["chrome", "firefox"])
            .check(&DataFile::from_text("x.json", "html", &text))
            .unwrap()
    }

    #[test]
    fn real_values_pass() {
        assert!(
            run(r#"{"chrome": {"version_added": "1"}, "firefox": {"version_added": false}}"#)
                .is_empty()
        );
    }

    #[test]
    fn true_and_null_are_reported_for_listed_browsers() {
        assert_eq!(
            run(r#"{"chrome": {"version_added": true}, "firefox": [{"version_added": null}]}"#),
            vec![
                "html.a: chrome version_added must be a real value, not true",
                "html.a: firefox version_added must be a real value, not null",
            ]
        );
    }

    #[test]
    fn other_browsers_may_use_true() {
        assert!(run(r#"{"ie": {"version_added": true}}"#).is_empty());
    }
}
