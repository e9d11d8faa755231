use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

use super::Check;
use super::data::{DataFile, for_each_feature, support_entries};
use crate::error::{ErrorKind, Result};

static CSS_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^-(webkit|moz|ms|o|khtml)-$")
        // SAFETY: constant pattern
        .expect("valid css prefix regex")
});

static API_PREFIX_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(webkit|WebKit|moz|Moz|ms|MS|o|O|khtml)$")
        // SAFETY: constant pattern
        .expect("valid api prefix regex")
});

/// Vendor prefixes are spelled the way their category expects.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixCheck;

impl Check for PrefixCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Prefix
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let is_css = file.category() == "css";
        let mut problems = Vec::new();

        for_each_feature(doc, |path, compat, _| {
            for (browser, statements) in support_entries(compat) {
                for statement in statements {
                    let Some(prefix) = statement.get("prefix") else {
                        continue;
                    };
                    if statement.contains_key("alternative_name") {
                        problems.push(format!(
                            "{path}: {browser} has both prefix and alternative_name"
                        ));
                    }
                    let valid = match prefix {
                        Value::String(p) if is_css => CSS_PREFIX_RE.is_match(p),
                        Value::String(p) => API_PREFIX_RE.is_match(p),
                        _ => false,
                    };
                    if !valid {
                        problems.push(format!("{path}: {browser} has invalid prefix {prefix}"));
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

    fn run(category: &str, statement: &str) -> Vec<String> {
        let text = format!(
            r#"{{"{category}": {{"x": {{"__compat": {{"support": {{"chrome": {statement}}}}}}}}}}}"#
        );
        PrefixCheck
            .check(&DataFile::from_text("x.json", category, &text))
            .unwrap()
    }

    #[test]
    fn css_prefixes_need_dashes() {
        assert!(run("css", r#"{"version_added": "1", "prefix": "-webkit-"}"#).is_empty());
        assert_eq!(
            run("css", r#"{"version_added": "1", "prefix": "webkit"}"#),
            vec![r#"css.x: chrome has invalid prefix "webkit""#]
        );
    }

    #[test]
    fn api_prefixes_are_bare() {
        assert!(run("api", r#"{"version_added": "1", "prefix": "webkit"}"#).is_empty());
        assert_eq!(
            run("api", r#"{"version_added": "1", "prefix": "-webkit-"}"#),
            vec![r#"api.x: chrome has invalid prefix "-webkit-""#]
        );
    }

    #[test]
    fn prefix_and_alternative_name_are_exclusive() {
        assert_eq!(
            run(
                "api",
                r#"{"version_added": "1", "prefix": "webkit", "alternative_name": "Foo"}"#
            ),
            vec!["api.x: chrome has both prefix and alternative_name"]
        );
    }
}
