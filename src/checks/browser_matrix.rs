use std::collections::BTreeSet;
use std::path::Path;

use serde_json::Value;
use walkdir::WalkDir;

use super::Check;
use super::data::{DataFile, for_each_feature};
use crate::error::{ErrorKind, Result};

/// Every `support` block may only name known browsers.
#[derive(Debug, Clone, Default)]
pub struct BrowserMatrixCheck {
    known: BTreeSet<String>,
}

impl BrowserMatrixCheck {
    #[must_use]
    pub fn new<I, S>(known: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            known: known.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads browser ids from `<root>/<browsers_category>/*.<extension>`,
    /// falling back to `fallback` when that directory holds none.
    /// Unparsable browser files are skipped; their own schema check
    /// reports them.
    #[must_use]
    pub fn from_repository(
        root: &Path,
        browsers_category: &str,
        extension: &str,
        fallback: &[String],
    ) -> Self {
        let known = read_browser_ids(&root.join(browsers_category), extension);
        if known.is_empty() {
            Self::new(fallback.iter().cloned())
        } else {
            Self { known }
        }
    }

    #[must_use]
    pub fn is_known(&self, browser: &str) -> bool {
        self.known.contains(browser)
    }
}

fn read_browser_ids(dir: &Path, extension: &str) -> BTreeSet<String> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().is_some_and(|ext| ext == extension))
        .filter_map(|e| std::fs::read_to_string(e.path()).ok())
        .filter_map(|text| serde_json::from_str::<Value>(&text).ok())
        .filter_map(|doc| {
            doc.get("browsers")
                .and_then(Value::as_object)
                .map(|browsers| browsers.keys().cloned().collect::<Vec<_>>())
        })
        .flatten()
        .collect()
}

impl Check for BrowserMatrixCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::BrowserMatrix
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();
        for_each_feature(doc, |path, compat, _| {
            let Some(support) = compat.get("support").and_then(Value::as_object) else {
                return;
            };
            for browser in support.keys() {
                if !self.is_known(browser) {
                    problems.push(format!("{path}: unknown browser '{browser}'"));
                }
            }
        });
        Ok(problems)
    }
}

#[cfg(test)]
#[path = "browser_matrix_tests.rs"]
mod tests;
