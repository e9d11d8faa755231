use std::cell::OnceCell;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use crate::error::{LintError, Result};

pub type Object = Map<String, Value>;

/// A data file as seen by the checks: read once, parsed on first use.
#[derive(Debug)]
pub struct DataFile {
    path: PathBuf,
    label: String,
    category: String,
    source: std::result::Result<String, String>,
    document: OnceCell<std::result::Result<Value, String>>,
}

impl DataFile {
    /// Reads `path`. A read failure is kept and reported by every check
    /// that asks for the content.
    #[must_use]
    pub fn read(path: &Path, label: &str, category: &str) -> Self {
        let source = std::fs::read_to_string(path).map_err(|e| format!("cannot read file: {e}"));
        Self {
            path: path.to_path_buf(),
            label: label.to_string(),
            category: category.to_string(),
            source,
            document: OnceCell::new(),
        }
    }

    /// In-memory file, mostly for tests.
    #[must_use]
    pub fn from_text(label: &str, category: &str, text: &str) -> Self {
        Self {
            path: PathBuf::from(label),
            label: label.to_string(),
            category: category.to_string(),
            source: Ok(text.to_string()),
            document: OnceCell::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Top-level category directory the file lives in.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// # Errors
    /// Returns a syntax error if the file could not be read.
    pub fn text(&self) -> Result<&str> {
        self.source
            .as_deref()
            .map_err(|message| LintError::syntax(&self.label, message.clone()))
    }

    /// # Errors
    /// Returns a syntax error if the file could not be read or is not JSON.
    pub fn document(&self) -> Result<&Value> {
        let parsed = self.document.get_or_init(|| match &self.source {
            Ok(text) => serde_json::from_str(text).map_err(|e| format!("invalid JSON: {e}")),
            Err(message) => Err(message.clone()),
        });
        parsed
            .as_ref()
            .map_err(|message| LintError::syntax(&self.label, message.clone()))
    }
}

/// Dotted feature path, e.g. `css.properties.color`.
#[must_use]
pub fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}

/// Calls `f(path, compat, parent)` for every feature carrying a `__compat`
/// block, parents before children. `parent` is the nearest ancestor
/// feature with its own `__compat`.
pub fn for_each_feature<'a, F>(doc: &'a Value, mut f: F)
where
    F: FnMut(&str, &'a Object, Option<(&str, &'a Object)>),
{
    if let Value::Object(root) = doc {
        walk_features(root, "", None, &mut f);
    }
}

fn walk_features<'a, F>(node: &'a Object, path: &str, parent: Option<(&str, &'a Object)>, f: &mut F)
where
    F: FnMut(&str, &'a Object, Option<(&str, &'a Object)>),
{
    let compat = node.get("__compat").and_then(Value::as_object);
    if let Some(compat) = compat {
        f(path, compat, parent);
    }
    let next_parent = compat.map(|c| (path, c)).or(parent);
    for (key, child) in node {
        if key.starts_with("__") {
            continue;
        }
        if let Value::Object(child) = child {
            walk_features(child, &join(path, key), next_parent, f);
        }
    }
}

/// Support statements of one browser: a single object or an array of them.
#[must_use]
pub fn statements(value: &Value) -> Vec<&Object> {
    match value {
        Value::Object(statement) => vec![statement],
        Value::Array(items) => items.iter().filter_map(Value::as_object).collect(),
        _ => Vec::new(),
    }
}

/// `(browser, statements)` for every entry of a `__compat.support` block.
#[must_use]
pub fn support_entries(compat: &Object) -> Vec<(&str, Vec<&Object>)> {
    compat
        .get("support")
        .and_then(Value::as_object)
        .map(|support| {
            support
                .iter()
                .map(|(browser, value)| (browser.as_str(), statements(value)))
                .collect()
        })
        .unwrap_or_default()
}

/// Calls `f(path, key, value)` for every object member in the document,
/// depth-first. `path` is the dotted path of the containing object.
pub fn visit_members<'a, F>(value: &'a Value, path: &str, f: &mut F)
where
    F: FnMut(&str, &str, &'a Value),
{
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                f(path, key, child);
                visit_members(child, &join(path, key), f);
            }
        }
        Value::Array(items) => {
            for (i, item) in items.iter().enumerate() {
                visit_members(item, &format!("{path}[{i}]"), f);
            }
        }
        _ => {}
    }
}

/// One string or an array of strings.
#[must_use]
pub fn string_values(value: &Value) -> Vec<&str> {
    match value {
        Value::String(s) => vec![s.as_str()],
        Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
        _ => Vec::new(),
    }
}

/// Release identifier; `preview` sorts after every numbered release.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum Version {
    Release(Vec<u64>),
    Preview,
}

/// A parsed version string. `ranged` marks `≤N` ("N or earlier").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionValue {
    pub ranged: bool,
    pub version: Version,
}

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(≤)?(\d+(?:\.\d+)*)$")
        // SAFETY: constant pattern
        .expect("valid version regex")
});

/// Parses `"12"`, `"12.0.1"`, `"≤37"` or `"preview"`.
#[must_use]
pub fn parse_version(raw: &str) -> Option<VersionValue> {
    if raw == "preview" {
        return Some(VersionValue {
            ranged: false,
            version: Version::Preview,
        });
    }
    let caps = VERSION_RE.captures(raw)?;
    let mut parts = caps[2]
        .split('.')
        .map(str::parse::<u64>)
        .collect::<std::result::Result<Vec<_>, _>>()
        .ok()?;
    // 12 and 12.0 name the same release.
    while parts.len() > 1 && parts.last() == Some(&0) {
        parts.pop();
    }
    Some(VersionValue {
        ranged: caps.get(1).is_some(),
        version: Version::Release(parts),
    })
}

#[cfg(test)]
#[path = "data_tests.rs"]
mod tests;
