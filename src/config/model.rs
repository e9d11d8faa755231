use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Top-level configuration read from `.compat-lint.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version. Only `"1"` is accepted when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub lint: LintConfig,

    #[serde(default)]
    pub checks: ChecksConfig,
}

/// Traversal settings: what gets walked and which files are data files.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Extension (without the dot) that marks a file as a data file.
    #[serde(default = "default_extension")]
    pub extension: String,

    /// Top-level directories walked when no paths are given, in order.
    #[serde(default = "default_categories")]
    pub categories: Vec<String>,

    /// Category whose files hold browser release data rather than compat data.
    #[serde(default = "default_browsers_category")]
    pub browsers_category: String,

    /// Glob patterns (relative to the repository root) of files to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for LintConfig {
    fn default() -> Self {
        Self {
            extension: default_extension(),
            categories: default_categories(),
            browsers_category: default_browsers_category(),
            exclude: Vec::new(),
        }
    }
}

/// Tunables consumed by individual checks.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ChecksConfig {
    /// Browser ids accepted in `support` blocks when the repository
    /// has no browsers category to read them from.
    #[serde(default = "default_known_browsers")]
    pub known_browsers: Vec<String>,

    /// Browsers that must record real version numbers (no `true`/`null`).
    #[serde(default = "default_real_value_browsers")]
    pub real_value_browsers: Vec<String>,
}

impl Default for ChecksConfig {
    fn default() -> Self {
        Self {
            known_browsers: default_known_browsers(),
            real_value_browsers: default_real_value_browsers(),
        }
    }
}

fn default_extension() -> String {
    "json".to_string()
}

fn default_browsers_category() -> String {
    "browsers".to_string()
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

fn default_categories() -> Vec<String> {
    to_strings(&[
        "api",
        "browsers",
        "css",
        "html",
        "http",
        "svg",
        "javascript",
        "mathml",
        "webdriver",
        "webextensions",
    ])
}

fn default_known_browsers() -> Vec<String> {
    to_strings(&[
        "bun",
        "chrome",
        "chrome_android",
        "deno",
        "edge",
        "firefox",
        "firefox_android",
        "ie",
        "nodejs",
        "oculus",
        "opera",
        "opera_android",
        "safari",
        "safari_ios",
        "samsunginternet_android",
        "webview_android",
        "webview_ios",
    ])
}

fn default_real_value_browsers() -> Vec<String> {
    to_strings(&[
        "chrome",
        "chrome_android",
        "edge",
        "firefox",
        "firefox_android",
        "opera",
        "opera_android",
        "safari",
        "safari_ios",
        "samsunginternet_android",
        "webview_android",
    ])
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
