#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the compat-lint binary, run
/// non-interactively and without colors.
#[macro_export]
macro_rules! compat_lint {
    () => {{
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("compat-lint"));
        cmd.env("CI", "1").env_remove("NO_COLOR").arg("--color").arg("never");
        cmd
    }};
}

/// Temporary data repository for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes `.compat-lint.toml` at the repository root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".compat-lint.toml", content);
    }

    /// Writes a canonically formatted compat file defining `feature`
    /// (a dotted path) with Chrome support from version 1.
    pub fn create_feature(&self, relative_path: &str, feature: &str) {
        self.create_file(relative_path, &feature_json(feature));
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Canonical JSON for a single feature supported in Chrome 1.
pub fn feature_json(feature: &str) -> String {
    let mut value = serde_json::json!({
        "__compat": {
            "support": {
                "chrome": {
                    "version_added": "1"
                }
            }
        }
    });
    for key in feature.rsplit('.') {
        let mut wrapper = serde_json::Map::new();
        wrapper.insert(key.to_string(), value);
        value = serde_json::Value::Object(wrapper);
    }
    let mut text = serde_json::to_string_pretty(&value).expect("serializable");
    text.push('\n');
    text
}

/// Canonical browser file for `id`.
pub fn browser_json(id: &str) -> String {
    let value = serde_json::json!({
        "browsers": {
            id: {
                "name": id,
                "type": "desktop",
                "releases": {
                    "1": {
                        "release_date": "2008-12-11",
                        "status": "retired"
                    }
                }
            }
        }
    });
    let mut text = serde_json::to_string_pretty(&value).expect("serializable");
    text.push('\n');
    text
}

/// Only walks the css category, so fixtures stay small.
pub const CSS_ONLY_CONFIG: &str = r#"
version = "1"

[lint]
categories = ["css"]
"#;
