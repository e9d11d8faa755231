use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LintError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A check could not evaluate a file (unreadable or malformed content).
    #[error("{path}: {message}")]
    Syntax { path: PathBuf, message: String },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl LintError {
    /// Builds the error a check returns when it cannot evaluate `path`.
    pub fn syntax(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Syntax {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Category of a reported problem: one per file check, one per global
/// check, plus `Syntax` for a check that could not evaluate its file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Syntax,
    Schema,
    Style,
    Link,
    BrowserMatrix,
    Version,
    Consistency,
    RealValue,
    Prefix,
    Description,
    Compare,
    Migration,
    Format,
}

impl ErrorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Syntax => "Syntax",
            Self::Schema => "Schema",
            Self::Style => "Style",
            Self::Link => "Links",
            Self::BrowserMatrix => "Browsers",
            Self::Version => "Versions",
            Self::Consistency => "Consistency",
            Self::RealValue => "Real values",
            Self::Prefix => "Prefix",
            Self::Description => "Descriptions",
            Self::Compare => "Compare",
            Self::Migration => "Migrations",
            Self::Format => "Format",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub type Result<T> = std::result::Result<T, LintError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
