use std::path::{Path, PathBuf};

use indexmap::IndexMap;

use crate::error::ErrorKind;
use crate::walker::FileEntry;

/// Failing files keyed by display path, in first-failure order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FailureRegistry {
    entries: IndexMap<String, PathBuf>,
}

impl FailureRegistry {
    /// Records a failing file. Returns `false` if it was already present;
    /// the first recorded position is kept.
    pub fn insert(&mut self, display: &str, path: &Path) -> bool {
        if self.entries.contains_key(display) {
            return false;
        }
        self.entries.insert(display.to_string(), path.to_path_buf());
        true
    }

    #[must_use]
    pub fn contains(&self, display: &str) -> bool {
        self.entries.contains_key(display)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.entries
            .iter()
            .map(|(display, path)| (display.as_str(), path.as_path()))
    }
}

/// Folds per-file and global outcomes into the run result.
#[derive(Debug, Default)]
pub struct ResultAggregator {
    registry: FailureRegistry,
    files_checked: usize,
    file_errors: bool,
    global_failures: Vec<ErrorKind>,
}

impl ResultAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one file's aggregate outcome and passes it through.
    pub fn record_file(&mut self, entry: &FileEntry, has_errors: bool) -> bool {
        self.files_checked += 1;
        if has_errors {
            self.file_errors = true;
            self.registry.insert(&entry.display, &entry.path);
        }
        has_errors
    }

    pub fn record_global(&mut self, kind: ErrorKind, has_errors: bool) {
        if has_errors {
            self.global_failures.push(kind);
        }
    }

    #[must_use]
    pub const fn registry(&self) -> &FailureRegistry {
        &self.registry
    }

    /// Whether any file or global check reported errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.file_errors || !self.global_failures.is_empty()
    }

    #[must_use]
    pub fn finish(self) -> LintSummary {
        LintSummary {
            files_checked: self.files_checked,
            registry: self.registry,
            global_failures: self.global_failures,
        }
    }
}

/// What a finished run found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintSummary {
    pub files_checked: usize,
    pub registry: FailureRegistry,
    /// Global checks that reported errors, in run order.
    pub global_failures: Vec<ErrorKind>,
}

impl LintSummary {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.registry.is_empty() || !self.global_failures.is_empty()
    }

    #[must_use]
    pub fn exit_code(&self) -> i32 {
        if self.has_errors() {
            crate::EXIT_LINT_ERRORS
        } else {
            crate::EXIT_SUCCESS
        }
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
