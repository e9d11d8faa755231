//! Expanding user targets into data files, depth-first and left-to-right.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use globset::{Glob, GlobSet, GlobSetBuilder};
use walkdir::WalkDir;

use crate::checks::DataFile;
use crate::config::LintConfig;
use crate::error::{LintError, Result};
use crate::paths::{PathResolver, Resolved, display_path, normalize_separators};
use crate::pipeline::{Classifier, PipelineVariant};

/// A data file ready to be linted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Absolute, canonical path.
    pub path: PathBuf,
    /// Path relative to the invocation directory, used in all output.
    pub display: String,
    /// Top-level category directory (empty outside the repository).
    pub category: String,
    pub variant: PipelineVariant,
}

impl FileEntry {
    #[must_use]
    pub fn read(&self) -> DataFile {
        DataFile::read(&self.path, &self.display, &self.category)
    }
}

/// Why a path produced no entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Does not exist.
    Missing,
    /// Already reached through another target.
    Duplicate,
    /// Not a data file extension.
    NotData,
    /// Matched an exclude pattern.
    Excluded,
    /// Directory could not be listed.
    Unreadable,
}

impl SkipReason {
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Missing => "does not exist",
            Self::Duplicate => "already visited",
            Self::NotData => "not a data file",
            Self::Excluded => "excluded by config",
            Self::Unreadable => "cannot be read",
        }
    }
}

pub struct TreeWalker {
    resolver: PathResolver,
    classifier: Classifier,
    extension: String,
    exclude: GlobSet,
    display_base: PathBuf,
}

impl TreeWalker {
    /// # Errors
    /// Returns an error if an exclude pattern is not a valid glob.
    pub fn new(resolver: PathResolver, config: &LintConfig, display_base: &Path) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude {
            let glob = Glob::new(pattern).map_err(|source| LintError::InvalidPattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let exclude = builder.build().map_err(|source| LintError::InvalidPattern {
            pattern: config.exclude.join(", "),
            source,
        })?;

        Ok(Self {
            resolver,
            classifier: Classifier::new(&config.browsers_category),
            extension: config.extension.trim_start_matches('.').to_string(),
            exclude,
            display_base: dunce::canonicalize(display_base)
                .unwrap_or_else(|_| display_base.to_path_buf()),
        })
    }

    #[must_use]
    pub const fn resolver(&self) -> &PathResolver {
        &self.resolver
    }

    /// Builds the entry for an absolute file path: display path,
    /// category and pipeline variant.
    #[must_use]
    pub fn entry(&self, path: PathBuf) -> FileEntry {
        let category = Classifier::category(self.resolver.relative(&path));
        FileEntry {
            display: display_path(&path, &self.display_base),
            variant: self.classifier.classify(&category),
            category,
            path,
        }
    }

    fn is_data_file(&self, path: &Path) -> bool {
        path.extension().is_some_and(|ext| ext == self.extension.as_str())
    }

    fn is_excluded(&self, path: &Path) -> bool {
        self.resolver.relative(path).is_some_and(|relative| {
            self.exclude
                .is_match(normalize_separators(&relative.to_string_lossy()))
        })
    }

    /// Walks `targets`, calling `visit` on every data file. Returns `true`
    /// iff any `visit` call returned `true`. Every file is visited whatever
    /// earlier files returned.
    pub fn walk<F>(&self, targets: &[PathBuf], visit: F) -> bool
    where
        F: FnMut(&FileEntry) -> bool,
    {
        self.walk_with(targets, visit, |_, _| {})
    }

    /// Like [`walk`](Self::walk), reporting every path that produced no
    /// entry to `skipped`.
    pub fn walk_with<F, S>(&self, targets: &[PathBuf], mut visit: F, mut skipped: S) -> bool
    where
        F: FnMut(&FileEntry) -> bool,
        S: FnMut(&Path, SkipReason),
    {
        let mut has_errors = false;
        let mut visited: HashSet<PathBuf> = HashSet::new();
        // Stack of pending paths; the next one to process is on top.
        let mut frontier: Vec<PathBuf> = targets.iter().rev().cloned().collect();

        while let Some(input) = frontier.pop() {
            let Some(resolved) = self.resolver.resolve(&input) else {
                skipped(&input, SkipReason::Missing);
                continue;
            };
            if !visited.insert(resolved.path().to_path_buf()) {
                skipped(resolved.path(), SkipReason::Duplicate);
                continue;
            }

            match resolved {
                Resolved::Directory(dir) => match list_children(&dir) {
                    Ok(children) => frontier.extend(children.into_iter().rev()),
                    Err(_) => skipped(&dir, SkipReason::Unreadable),
                },
                Resolved::File(file) => {
                    if !self.is_data_file(&file) {
                        skipped(&file, SkipReason::NotData);
                    } else if self.is_excluded(&file) {
                        skipped(&file, SkipReason::Excluded);
                    } else {
                        let entry = self.entry(file);
                        // Evaluate `visit` first so it runs even once an error is known.
                        has_errors = visit(&entry) || has_errors;
                    }
                }
            }
        }

        has_errors
    }

    /// Every data file reachable from `targets`, in walk order.
    #[must_use]
    pub fn collect(&self, targets: &[PathBuf]) -> Vec<FileEntry> {
        let mut entries = Vec::new();
        self.walk(targets, |entry| {
            entries.push(entry.clone());
            false
        });
        entries
    }
}

/// Direct children of `dir`, sorted by file name.
fn list_children(dir: &Path) -> std::result::Result<Vec<PathBuf>, walkdir::Error> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .map(|entry| entry.map(walkdir::DirEntry::into_path))
        .collect()
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
