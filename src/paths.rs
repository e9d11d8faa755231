//! Turning user-supplied paths into existing absolute paths, and back into
//! short display paths.

use std::path::{Path, PathBuf};

use crate::error::{LintError, Result};

/// An input path that exists on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    File(PathBuf),
    Directory(PathBuf),
}

impl Resolved {
    #[must_use]
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }
}

/// Resolves inputs against the repository root.
///
/// Relative inputs are taken relative to the root, absolute inputs are used
/// as given. Inputs that do not exist resolve to `None`; that is not an
/// error.
#[derive(Debug, Clone)]
pub struct PathResolver {
    root: PathBuf,
}

impl PathResolver {
    /// # Errors
    /// Returns an error if `root` does not exist or cannot be canonicalized.
    pub fn new(root: &Path) -> Result<Self> {
        let root = dunce::canonicalize(root).map_err(|source| LintError::FileRead {
            path: root.to_path_buf(),
            source,
        })?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn resolve(&self, input: &Path) -> Option<Resolved> {
        let candidate = if input.is_absolute() {
            input.to_path_buf()
        } else {
            self.root.join(input)
        };

        let absolute = dunce::canonicalize(&candidate).ok()?;
        let metadata = std::fs::metadata(&absolute).ok()?;
        if metadata.is_dir() {
            Some(Resolved::Directory(absolute))
        } else {
            Some(Resolved::File(absolute))
        }
    }

    /// Path of `path` relative to the root, if it lies inside it.
    #[must_use]
    pub fn relative<'a>(&self, path: &'a Path) -> Option<&'a Path> {
        path.strip_prefix(&self.root).ok()
    }
}

/// Format a path for display relative to `base` when it lies inside it,
/// with forward slashes on every platform. `"."` stands for `base` itself.
#[must_use]
pub fn display_path(path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    let result = normalize_separators(&shown.to_string_lossy());
    if result.is_empty() {
        ".".to_string()
    } else {
        result
    }
}

/// Normalize path separators to forward slashes.
#[must_use]
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}

#[cfg(test)]
#[path = "paths_tests.rs"]
mod tests;
