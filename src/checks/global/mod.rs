//! Whole-repository checks, run once per lint after the file walk.

mod compare;
mod format;
mod migrations;

pub use compare::CompareCheck;
pub use format::FormatCheck;
pub use migrations::MigrationCheck;

use crate::error::{ErrorKind, Result};
use crate::pipeline::PipelineVariant;
use crate::walker::FileEntry;

use super::DataFile;

/// Every data file under the configured categories.
#[derive(Debug, Clone, Default)]
pub struct Repository {
    entries: Vec<FileEntry>,
}

impl Repository {
    #[must_use]
    pub const fn new(entries: Vec<FileEntry>) -> Self {
        Self { entries }
    }

    /// Compat data files, read fresh from disk.
    pub fn compat_files(&self) -> impl Iterator<Item = DataFile> + '_ {
        self.entries
            .iter()
            .filter(|e| e.variant == PipelineVariant::Compat)
            .map(FileEntry::read)
    }

    /// All data files, browsers included.
    pub fn all_files(&self) -> impl Iterator<Item = DataFile> + '_ {
        self.entries.iter().map(FileEntry::read)
    }
}

/// A validator over the whole repository, independent of any one file.
pub trait GlobalCheck {
    fn kind(&self) -> ErrorKind;

    /// Returns one message per problem found; empty means clean.
    ///
    /// # Errors
    /// Returns an error if the check cannot run at all.
    fn check(&self, repository: &Repository) -> Result<Vec<String>>;
}

/// The standard global checks, in run order.
#[must_use]
pub fn standard() -> Vec<Box<dyn GlobalCheck>> {
    vec![
        Box::new(CompareCheck),
        Box::new(MigrationCheck),
        Box::new(FormatCheck),
    ]
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
