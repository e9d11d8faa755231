use super::{GlobalCheck, Repository};
use crate::checks::data::{for_each_feature, support_entries};
use crate::error::{ErrorKind, Result};

/// Keys replaced by data migrations: `(retired, replacement)`.
pub const RETIRED_KEYS: &[(&str, &str)] = &[
    ("flag", "flags"),
    ("prefixed", "prefix"),
    ("notes_html", "notes"),
];

/// No data file may still use a key a migration has retired.
#[derive(Debug, Clone, Copy, Default)]
pub struct MigrationCheck;

impl GlobalCheck for MigrationCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Migration
    }

    fn check(&self, repository: &Repository) -> Result<Vec<String>> {
        let mut problems = Vec::new();

        for file in repository.compat_files() {
            let Ok(doc) = file.document() else {
                continue;
            };
            for_each_feature(doc, |path, compat, _| {
                for (browser, statements) in support_entries(compat) {
                    for statement in statements {
                        for (retired, replacement) in RETIRED_KEYS {
                            if statement.contains_key(*retired) {
                                problems.push(format!(
                                    "{}: {path}.__compat.support.{browser}.{retired} uses \
                                     retired key '{retired}' (migrated to '{replacement}')",
                                    file.label()
                                ));
                            }
                        }
                    }
                }
            });
        }

        Ok(problems)
    }
}
