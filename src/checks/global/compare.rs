use indexmap::IndexMap;

use super::{GlobalCheck, Repository};
use crate::checks::data::for_each_feature;
use crate::error::{ErrorKind, Result};

/// A feature may be defined by only one data file.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareCheck;

impl GlobalCheck for CompareCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Compare
    }

    fn check(&self, repository: &Repository) -> Result<Vec<String>> {
        let mut owners: IndexMap<String, String> = IndexMap::new();
        let mut problems = Vec::new();

        for file in repository.compat_files() {
            // Unparsable files are reported by their own file checks.
            let Ok(doc) = file.document() else {
                continue;
            };
            for_each_feature(doc, |path, _, _| {
                match owners.get(path) {
                    Some(owner) if owner != file.label() => problems.push(format!(
                        "{path} is defined in both {owner} and {}",
                        file.label()
                    )),
                    Some(_) => {}
                    None => {
                        owners.insert(path.to_string(), file.label().to_string());
                    }
                }
            });
        }

        Ok(problems)
    }
}
