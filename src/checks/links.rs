use std::sync::LazyLock;

use regex::Regex;

use super::Check;
use super::data::{DataFile, join, string_values, visit_members};
use crate::error::{ErrorKind, Result};

const URL_KEYS: &[&str] = &["mdn_url", "spec_url", "impl_url", "release_notes", "pref_url"];
const MDN_PREFIX: &str = "https://developer.mozilla.org/docs/";

static HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"href=['"]([^'"]*)['"]"#)
        // SAFETY: constant pattern
        .expect("valid href regex")
});

/// URL hygiene: https everywhere, MDN links under the docs tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkCheck;

impl Check for LinkCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Link
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        let mut problems = Vec::new();

        visit_members(doc, "", &mut |path, key, value| {
            let at = join(path, key);
            if URL_KEYS.contains(&key) {
                for url in string_values(value) {
                    if !url.starts_with("https://") {
                        problems.push(format!("{at}: '{url}' must use https"));
                    } else if key == "mdn_url" && !url.starts_with(MDN_PREFIX) {
                        problems.push(format!("{at}: '{url}' must start with {MDN_PREFIX}"));
                    }
                }
            } else if key == "notes" {
                for note in string_values(value) {
                    for caps in HREF_RE.captures_iter(note) {
                        let url = &caps[1];
                        if url.starts_with("http://") {
                            problems.push(format!("{at}: link '{url}' must use https"));
                        }
                    }
                }
            }
        });

        Ok(problems)
    }
}

#[cfg(test)]
#[path = "links_tests.rs"]
mod tests;
