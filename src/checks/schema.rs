use std::sync::LazyLock;

use jsonschema::{Draft, Validator};
use serde_json::Value;

use super::Check;
use super::data::DataFile;
use crate::error::{ErrorKind, Result};

/// Which document shape a file must follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schema {
    /// Nested features with `__compat` blocks.
    Compat,
    /// Browser release data.
    Browsers,
}

static COMPAT_SCHEMA: LazyLock<Validator> =
    LazyLock::new(|| build_validator(include_str!("schemas/compat-data.schema.json")));

static BROWSERS_SCHEMA: LazyLock<Validator> =
    LazyLock::new(|| build_validator(include_str!("schemas/browsers.schema.json")));

/// # Panics
///
/// Panics if an embedded schema is invalid. The schemas are compiled into
/// the binary and exercised by the tests, so this should never happen.
fn build_validator(source: &str) -> Validator {
    let schema: Value = serde_json::from_str(source)
        // SAFETY: embedded schema document
        .expect("embedded schema is valid JSON");
    jsonschema::options()
        .with_draft(Draft::Draft202012)
        .build(&schema)
        // SAFETY: embedded schema document
        .expect("embedded schema compiles")
}

/// Structural validation of a data file against its JSON schema.
#[derive(Clone, Copy)]
pub struct SchemaCheck {
    validator: &'static Validator,
}

impl SchemaCheck {
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        let validator = match schema {
            Schema::Compat => &*COMPAT_SCHEMA,
            Schema::Browsers => &*BROWSERS_SCHEMA,
        };
        Self { validator }
    }
}

impl Check for SchemaCheck {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Schema
    }

    fn check(&self, file: &DataFile) -> Result<Vec<String>> {
        let doc = file.document()?;
        Ok(self
            .validator
            .iter_errors(doc)
            .map(|err| format!("{}: {err}", dotted_path(&err.instance_path().to_string())))
            .collect())
    }
}

/// `/css/a/__compat` → `css.a.__compat`; the empty pointer is the document.
fn dotted_path(pointer: &str) -> String {
    if pointer.is_empty() {
        return "document".to_string();
    }
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|token| token.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

#[cfg(test)]
#[path = "schema_tests.rs"]
mod tests;
