//! File-level checks.
//!
//! Every check must stay read-only: the replay pass runs failing files
//! through the same checks a second time and relies on getting the same
//! answer. A check that writes to the repository breaks that.

mod browser_matrix;
mod consistency;
mod data;
mod description;
pub mod global;
mod links;
mod prefix;
mod real_values;
mod schema;
mod style;
mod versions;

pub use browser_matrix::BrowserMatrixCheck;
pub use consistency::ConsistencyCheck;
pub use data::{DataFile, Version, VersionValue, parse_version};
pub use description::DescriptionCheck;
pub use links::LinkCheck;
pub use prefix::PrefixCheck;
pub use real_values::RealValueCheck;
pub use schema::{Schema, SchemaCheck};
pub use style::StyleCheck;
pub use versions::VersionCheck;

use crate::error::{ErrorKind, Result};

/// A single-purpose validator applied to one data file.
pub trait Check {
    /// Kind reported for this check's problems.
    fn kind(&self) -> ErrorKind;

    /// Returns one message per problem found; empty means the file is clean.
    ///
    /// # Errors
    /// Returns an error if the file cannot be evaluated at all
    /// (unreadable, malformed JSON).
    fn check(&self, file: &DataFile) -> Result<Vec<String>>;
}
