pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod paths;
pub mod pipeline;
pub mod runner;
pub mod walker;

pub use error::{ErrorKind, LintError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LINT_ERRORS: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
