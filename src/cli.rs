use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::output::ColorMode;

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorChoice> for ColorMode {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => Self::Auto,
            ColorChoice::Always => Self::Always,
            ColorChoice::Never => Self::Never,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "compat-lint")]
#[command(version, about = "Lint a browser compatibility data repository")]
#[command(long_about = "Runs every data file through its checks, then the \
    whole-repository checks, and finishes with the full diagnostics of every \
    failing file.\n\n\
    Exit codes:\n  \
    0 - All checks passed\n  \
    1 - Lint errors found\n  \
    2 - Configuration or runtime error")]
#[command(disable_version_flag = true, disable_help_flag = true)]
pub struct Cli {
    /// Files or directories to lint (default: every configured category)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    /// Repository root; relative paths are resolved against it
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long, conflicts_with = "config")]
    pub no_config: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Report skipped paths
    #[arg(long)]
    pub verbose: bool,

    /// Print version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Print help
    #[arg(short = 'h', long = "help", short_alias = '?', action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Whether the `CI` environment value marks a non-interactive run.
#[must_use]
pub fn is_ci(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty() && v != "0" && !v.eq_ignore_ascii_case("false"))
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
