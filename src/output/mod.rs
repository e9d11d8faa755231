//! Terminal output: colors, progress lines and diagnostic sinks.

pub mod console;
pub mod error_output;
pub mod progress;
pub mod sink;

pub use console::Console;
pub use error_output::ErrorOutput;
pub use progress::{ProgressHandle, ProgressReporter, ProgressState};
pub use sink::{DiagnosticSink, DirectSink, GatedSink};

use std::io::IsTerminal;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if the stream is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Output stream a piece of text is destined for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl ColorMode {
    /// Resolves the mode against a concrete stream.
    #[must_use]
    pub fn use_colors(self, stream: Stream) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                // https://no-color.org: presence of the variable disables color
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                match stream {
                    Stream::Stdout => std::io::stdout().is_terminal(),
                    Stream::Stderr => std::io::stderr().is_terminal(),
                }
            }
        }
    }
}

/// ANSI color codes
pub(crate) mod ansi {
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const CYAN: &str = "\x1b[36m";
    pub const RESET: &str = "\x1b[0m";
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
