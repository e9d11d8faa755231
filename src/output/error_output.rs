//! Fatal errors and verbose notes printed outside the lint passes.
//!
//! Format: `✖ Error: {message}` / `  × {detail}` and `note: {message}`.

use std::io::Write;

use super::{ColorMode, Stream, ansi};

/// Fatal error printer bound to stderr.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self {
            use_colors: mode.use_colors(Stream::Stderr),
        }
    }

    /// Prints a fatal error with an optional detail line.
    pub fn print_error(&self, message: &str, detail: Option<&str>) {
        let mut stderr = std::io::stderr().lock();
        self.write_error(&mut stderr, message, detail);
    }

    /// Writes an error to a writer (for testing).
    pub fn write_error<W: Write>(&self, w: &mut W, message: &str, detail: Option<&str>) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ Error:{} {message}",
                ansi::BOLD,
                ansi::RED,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ Error: {message}");
        }

        if let Some(d) = detail {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {d}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {d}");
            }
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

/// `note: {message}`.
#[must_use]
pub fn format_note(message: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}note:{} {message}", ansi::CYAN, ansi::RESET)
    } else {
        format!("note: {message}")
    }
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
