//! Diagnostic sinks handed to every check invocation.
//!
//! The live pass wraps the real sink in a [`GatedSink`]: its first write
//! stops the file's progress line and prints the failure header, then the
//! detail text follows right after it. The replay pass and the global
//! checks' detail output use a [`DirectSink`].

use crate::error::ErrorKind;

use super::console::Console;
use super::progress::ProgressHandle;
use super::{Stream, ansi};

/// Receives human-readable problem descriptions.
pub trait DiagnosticSink {
    fn emit(&mut self, kind: ErrorKind, message: &str);
}

/// Writes every diagnostic straight to stderr.
#[derive(Debug, Clone)]
pub struct DirectSink {
    console: Console,
    use_colors: bool,
}

impl DirectSink {
    #[must_use]
    pub const fn new(console: Console, use_colors: bool) -> Self {
        Self {
            console,
            use_colors,
        }
    }
}

impl DiagnosticSink for DirectSink {
    fn emit(&mut self, kind: ErrorKind, message: &str) {
        self.console
            .write_line(Stream::Stderr, &format_diagnostic(kind, message, self.use_colors));
    }
}

/// Live-pass wrapper: the first write fails the progress handle before
/// forwarding, later writes pass straight through.
pub struct GatedSink<'a, S: DiagnosticSink> {
    handle: &'a mut ProgressHandle,
    inner: S,
    fired: bool,
}

impl<'a, S: DiagnosticSink> GatedSink<'a, S> {
    pub const fn new(handle: &'a mut ProgressHandle, inner: S) -> Self {
        Self {
            handle,
            inner,
            fired: false,
        }
    }

    /// Whether any diagnostic went through this gate.
    #[must_use]
    pub const fn fired(&self) -> bool {
        self.fired
    }
}

impl<S: DiagnosticSink> DiagnosticSink for GatedSink<'_, S> {
    fn emit(&mut self, kind: ErrorKind, message: &str) {
        if !self.fired {
            self.fired = true;
            self.handle.fail();
        }
        self.inner.emit(kind, message);
    }
}

/// `  × Kind: message`, continuation lines indented under the message.
#[must_use]
pub fn format_diagnostic(kind: ErrorKind, message: &str, use_colors: bool) -> String {
    let body = message.replace('\n', "\n    ");
    if use_colors {
        format!("  {}× {kind}:{} {body}", ansi::BOLD, ansi::RESET)
    } else {
        format!("  × {kind}: {body}")
    }
}

#[cfg(test)]
#[path = "sink_tests.rs"]
mod tests;
