use std::time::Duration;

use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

use super::console::Console;
use super::{Stream, ansi};

const TICK_INTERVAL: Duration = Duration::from_millis(80);

/// Lifecycle of one progress line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressState {
    Pending,
    Running,
    Succeeded,
    Failed,
}

impl ProgressState {
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/// Creates one progress line per linted item.
///
/// In interactive mode a spinner redraws on stdout while the item runs.
/// Otherwise no animation is drawn, but the final succeeded/failed line is
/// printed all the same.
#[derive(Debug, Clone)]
pub struct ProgressReporter {
    console: Console,
    interactive: bool,
    use_colors: bool,
}

impl ProgressReporter {
    #[must_use]
    pub const fn new(console: Console, interactive: bool, use_colors: bool) -> Self {
        Self {
            console,
            interactive,
            use_colors,
        }
    }

    /// Creates a handle for `label` in the `Pending` state.
    #[must_use]
    pub fn handle(&self, label: &str) -> ProgressHandle {
        ProgressHandle {
            bar: None,
            label: label.to_string(),
            state: ProgressState::Pending,
            animate: self.interactive && self.console.is_terminal(),
            console: self.console.clone(),
            use_colors: self.use_colors,
        }
    }

    /// Creates a handle and moves it straight to `Running`.
    #[must_use]
    pub fn start(&self, label: &str) -> ProgressHandle {
        let mut handle = self.handle(label);
        handle.start();
        handle
    }
}

/// Progress line for a single item.
///
/// Terminal states are sticky: once failed, a later `succeed` is ignored.
/// Dropping a running handle clears its spinner so it never stays on screen.
pub struct ProgressHandle {
    bar: Option<ProgressBar>,
    label: String,
    state: ProgressState,
    animate: bool,
    console: Console,
    use_colors: bool,
}

impl ProgressHandle {
    #[must_use]
    pub const fn state(&self) -> ProgressState {
        self.state
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// `Pending` → `Running`.
    ///
    /// # Panics
    ///
    /// Panics if the spinner template is invalid. The template is a
    /// compile-time constant, so this should never happen.
    pub fn start(&mut self) {
        if self.state != ProgressState::Pending {
            return;
        }
        self.state = ProgressState::Running;
        if self.animate {
            let bar = ProgressBar::with_draw_target(None, ProgressDrawTarget::stdout());
            bar.set_style(
                ProgressStyle::with_template("{spinner:.cyan} {msg}")
                    // SAFETY: Template is a static string with valid format specifiers
                    .expect("valid template"),
            );
            bar.set_message(self.label.clone());
            bar.enable_steady_tick(TICK_INTERVAL);
            self.bar = Some(bar);
        }
    }

    /// Moves to `Failed`, printing the failure header on stderr.
    ///
    /// Returns `false` if the handle had already finished.
    pub fn fail(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        if let Some(bar) = self.bar.take() {
            clear_for_diagnostics(&bar);
        }
        self.state = ProgressState::Failed;
        self.console
            .write_line(Stream::Stderr, &failed_line(&self.label, self.use_colors));
        true
    }

    /// Moves to `Succeeded`, printing the success line on stdout.
    ///
    /// Returns `false` if the handle had already finished.
    pub fn succeed(&mut self) -> bool {
        if self.state.is_terminal() {
            return false;
        }
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        self.state = ProgressState::Succeeded;
        self.console
            .write_line(Stream::Stdout, &succeeded_line(&self.label, self.use_colors));
        true
    }
}

/// Redirects the spinner to stderr, then clears it.
fn clear_for_diagnostics(bar: &ProgressBar) {
    bar.set_draw_target(ProgressDrawTarget::stderr());
    bar.finish_and_clear();
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
    }
}

/// Bold failure header, also used as the per-file marker in the replay block.
#[must_use]
pub fn failed_line(label: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}{}✖ {label}{}", ansi::BOLD, ansi::RED, ansi::RESET)
    } else {
        format!("✖ {label}")
    }
}

#[must_use]
pub fn succeeded_line(label: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}✔{} {label}", ansi::GREEN, ansi::RESET)
    } else {
        format!("✔ {label}")
    }
}

#[cfg(test)]
#[path = "progress_tests.rs"]
mod tests;
