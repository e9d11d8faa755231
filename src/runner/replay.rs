//! The closing report: summary line, then every failing file's
//! diagnostics re-run without the progress gate.

use super::registry::FailureRegistry;
use crate::output::progress::failed_line;
use crate::output::{Console, DirectSink, Stream, ansi};
use crate::pipeline::CheckPipeline;
use crate::walker::TreeWalker;

pub struct ReplayReporter {
    console: Console,
    use_colors: bool,
}

impl ReplayReporter {
    #[must_use]
    pub const fn new(console: Console, use_colors: bool) -> Self {
        Self {
            console,
            use_colors,
        }
    }

    pub fn summary(&self, failed_files: usize) {
        let line = format!("Problems in {failed_files} file(s):");
        self.console.write_line(Stream::Stderr, "");
        if self.use_colors {
            self.console.write_line(
                Stream::Stderr,
                &format!("{}{}{line}{}", ansi::BOLD, ansi::RED, ansi::RESET),
            );
        } else {
            self.console.write_line(Stream::Stderr, &line);
        }
    }

    /// Re-runs each registered file through the same classification and
    /// pipeline as the live pass. Returns the number of files replayed.
    pub fn replay(
        &self,
        registry: &FailureRegistry,
        walker: &TreeWalker,
        pipeline: &CheckPipeline,
    ) -> usize {
        let mut replayed = 0;
        for (display, path) in registry.iter() {
            self.console.write_line(Stream::Stderr, "");
            self.console
                .write_line(Stream::Stderr, &failed_line(display, self.use_colors));

            let entry = walker.entry(path.to_path_buf());
            let mut sink = DirectSink::new(self.console.clone(), self.use_colors);
            pipeline.run(&entry, &mut sink);
            replayed += 1;
        }
        replayed
    }
}
