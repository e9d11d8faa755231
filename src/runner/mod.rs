//! One lint run: the live pass over the targets, the global checks, and
//! the replay of every failing file.

mod registry;
mod replay;

pub use registry::{FailureRegistry, LintSummary, ResultAggregator};
pub use replay::ReplayReporter;

use std::path::{Path, PathBuf};

use crate::checks::global::{self, GlobalCheck, Repository};
use crate::config::Config;
use crate::error::Result;
use crate::output::error_output::format_note;
use crate::output::{Console, DiagnosticSink, DirectSink, GatedSink, ProgressReporter, Stream};
use crate::paths::{PathResolver, display_path};
use crate::pipeline::CheckPipeline;
use crate::walker::{FileEntry, SkipReason, TreeWalker};

/// Presentation switches for a run.
#[derive(Debug, Clone, Copy, Default)]
pub struct LintOptions {
    /// Draw progress animation (only ever on a real terminal).
    pub interactive: bool,
    pub use_colors: bool,
    /// Report skipped paths as notes.
    pub verbose: bool,
}

pub struct Linter {
    categories: Vec<PathBuf>,
    walker: TreeWalker,
    pipeline: CheckPipeline,
    globals: Vec<Box<dyn GlobalCheck>>,
    console: Console,
    options: LintOptions,
}

impl Linter {
    /// Sets up a linter for the repository at `root` with the standard
    /// checks. Display paths are relative to `invocation_dir`.
    ///
    /// # Errors
    /// Returns an error if `root` does not exist or an exclude pattern is
    /// invalid.
    pub fn new(config: &Config, root: &Path, invocation_dir: &Path) -> Result<Self> {
        let resolver = PathResolver::new(root)?;
        let pipeline = CheckPipeline::standard(config, resolver.root());
        let walker = TreeWalker::new(resolver, &config.lint, invocation_dir)?;
        Ok(Self {
            categories: config.lint.categories.iter().map(PathBuf::from).collect(),
            walker,
            pipeline,
            globals: global::standard(),
            console: Console::Terminal,
            options: LintOptions::default(),
        })
    }

    #[must_use]
    pub fn with_pipeline(mut self, pipeline: CheckPipeline) -> Self {
        self.pipeline = pipeline;
        self
    }

    #[must_use]
    pub fn with_globals(mut self, globals: Vec<Box<dyn GlobalCheck>>) -> Self {
        self.globals = globals;
        self
    }

    #[must_use]
    pub fn with_console(mut self, console: Console) -> Self {
        self.console = console;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: LintOptions) -> Self {
        self.options = options;
        self
    }

    /// Default targets: the configured category directories.
    #[must_use]
    pub fn default_targets(&self) -> &[PathBuf] {
        &self.categories
    }

    /// Lints `targets` (the categories when empty), runs the global
    /// checks, and replays every failing file.
    pub fn run(&self, targets: &[PathBuf]) -> LintSummary {
        let targets = if targets.is_empty() {
            self.default_targets()
        } else {
            targets
        };
        let reporter = ProgressReporter::new(
            self.console.clone(),
            self.options.interactive,
            self.options.use_colors,
        );
        let mut aggregator = ResultAggregator::new();

        self.walker.walk_with(
            targets,
            |entry| {
                let has_errors = self.lint_file(&reporter, entry);
                aggregator.record_file(entry, has_errors)
            },
            |path, reason| self.note_skipped(path, reason),
        );

        self.run_globals(&reporter, &mut aggregator);

        if aggregator.has_errors() {
            let replay = ReplayReporter::new(self.console.clone(), self.options.use_colors);
            replay.summary(aggregator.registry().len());
            replay.replay(aggregator.registry(), &self.walker, &self.pipeline);
        }

        aggregator.finish()
    }

    fn sink(&self) -> DirectSink {
        DirectSink::new(self.console.clone(), self.options.use_colors)
    }

    /// Live pass for one file. The gate lives only for this file, so the
    /// next file always starts with a fresh, ungated sink.
    fn lint_file(&self, reporter: &ProgressReporter, entry: &FileEntry) -> bool {
        let mut handle = reporter.start(&entry.display);
        let (outcome, fired) = {
            let mut gate = GatedSink::new(&mut handle, self.sink());
            let outcome = self.pipeline.run(entry, &mut gate);
            (outcome, gate.fired())
        };

        let has_errors = outcome.has_errors() || fired;
        if has_errors {
            handle.fail();
        } else {
            handle.succeed();
        }
        has_errors
    }

    fn run_globals(&self, reporter: &ProgressReporter, aggregator: &mut ResultAggregator) {
        let repository = Repository::new(self.walker.collect(&self.categories));

        for check in &self.globals {
            let kind = check.kind();
            let mut handle = reporter.start(kind.as_str());
            let has_errors = {
                let mut gate = GatedSink::new(&mut handle, self.sink());
                match check.check(&repository) {
                    Ok(problems) => {
                        for problem in &problems {
                            gate.emit(kind, problem);
                        }
                        !problems.is_empty()
                    }
                    Err(err) => {
                        gate.emit(kind, &err.to_string());
                        true
                    }
                }
            };

            if has_errors {
                handle.fail();
            } else {
                handle.succeed();
            }
            aggregator.record_global(kind, has_errors);
        }
    }

    fn note_skipped(&self, path: &Path, reason: SkipReason) {
        if !self.options.verbose {
            return;
        }
        let shown = display_path(path, self.walker.resolver().root());
        self.console.write_line(
            Stream::Stderr,
            &format_note(
                &format!("skipping {shown}: {}", reason.describe()),
                self.options.use_colors,
            ),
        );
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
