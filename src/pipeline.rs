//! Running the applicable checks over one file.

use std::path::Path;

use crate::checks::{
    BrowserMatrixCheck, Check, ConsistencyCheck, DescriptionCheck, LinkCheck, PrefixCheck,
    RealValueCheck, Schema, SchemaCheck, StyleCheck, VersionCheck,
};
use crate::config::Config;
use crate::error::ErrorKind;
use crate::output::DiagnosticSink;
use crate::walker::FileEntry;

/// Which set of checks a file goes through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PipelineVariant {
    /// Feature data: the full check set.
    Compat,
    /// Browser release data: schema (browser shape) and links only.
    Browsers,
}

/// Maps repository paths to their category and pipeline variant.
#[derive(Debug, Clone)]
pub struct Classifier {
    browsers_category: String,
}

impl Classifier {
    #[must_use]
    pub fn new(browsers_category: &str) -> Self {
        Self {
            browsers_category: browsers_category.to_string(),
        }
    }

    /// First component of a root-relative path; empty outside the root.
    #[must_use]
    pub fn category(relative: Option<&Path>) -> String {
        relative
            .and_then(|p| p.components().next())
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn classify(&self, category: &str) -> PipelineVariant {
        if category == self.browsers_category {
            PipelineVariant::Browsers
        } else {
            PipelineVariant::Compat
        }
    }
}

/// Result of one file's pass through its pipeline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileOutcome {
    /// A check could not evaluate the file.
    pub syntax_error: bool,
    /// Kinds of the checks that reported problems, in run order.
    pub failed: Vec<ErrorKind>,
    /// Number of checks invoked.
    pub checks_run: usize,
}

impl FileOutcome {
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.syntax_error || !self.failed.is_empty()
    }
}

/// The two ordered check sets and the logic that runs them.
pub struct CheckPipeline {
    compat: Vec<Box<dyn Check>>,
    browsers: Vec<Box<dyn Check>>,
}

impl CheckPipeline {
    #[must_use]
    pub fn new(compat: Vec<Box<dyn Check>>, browsers: Vec<Box<dyn Check>>) -> Self {
        Self { compat, browsers }
    }

    /// The standard check sets for the repository at `root`.
    #[must_use]
    pub fn standard(config: &Config, root: &Path) -> Self {
        let matrix = BrowserMatrixCheck::from_repository(
            root,
            &config.lint.browsers_category,
            &config.lint.extension,
            &config.checks.known_browsers,
        );
        let compat: Vec<Box<dyn Check>> = vec![
            Box::new(SchemaCheck::new(Schema::Compat)),
            Box::new(StyleCheck),
            Box::new(LinkCheck),
            Box::new(matrix),
            Box::new(VersionCheck),
            Box::new(ConsistencyCheck),
            Box::new(RealValueCheck::new(config.checks.real_value_browsers.clone())),
            Box::new(PrefixCheck),
            Box::new(DescriptionCheck),
        ];
        let browsers: Vec<Box<dyn Check>> = vec![
            Box::new(SchemaCheck::new(Schema::Browsers)),
            Box::new(LinkCheck),
        ];
        Self::new(compat, browsers)
    }

    #[must_use]
    pub fn checks(&self, variant: PipelineVariant) -> &[Box<dyn Check>] {
        match variant {
            PipelineVariant::Compat => &self.compat,
            PipelineVariant::Browsers => &self.browsers,
        }
    }

    /// Runs every check of the entry's variant, in order, whatever the
    /// earlier ones reported. A check that cannot evaluate the file marks
    /// a syntax error; each distinct error text is emitted once.
    pub fn run(&self, entry: &FileEntry, sink: &mut dyn DiagnosticSink) -> FileOutcome {
        let file = entry.read();
        let mut outcome = FileOutcome::default();
        let mut thrown: Vec<String> = Vec::new();

        for check in self.checks(entry.variant) {
            outcome.checks_run += 1;
            match check.check(&file) {
                Ok(problems) if problems.is_empty() => {}
                Ok(problems) => {
                    outcome.failed.push(check.kind());
                    for problem in &problems {
                        sink.emit(check.kind(), problem);
                    }
                }
                Err(err) => {
                    outcome.syntax_error = true;
                    let text = err.to_string();
                    if !thrown.contains(&text) {
                        sink.emit(ErrorKind::Syntax, &text);
                        thrown.push(text);
                    }
                }
            }
        }

        outcome
    }
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
