use std::fs;
use std::path::Path;

use tempfile::TempDir;

use super::*;
use crate::error::ErrorKind;

const CLEAN: &str = r#"{
  "css": {
    "properties": {
      "a": {
        "__compat": {
          "support": {
            "chrome": {
              "version_added": "1"
            }
          }
        }
      }
    }
  }
}
"#;

// Canonically formatted, but `__compat` is not the first property.
const STYLE_ERROR: &str = r#"{
  "css": {
    "properties": {
      "b": {
        "sub": {
          "__compat": {
            "support": {
              "chrome": {
                "version_added": "2"
              }
            }
          }
        },
        "__compat": {
          "support": {
            "chrome": {
              "version_added": "1"
            }
          }
        }
      }
    }
  }
}
"#;

struct ScriptedGlobal {
    kind: ErrorKind,
    problems: Vec<&'static str>,
}

impl GlobalCheck for ScriptedGlobal {
    fn kind(&self) -> ErrorKind {
        self.kind
    }

    fn check(&self, _repository: &Repository) -> Result<Vec<String>> {
        Ok(self.problems.iter().map(|p| (*p).to_string()).collect())
    }
}

fn write(root: &Path, relative: &str, text: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, text).unwrap();
}

fn linter(root: &Path, categories: &[&str]) -> (Linter, Console) {
    let mut config = Config::default();
    config.lint.categories = categories.iter().map(|c| (*c).to_string()).collect();
    let console = Console::buffer();
    let linter = Linter::new(&config, root, root)
        .unwrap()
        .with_console(console.clone())
        .with_options(LintOptions::default());
    (linter, console)
}

#[test]
fn failing_file_is_reported_live_then_replayed() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    write(dir.path(), "css/b.json", STYLE_ERROR);
    let (linter, console) = linter(dir.path(), &["css"]);

    let summary = linter.run(&[PathBuf::from("css")]);

    assert_eq!(summary.files_checked, 2);
    assert_eq!(summary.registry.len(), 1);
    let (display, path) = summary.registry.iter().next().unwrap();
    assert_eq!(display, "css/b.json");
    assert!(path.is_absolute());
    assert!(summary.global_failures.is_empty());
    assert_eq!(summary.exit_code(), 1);

    let diagnostic = "  × Style: css.properties.b: __compat must be the first property";
    let expected = format!(
        "✔ css/a.json\n✖ css/b.json\n{diagnostic}\n✔ Compare\n✔ Migrations\n✔ Format\n\
         \nProblems in 1 file(s):\n\n✖ css/b.json\n{diagnostic}\n"
    );
    assert_eq!(console.captured(), expected);
}

#[test]
fn clean_run_prints_no_summary() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    let (linter, console) = linter(dir.path(), &["css"]);

    let summary = linter.run(&[]);

    assert!(!summary.has_errors());
    assert_eq!(summary.exit_code(), 0);
    assert!(!console.captured().contains("Problems in"));
}

#[test]
fn missing_target_is_not_an_error() {
    let dir = TempDir::new().unwrap();
    let (linter, _) = linter(dir.path(), &["css"]);

    let summary = linter.run(&[PathBuf::from("css/missing.json")]);

    assert_eq!(summary.files_checked, 0);
    assert!(summary.registry.is_empty());
    assert_eq!(summary.exit_code(), 0);
}

#[test]
fn malformed_browser_file_reports_syntax_error_live_and_on_replay() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "browsers/chrome.json", "{ nope");
    let (linter, console) = linter(dir.path(), &["browsers"]);

    let summary = linter.run(&[]);

    assert!(summary.registry.contains("browsers/chrome.json"));
    assert_eq!(summary.exit_code(), 1);
    let output = console.captured();
    assert_eq!(output.matches("× Syntax: browsers/chrome.json: invalid JSON").count(), 2);
}

#[test]
fn global_failure_alone_fails_the_run() {
    let dir = TempDir::new().unwrap();
    let (linter, console) = linter(dir.path(), &["css"]);
    let linter = linter.with_globals(vec![
        Box::new(ScriptedGlobal {
            kind: ErrorKind::Compare,
            problems: Vec::new(),
        }),
        Box::new(ScriptedGlobal {
            kind: ErrorKind::Migration,
            problems: vec!["css/a.json: uses retired key 'flag'"],
        }),
    ]);

    let summary = linter.run(&[]);

    assert_eq!(summary.files_checked, 0);
    assert!(summary.registry.is_empty());
    assert_eq!(summary.global_failures, vec![ErrorKind::Migration]);
    assert_eq!(summary.exit_code(), 1);
    assert_eq!(
        console.captured(),
        "✔ Compare\n✖ Migrations\n  × Migrations: css/a.json: uses retired key 'flag'\n\
         \nProblems in 0 file(s):\n"
    );
}

#[test]
fn globals_run_once_whatever_the_file_count() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    write(dir.path(), "css/b.json", CLEAN.replace("\"a\"", "\"b\"").as_str());
    let (linter, console) = linter(dir.path(), &["css"]);

    linter.run(&[]);

    let output = console.captured();
    assert_eq!(output.matches("✔ Compare").count(), 1);
    assert_eq!(output.matches("✔ Format").count(), 1);
}

#[test]
fn globals_see_the_whole_repository_not_just_targets() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    write(dir.path(), "css/dup.json", CLEAN);
    let (linter, console) = linter(dir.path(), &["css"]);

    let summary = linter.run(&[PathBuf::from("css/a.json")]);

    assert_eq!(summary.files_checked, 1);
    assert_eq!(summary.global_failures, vec![ErrorKind::Compare]);
    assert!(
        console
            .captured()
            .contains("css.properties.a is defined in both css/a.json and css/dup.json")
    );
}

#[test]
fn interactive_mode_does_not_change_output_content() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    write(dir.path(), "css/b.json", STYLE_ERROR);

    let (plain, plain_console) = linter(dir.path(), &["css"]);
    let plain_summary = plain.run(&[]);

    let (animated, animated_console) = linter(dir.path(), &["css"]);
    let animated = animated.with_options(LintOptions {
        interactive: true,
        ..LintOptions::default()
    });
    let animated_summary = animated.run(&[]);

    assert_eq!(plain_summary, animated_summary);
    assert_eq!(plain_console.captured(), animated_console.captured());
}

#[test]
fn verbose_reports_skipped_paths() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "css/a.json", CLEAN);
    write(dir.path(), "css/notes.txt", "hello\n");
    let (linter, console) = linter(dir.path(), &["css"]);
    let linter = linter.with_options(LintOptions {
        verbose: true,
        ..LintOptions::default()
    });

    linter.run(&[PathBuf::from("css"), PathBuf::from("nope")]);

    let output = console.captured();
    assert!(output.contains("note: skipping css/notes.txt: not a data file"));
    assert!(output.contains("note: skipping nope: does not exist"));
}
