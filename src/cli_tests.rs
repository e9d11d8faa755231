use std::path::PathBuf;

use clap::error::ErrorKind as ClapErrorKind;

use super::*;

#[test]
fn no_files_means_default_targets() {
    let cli = Cli::parse_from(["compat-lint"]);
    assert!(cli.files.is_empty());
    assert_eq!(cli.root, None);
    assert_eq!(cli.color, ColorChoice::Auto);
    assert!(!cli.verbose);
}

#[test]
fn files_after_double_dash() {
    let cli = Cli::parse_from(["compat-lint", "--", "css", "--weird.json"]);
    assert_eq!(
        cli.files,
        vec![PathBuf::from("css"), PathBuf::from("--weird.json")]
    );
}

#[test]
fn root_and_config_options() {
    let cli = Cli::parse_from([
        "compat-lint",
        "--root",
        "/data",
        "-c",
        "lint.toml",
        "--color",
        "never",
        "--verbose",
        "api",
    ]);
    assert_eq!(cli.root, Some(PathBuf::from("/data")));
    assert_eq!(cli.config, Some(PathBuf::from("lint.toml")));
    assert_eq!(cli.color, ColorChoice::Never);
    assert!(cli.verbose);
    assert_eq!(cli.files, vec![PathBuf::from("api")]);
}

#[test]
fn no_config_conflicts_with_config() {
    let result = Cli::try_parse_from(["compat-lint", "--no-config", "--config", "a.toml"]);
    assert!(result.is_err());
}

#[test]
fn short_v_prints_version() {
    let err = Cli::try_parse_from(["compat-lint", "-v"]).unwrap_err();
    assert_eq!(err.kind(), ClapErrorKind::DisplayVersion);
}

#[test]
fn question_mark_prints_help() {
    for flag in ["-h", "--help", "-?"] {
        let err = Cli::try_parse_from(["compat-lint", flag]).unwrap_err();
        assert_eq!(err.kind(), ClapErrorKind::DisplayHelp, "{flag}");
    }
}

#[test]
fn color_choice_maps_to_mode() {
    assert_eq!(ColorMode::from(ColorChoice::Auto), ColorMode::Auto);
    assert_eq!(ColorMode::from(ColorChoice::Always), ColorMode::Always);
    assert_eq!(ColorMode::from(ColorChoice::Never), ColorMode::Never);
}

#[test]
fn ci_detection() {
    assert!(is_ci(Some("1")));
    assert!(is_ci(Some("true")));
    assert!(!is_ci(Some("")));
    assert!(!is_ci(Some("0")));
    assert!(!is_ci(Some("false")));
    assert!(!is_ci(None));
}
