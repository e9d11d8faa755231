use std::io::IsTerminal;
use std::path::Path;

use clap::Parser;

use compat_lint::cli::{Cli, is_ci};
use compat_lint::config::{Config, ConfigLoader, FileConfigLoader};
use compat_lint::output::{ColorMode, ErrorOutput, Stream};
use compat_lint::EXIT_CONFIG_ERROR;
use compat_lint::runner::{LintOptions, Linter};

fn main() {
    let cli = Cli::parse();
    std::process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            let detail = std::error::Error::source(&e).map(ToString::to_string);
            ErrorOutput::new(cli.color.into()).print_error(&e.to_string(), detail.as_deref());
            EXIT_CONFIG_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> compat_lint::Result<i32> {
    let invocation_dir = std::env::current_dir()?;
    let root = cli.root.clone().unwrap_or_else(|| invocation_dir.clone());

    let config = load_config(&root, cli.config.as_deref(), cli.no_config)?;

    let color_mode: ColorMode = cli.color.into();
    let interactive =
        !is_ci(std::env::var("CI").ok().as_deref()) && std::io::stdout().is_terminal();
    let options = LintOptions {
        interactive,
        // Failure headers, diagnostics and the replay block all go to stderr.
        use_colors: color_mode.use_colors(Stream::Stderr),
        verbose: cli.verbose,
    };

    let linter = Linter::new(&config, &root, &invocation_dir)?.with_options(options);
    let summary = linter.run(&cli.files);

    Ok(summary.exit_code())
}

fn load_config(
    root: &Path,
    config_path: Option<&Path>,
    no_config: bool,
) -> compat_lint::Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(root), |path| loader.load_from_path(path))
}
