//! droidmig CLI binary entry point.
//! Delegates to the library for discovery, analysis, and printing.

use clap::Parser;
use droidmig::analysis::run_analysis;
use droidmig::catalog::all_rules;
use droidmig::cli::{Cli, Commands};
use droidmig::config::{self, OutputMode};
use droidmig::discover::{collect_files, compile_excludes};
use droidmig::output;
use droidmig::utils::{default_log_directive, error_prefix, note_prefix};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_directive(cli.verbose)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Commands::Rules { output: mode } => {
            let mode = mode.as_deref().map(OutputMode::parse).unwrap_or_default();
            output::print_rules(all_rules(), mode)
                .map(|_| ExitCode::SUCCESS)
                .map_err(anyhow::Error::from)
        }
        Commands::Scan {
            paths,
            root,
            output: mode,
            filter,
            fail_on,
        } => scan(paths, root, mode, filter, fail_on),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", error_prefix(), e);
            ExitCode::from(2)
        }
    }
}

fn scan(
    paths: Vec<PathBuf>,
    root: Option<PathBuf>,
    mode: Option<String>,
    filter: Option<String>,
    fail_on: Option<String>,
) -> anyhow::Result<ExitCode> {
    let eff = config::resolve_effective(
        root.as_deref(),
        mode.as_deref(),
        filter.as_deref(),
        fail_on.as_deref(),
    )?;
    match &eff.config_path {
        Some(p) => tracing::debug!("using config {}", p.display()),
        None if eff.output == OutputMode::Human => {
            eprintln!("{} No droidmig.toml found; using defaults.", note_prefix())
        }
        None => {}
    }

    let excludes = compile_excludes(&eff.exclude)?;
    let files = collect_files(&eff.root, &paths, &excludes)?;
    let Some(run) = run_analysis(&files) else {
        eprintln!(
            "{} No files to analyze under {}.",
            note_prefix(),
            eff.root.display()
        );
        return Ok(ExitCode::SUCCESS);
    };

    output::print_report(&run.report_filtered(eff.filter), eff.output)?;

    if let Some(threshold) = eff.fail_on {
        if run.issues.iter().any(|is| is.severity.at_least(threshold)) {
            return Ok(ExitCode::from(1));
        }
    }
    Ok(ExitCode::SUCCESS)
}
