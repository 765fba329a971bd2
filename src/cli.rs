//! CLI argument parsing via `clap`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "droidmig",
    version,
    about = "Android 15 migration scanner",
    long_about = "droidmig — scan Android project sources (Java/Kotlin/XML/Gradle) for known Android 15 migration concerns and report a compatibility score.\n\nConfiguration precedence: CLI > droidmig.toml > defaults.",
    after_help = "Examples:\n  droidmig scan\n  droidmig scan app/src --filter critical\n  droidmig scan --output json --fail-on warning\n  droidmig rules",
    arg_required_else_help = true
)]
/// Top-level CLI options and subcommands.
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
/// Supported subcommands.
pub enum Commands {
    /// Show version
    #[command(about = "Show version", long_about = "Print the current droidmig version.")]
    Version,
    /// Scan project files
    #[command(
        about = "Scan files for Android 15 migration issues",
        long_about = "Match every accepted file (.java, .kt, .xml, .gradle, .json) against the built-in rule catalog, check the project structure, and print a scored report.",
        after_help = "Examples:\n  droidmig scan --root ./MyApp\n  droidmig scan app/build.gradle app/src/main --output json"
    )]
    Scan {
        #[arg(help = "Files or directories to scan (default: project root)")]
        paths: Vec<PathBuf>,
        #[arg(long, help = "Project root (default: detected from current dir)")]
        root: Option<PathBuf>,
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
        #[arg(long, help = "Show only: all|critical|warning|info (default: all)")]
        filter: Option<String>,
        #[arg(long, help = "Exit 1 when an issue at or above this severity exists: critical|warning|info|never")]
        fail_on: Option<String>,
    },
    /// List the rule catalog
    #[command(about = "List built-in rules", long_about = "Print every rule of the catalog in evaluation order.")]
    Rules {
        #[arg(long, help = "Output mode: human|json (default: human)")]
        output: Option<String>,
    },
}
