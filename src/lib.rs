//! droidmig core library.
//!
//! Scans Android project sources against a fixed catalog of regex rules
//! describing Android 15 migration concerns and produces a scored report.
//!
//! High-level modules:
//! - `catalog`: The built-in, ordered rule catalog.
//! - `matcher`: Per-file rule matching with occurrence counts.
//! - `structure`: File acceptance and project-structure findings.
//! - `aggregate`: Rule resolution (static or conditional) into issues.
//! - `score`: Compatibility score and severity filtering.
//! - `analysis`: Analysis runs tying the pipeline together.
//! - `discover`: Collecting files from disk for the CLI.
//! - `config`: Discovery and effective configuration resolution.
//! - `models`: Data models for rules, issues, and project structure.
//! - `output`: Human/JSON printers.
//! - `cli`: CLI argument parsing (binary uses this).
pub mod aggregate;
pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod discover;
pub mod error;
pub mod matcher;
pub mod models;
pub mod output;
pub mod score;
pub mod structure;
pub mod utils;

pub use analysis::{run_analysis, AnalysisRun, Analyzer};
pub use error::{EvalError, ScanError};
pub use models::structure::SourceFile;
pub use models::{Issue, Report, Severity, SeverityFilter};
