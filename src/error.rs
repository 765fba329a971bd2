//! Error types for file discovery, configuration, and rule evaluation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while collecting input files or loading configuration.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid glob pattern '{pattern}': {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("failed to parse {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

/// Failure inside a conditional rule evaluator.
///
/// Evaluator failures are local: the issue for that rule and file is skipped.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EvalError {
    #[error("capture group {group} missing in match '{matched}'")]
    MissingCapture { group: usize, matched: String },

    #[error("cannot parse '{value}' as a version number")]
    BadNumber { value: String },
}

pub type Result<T, E = ScanError> = std::result::Result<T, E>;
