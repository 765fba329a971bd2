//! Shared data models for scan results, rules, and project structure.

pub mod rule;
pub mod structure;

use serde::Serialize;
use std::fmt;

/// File sentinel used for issues derived from the whole file set.
pub const PROJECT_STRUCTURE: &str = "Project Structure";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
/// Issue severity, used for display grouping and score weighting.
pub enum Severity {
    Critical,
    Warning,
    Info,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Whether `self` is as severe as `threshold` or more.
    pub fn at_least(self, threshold: Severity) -> bool {
        // Variants are declared most severe first.
        self <= threshold
    }

    /// Strict parse; accepts `warn` as an alias of `warning`.
    pub fn parse(s: &str) -> Option<Severity> {
        match s.trim().to_ascii_lowercase().as_str() {
            "critical" => Some(Severity::Critical),
            "warning" | "warn" => Some(Severity::Warning),
            "info" => Some(Severity::Info),
            _ => None,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(into = "String")]
/// Severity category selected for a filtered view of the issue list.
pub enum SeverityFilter {
    #[default]
    All,
    Only(Severity),
}

impl SeverityFilter {
    /// Exactly `critical`, `warning` or `info` select a severity; anything else selects `All`.
    pub fn parse(s: &str) -> SeverityFilter {
        match s {
            "critical" => SeverityFilter::Only(Severity::Critical),
            "warning" => SeverityFilter::Only(Severity::Warning),
            "info" => SeverityFilter::Only(Severity::Info),
            "all" => SeverityFilter::All,
            other => {
                tracing::debug!("unknown severity filter '{}', showing all issues", other);
                SeverityFilter::All
            }
        }
    }

    pub fn admits(self, severity: Severity) -> bool {
        match self {
            SeverityFilter::All => true,
            SeverityFilter::Only(sev) => sev == severity,
        }
    }
}

impl fmt::Display for SeverityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeverityFilter::All => f.write_str("all"),
            SeverityFilter::Only(sev) => sev.fmt(f),
        }
    }
}

impl From<SeverityFilter> for String {
    fn from(value: SeverityFilter) -> Self {
        value.to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
/// A concrete finding attached to a file, or to the project as a whole.
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub message: String,
    pub file: String,
    /// Non-overlapping pattern matches in `file`; 0 for structural issues.
    pub occurrences: usize,
}

impl Issue {
    pub fn is_structural(&self) -> bool {
        self.file == PROJECT_STRUCTURE
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Exact per-severity issue counts.
pub struct Counts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl Counts {
    pub fn of(issues: &[Issue]) -> Counts {
        let mut c = Counts::default();
        for is in issues {
            match is.severity {
                Severity::Critical => c.critical += 1,
                Severity::Warning => c.warning += 1,
                Severity::Info => c.info += 1,
            }
        }
        c
    }
}

#[derive(Debug, Clone, Serialize)]
/// Result pushed to the presentation layer after a run.
///
/// `issues` is the filtered view; counts and score always cover the full list.
pub struct Report<'a> {
    pub issue_count: usize,
    pub analyzed_file_count: usize,
    pub compatibility_score_percent: u8,
    pub score_band: crate::score::ScoreBand,
    pub counts: Counts,
    pub filter: SeverityFilter,
    pub issues: Vec<&'a Issue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_filter_parse_falls_back_to_all() {
        assert_eq!(SeverityFilter::parse("all"), SeverityFilter::All);
        assert_eq!(
            SeverityFilter::parse("critical"),
            SeverityFilter::Only(Severity::Critical)
        );
        assert_eq!(
            SeverityFilter::parse("warning"),
            SeverityFilter::Only(Severity::Warning)
        );
        assert_eq!(SeverityFilter::parse("Critical"), SeverityFilter::All);
        assert_eq!(SeverityFilter::parse("warn"), SeverityFilter::All);
        assert_eq!(SeverityFilter::parse(" info "), SeverityFilter::All);
        assert_eq!(SeverityFilter::parse("bogus"), SeverityFilter::All);
        assert_eq!(SeverityFilter::parse(""), SeverityFilter::All);
    }

    #[test]
    fn test_severity_threshold() {
        assert!(Severity::Critical.at_least(Severity::Warning));
        assert!(Severity::Warning.at_least(Severity::Warning));
        assert!(!Severity::Info.at_least(Severity::Warning));
        assert_eq!(Severity::parse("warn"), Some(Severity::Warning));
        assert_eq!(Severity::parse("never"), None);
    }

    #[test]
    fn test_filter_serializes_as_plain_string() {
        let v = serde_json::to_value(SeverityFilter::Only(Severity::Info)).unwrap();
        assert_eq!(v, "info");
        let v = serde_json::to_value(SeverityFilter::All).unwrap();
        assert_eq!(v, "all");
    }
}
