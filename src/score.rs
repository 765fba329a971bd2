//! Compatibility scoring and severity filtering.

use crate::models::{Counts, Issue, SeverityFilter};
use serde::Serialize;

pub const CRITICAL_PENALTY: i64 = 25;
pub const WARNING_PENALTY: i64 = 10;
pub const INFO_PENALTY: i64 = 2;

/// `100 - 25c - 10w - 2i`, clamped to `0..=100`.
pub fn compatibility_score(issues: &[Issue]) -> u8 {
    score_from_counts(Counts::of(issues))
}

pub fn score_from_counts(c: Counts) -> u8 {
    let penalty = CRITICAL_PENALTY * c.critical as i64
        + WARNING_PENALTY * c.warning as i64
        + INFO_PENALTY * c.info as i64;
    (100 - penalty).clamp(0, 100) as u8
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
/// Coarse rating of a score for display.
pub enum ScoreBand {
    Good,
    Fair,
    Poor,
}

impl ScoreBand {
    pub fn of(score: u8) -> ScoreBand {
        match score {
            80..=u8::MAX => ScoreBand::Good,
            60..=79 => ScoreBand::Fair,
            _ => ScoreBand::Poor,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBand::Good => "good",
            ScoreBand::Fair => "fair",
            ScoreBand::Poor => "poor",
        }
    }
}

/// Issues admitted by `filter`, in their original order.
pub fn filter_by_severity(issues: &[Issue], filter: SeverityFilter) -> Vec<&Issue> {
    issues.iter().filter(|is| filter.admits(is.severity)).collect()
}
