//! Rule schema: a pattern plus the metadata attached to every issue it raises.
//!
//! A rule either emits a fixed recommendation whenever its pattern matches, or
//! defers to an evaluator that inspects the file and its matches and decides
//! whether (and with which message) the issue is raised.

use crate::error::EvalError;
use crate::models::Severity;
use regex::{CaptureMatches, Captures, Regex};
use std::fmt;

/// Conditional evaluator: `Ok(None)` suppresses the issue for that file.
pub type Evaluator = fn(&str, &[Captures<'_>]) -> Result<Option<String>, EvalError>;

#[derive(Clone, Copy)]
/// How a matched rule resolves into an issue message.
pub enum RuleCheck {
    /// Always emit this message verbatim.
    Static(&'static str),
    /// Ask the evaluator for a replacement message or a suppression.
    Conditional(Evaluator),
}

impl fmt::Debug for RuleCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleCheck::Static(msg) => f.debug_tuple("Static").field(msg).finish(),
            RuleCheck::Conditional(_) => f.write_str("Conditional(..)"),
        }
    }
}

#[derive(Debug)]
/// An immutable catalog entry describing one migration concern.
pub struct Rule {
    pub id: &'static str,
    pub pattern: Regex,
    pub severity: Severity,
    pub title: &'static str,
    pub description: &'static str,
    pub check: RuleCheck,
}

impl Rule {
    /// Lazily iterate all non-overlapping matches in `text`.
    ///
    /// Each call starts a fresh scan, so the sequence can be restarted freely.
    pub fn matches<'r, 't>(&'r self, text: &'t str) -> CaptureMatches<'r, 't> {
        self.pattern.captures_iter(text)
    }

    /// Static message if the rule has one.
    pub fn message(&self) -> Option<&'static str> {
        match self.check {
            RuleCheck::Static(msg) => Some(msg),
            RuleCheck::Conditional(_) => None,
        }
    }

    pub fn is_conditional(&self) -> bool {
        matches!(self.check, RuleCheck::Conditional(_))
    }
}
