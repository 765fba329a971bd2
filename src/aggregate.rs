//! Turns rule matches and structural findings into one ordered issue list.

use crate::matcher::{match_file, FileMatch};
use crate::models::rule::{Rule, RuleCheck};
use crate::models::Issue;
use tracing::{debug, warn};

/// Resolve one rule's matches in one file into at most one issue.
///
/// Static rules always emit their message. Conditional rules emit the message
/// their evaluator returns, or nothing when it declines. An evaluator error is
/// logged and treated as a decline for this file only.
pub fn resolve(found: &FileMatch<'_, '_>, content: &str, file: &str) -> Option<Issue> {
    let rule = found.rule;
    let message = match rule.check {
        RuleCheck::Static(msg) => msg.to_string(),
        RuleCheck::Conditional(eval) => match eval(content, &found.captures) {
            Ok(Some(msg)) if !msg.is_empty() => msg,
            Ok(_) => {
                debug!("rule '{}' suppressed for {}", rule.id, file);
                return None;
            }
            Err(e) => {
                warn!("rule '{}' failed on {}: {}; skipping", rule.id, file, e);
                return None;
            }
        },
    };
    Some(Issue {
        id: rule.id.to_string(),
        severity: rule.severity,
        title: rule.title.to_string(),
        description: rule.description.to_string(),
        message,
        file: file.to_string(),
        occurrences: found.occurrences(),
    })
}

/// Match and resolve every rule against one file, in catalog order.
pub fn file_issues(rules: &[Rule], file: &str, content: &str) -> Vec<Issue> {
    match_file(rules, content)
        .iter()
        .filter_map(|found| resolve(found, content, file))
        .collect()
}

/// Concatenate per-file issues (in file order) followed by structural findings.
///
/// No deduplication: the same rule firing in two files yields two issues.
pub fn aggregate(per_file: Vec<Vec<Issue>>, structural: Vec<Issue>) -> Vec<Issue> {
    let mut issues: Vec<Issue> = per_file.into_iter().flatten().collect();
    issues.extend(structural);
    issues
}
