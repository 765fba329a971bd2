//! Analysis runs: the pipeline from input files to a scored issue list.
//!
//! Files are matched in parallel, but issues are buffered per file and
//! concatenated in input order, so the result is deterministic. Structural
//! classification runs after all files are matched.

use crate::aggregate::{aggregate, file_issues};
use crate::catalog::all_rules;
use crate::matcher::decode;
use crate::models::rule::Rule;
use crate::models::structure::{ProjectStructure, SourceFile};
use crate::models::{Counts, Issue, Report, SeverityFilter};
use crate::score::{compatibility_score, filter_by_severity, ScoreBand};
use crate::structure::{classify, is_accepted, structural_findings};
use rayon::prelude::*;
use tracing::{debug, info, warn};

#[derive(Debug, Clone)]
/// Outcome of one scan. Replaced wholesale by the next scan.
pub struct AnalysisRun {
    pub structure: ProjectStructure,
    pub issues: Vec<Issue>,
    /// Names of accepted files, in input order.
    pub analyzed_files: Vec<String>,
}

impl AnalysisRun {
    pub fn counts(&self) -> Counts {
        Counts::of(&self.issues)
    }

    pub fn score(&self) -> u8 {
        compatibility_score(&self.issues)
    }

    /// Filtered view over the full issue list; never mutates the run.
    pub fn filter_by_severity(&self, filter: SeverityFilter) -> Vec<&Issue> {
        filter_by_severity(&self.issues, filter)
    }

    /// Summary for display with the unfiltered issue list.
    pub fn report(&self) -> Report<'_> {
        self.report_filtered(SeverityFilter::All)
    }

    pub fn report_filtered(&self, filter: SeverityFilter) -> Report<'_> {
        let score = self.score();
        Report {
            issue_count: self.issues.len(),
            analyzed_file_count: self.analyzed_files.len(),
            compatibility_score_percent: score,
            score_band: ScoreBand::of(score),
            counts: self.counts(),
            filter,
            issues: self.filter_by_severity(filter),
        }
    }
}

/// Analyze `files` against the built-in catalog.
///
/// Returns `None` when `files` is empty.
pub fn run_analysis(files: &[SourceFile]) -> Option<AnalysisRun> {
    run_analysis_with(all_rules(), files)
}

/// Analyze `files` against an explicit rule set.
pub fn run_analysis_with(rules: &[Rule], files: &[SourceFile]) -> Option<AnalysisRun> {
    if files.is_empty() {
        debug!("no input files; nothing to analyze");
        return None;
    }

    let accepted: Vec<SourceFile> = files
        .iter()
        .filter(|f| {
            let ok = is_accepted(&f.name);
            if !ok {
                debug!("skipping {}: unsupported extension", f.path());
            }
            ok
        })
        .cloned()
        .collect();

    let per_file: Vec<Vec<Issue>> = accepted
        .par_iter()
        .map(|file| {
            let Some(bytes) = file.content.as_deref() else {
                warn!("{} could not be read; no rules applied", file.path());
                return Vec::new();
            };
            match decode(bytes) {
                Some(text) => file_issues(rules, &file.name, text),
                None => {
                    warn!("{} is not valid UTF-8 text; no rules applied", file.path());
                    Vec::new()
                }
            }
        })
        .collect();

    let structure = classify(&accepted);
    let structural = structural_findings(&structure);
    let issues = aggregate(per_file, structural);
    let analyzed_files: Vec<String> = accepted.into_iter().map(|f| f.name).collect();

    info!(
        "analyzed {} files ({} supplied), {} issues",
        analyzed_files.len(),
        files.len(),
        issues.len()
    );
    Some(AnalysisRun {
        structure,
        issues,
        analyzed_files,
    })
}

#[derive(Debug, Default)]
/// Holds the latest run for a presentation layer that scans repeatedly.
pub struct Analyzer {
    current: Option<AnalysisRun>,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current run with a scan of `files`.
    ///
    /// An empty `files` leaves the previous run untouched.
    pub fn scan(&mut self, files: &[SourceFile]) -> Option<&AnalysisRun> {
        if let Some(run) = run_analysis(files) {
            self.current = Some(run);
        }
        self.current.as_ref()
    }

    pub fn current(&self) -> Option<&AnalysisRun> {
        self.current.as_ref()
    }

    /// Filtered view of the current run; empty when nothing was scanned yet.
    pub fn filter_by_severity(&self, category: &str) -> Vec<&Issue> {
        match &self.current {
            Some(run) => run.filter_by_severity(SeverityFilter::parse(category)),
            None => Vec::new(),
        }
    }
}
