//! Output rendering for scan reports and the rule catalog.
//!
//! Supports `human` (default) and `json` outputs. The JSON form carries the
//! filtered issue list plus counts and score over the full list.

use crate::config::OutputMode;
use crate::models::rule::Rule;
use crate::models::{Report, Severity};
use crate::score::ScoreBand;
use crate::utils::{colors_enabled, plural_occurrences};
use owo_colors::OwoColorize;
use serde_json::json;
use serde_json::Value as JsonVal;

/// Print a scan report in the requested format.
pub fn print_report(report: &Report<'_>, output: OutputMode) -> serde_json::Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&compose_report_json(report)?)?)
        }
        OutputMode::Human => print!("{}", render_report(report, colors_enabled())),
    }
    Ok(())
}

/// Print the rule catalog in order.
pub fn print_rules(rules: &[Rule], output: OutputMode) -> serde_json::Result<()> {
    match output {
        OutputMode::Json => {
            println!("{}", serde_json::to_string_pretty(&compose_rules_json(rules))?)
        }
        OutputMode::Human => {
            let color = colors_enabled();
            for r in rules {
                let id = if color { r.id.bold().to_string() } else { r.id.to_string() };
                println!("{} {} {}", badge(r.severity, color), id, r.title);
                println!("    {}", r.description);
            }
        }
    }
    Ok(())
}

fn badge(sev: Severity, color: bool) -> String {
    let text = format!("⟦{}⟧", sev);
    if !color {
        return text;
    }
    match sev {
        Severity::Critical => text.red().bold().to_string(),
        Severity::Warning => text.yellow().bold().to_string(),
        Severity::Info => text.blue().bold().to_string(),
    }
}

fn icon(sev: Severity, color: bool) -> String {
    let glyph = match sev {
        Severity::Critical => "✖",
        Severity::Warning => "▲",
        Severity::Info => "◆",
    };
    if !color {
        return glyph.to_string();
    }
    match sev {
        Severity::Critical => glyph.red().to_string(),
        Severity::Warning => glyph.yellow().to_string(),
        Severity::Info => glyph.blue().to_string(),
    }
}

/// Human-readable report (pure) for printing and tests.
pub fn render_report(report: &Report<'_>, color: bool) -> String {
    let mut out = String::new();
    if report.issues.is_empty() {
        let headline = "No issues found";
        if color {
            out.push_str(&format!("{} {}\n", "✔".green(), headline.green().bold()));
        } else {
            out.push_str(&format!("✔ {}\n", headline));
        }
        out.push_str(
            "  No Android 15 compatibility issues were detected in the analyzed files.\n  Test thoroughly and review the migration guide before shipping.\n",
        );
    }
    for is in &report.issues {
        let file = if color { is.file.clone().bold().to_string() } else { is.file.clone() };
        let location = if is.is_structural() {
            file
        } else {
            format!("{} ({})", file, plural_occurrences(is.occurrences))
        };
        out.push_str(&format!(
            "{} {} {} ❲{}❳ {}\n",
            icon(is.severity, color),
            badge(is.severity, color),
            is.title,
            is.id,
            location
        ));
        out.push_str(&format!("    {}\n", is.description));
        out.push_str(&format!("    Recommendation: {}\n", is.message));
    }

    let score = format!("{}%", report.compatibility_score_percent);
    let score = if color {
        match report.score_band {
            ScoreBand::Good => score.green().bold().to_string(),
            ScoreBand::Fair => score.yellow().bold().to_string(),
            ScoreBand::Poor => score.red().bold().to_string(),
        }
    } else {
        score
    };
    let summary = format!(
        "— Summary — issues={} files={} critical={} warnings={} infos={} filter={}",
        report.issue_count,
        report.analyzed_file_count,
        report.counts.critical,
        report.counts.warning,
        report.counts.info,
        report.filter,
    );
    if color {
        out.push_str(&format!("{}\n", summary.bold()));
    } else {
        out.push_str(&format!("{}\n", summary));
    }
    out.push_str(&format!(
        "Compatibility score: {} ({})\n",
        score,
        report.score_band.as_str()
    ));
    out
}

/// Compose report JSON object (pure) for testing/snapshot purposes.
pub fn compose_report_json(report: &Report<'_>) -> serde_json::Result<JsonVal> {
    serde_json::to_value(report)
}

/// Compose catalog JSON array (pure).
pub fn compose_rules_json(rules: &[Rule]) -> JsonVal {
    let items: Vec<_> = rules
        .iter()
        .map(|r| {
            json!({
                "id": r.id,
                "severity": r.severity,
                "title": r.title,
                "description": r.description,
                "pattern": r.pattern.as_str(),
                "message": r.message(),
                "conditional": r.is_conditional(),
            })
        })
        .collect();
    JsonVal::Array(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::run_analysis;
    use crate::catalog::all_rules;
    use crate::models::structure::SourceFile;
    use crate::models::SeverityFilter;

    fn run() -> crate::analysis::AnalysisRun {
        run_analysis(&[
            SourceFile::new("Main.java", "onBackPressed(); onBackPressed();"),
            SourceFile::new("build.gradle", "targetSdkVersion 34"),
        ])
        .unwrap()
    }

    #[test]
    fn test_compose_report_json_shape() {
        let run = run();
        let report = run.report_filtered(SeverityFilter::Only(Severity::Critical));
        let out = compose_report_json(&report).unwrap();
        // missing_manifest + target_sdk_35 are critical; predictive_back is info.
        assert_eq!(out["issue_count"], 3);
        assert_eq!(out["analyzed_file_count"], 2);
        assert_eq!(out["compatibility_score_percent"], 100 - 50 - 2);
        assert_eq!(out["score_band"], "poor");
        assert_eq!(out["filter"], "critical");
        assert_eq!(out["counts"]["info"], 1);
        assert_eq!(out["issues"].as_array().unwrap().len(), 2);
        assert_eq!(out["issues"][0]["id"], "target_sdk_35");
        assert_eq!(out["issues"][0]["severity"], "critical");
        assert_eq!(out["issues"][1]["file"], "Project Structure");
    }

    #[test]
    fn test_render_report_plain() {
        let run = run();
        let text = render_report(&run.report(), false);
        assert!(text.contains("⟦info⟧ Predictive Back Gesture ❲predictive_back❳ Main.java (2 occurrences)"));
        assert!(text.contains("build.gradle (1 occurrence)"));
        assert!(text.contains("❲missing_manifest❳ Project Structure\n"));
        assert!(text.contains("Compatibility score: 48% (poor)"));
        assert!(!text.contains("No issues found"));
    }

    #[test]
    fn test_render_empty_view() {
        let run = run_analysis(&[
            SourceFile::new("AndroidManifest.xml", "<manifest/>"),
            SourceFile::new("build.gradle", "targetSdk = 35"),
        ])
        .unwrap();
        let text = render_report(&run.report(), false);
        assert!(text.contains("No issues found"));
        assert!(text.contains("Compatibility score: 100% (good)"));
    }

    #[test]
    fn test_compose_rules_json_in_catalog_order() {
        let out = compose_rules_json(all_rules());
        let arr = out.as_array().unwrap();
        assert_eq!(arr.len(), all_rules().len());
        assert_eq!(arr[0]["id"], "target_sdk_35");
        assert_eq!(arr[0]["conditional"], true);
        assert!(arr[0]["message"].is_null());
        assert_eq!(arr[1]["severity"], "warning");
    }
}
