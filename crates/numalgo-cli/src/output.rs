//! CLI output formatting.

use std::time::Duration;

use numalgo_harness::{CaseOutcome, CaseReport, RunSummary, SuiteReport};

use crate::ui::status_tag;

/// Format a duration for display.
#[must_use]
#[allow(clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// One line describing a case.
#[must_use]
pub fn format_case(case: &CaseReport) -> String {
    let detail = match &case.outcome {
        CaseOutcome::Passed { actual } => actual.clone(),
        CaseOutcome::Failed {
            actual,
            expected,
            tolerance,
        } => match tolerance {
            Some(t) => format!("got {actual}, expected {expected} (tolerance {t:e})"),
            None => format!("got {actual}, expected {expected}"),
        },
        CaseOutcome::Skipped { reason } => reason.clone(),
        CaseOutcome::Errored { message, .. } => message.clone(),
    };
    format!("Test {} {} {detail}", case.index, status_tag(&case.outcome))
}

/// Counts line for one suite.
#[must_use]
pub fn format_suite_totals(report: &SuiteReport) -> String {
    format!(
        "{} passed, {} failed, {} errored, {} skipped in {}",
        report.passed(),
        report.failed(),
        report.errored(),
        report.skipped(),
        format_duration(report.elapsed)
    )
}

/// Closing line for a whole run.
#[must_use]
pub fn format_summary(summary: &RunSummary) -> String {
    let verdict = if summary.is_success() { "OK" } else { "FAILED" };
    format!(
        "{verdict}: {} suites, {} cases, {} passed, {} failed, {} skipped",
        summary.suites.len(),
        summary.total(),
        summary.passed(),
        summary.failures(),
        summary.skipped()
    )
}

/// Pretty JSON rendering of a run.
pub fn render_json(summary: &RunSummary) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summary)
}
