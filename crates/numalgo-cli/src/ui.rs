//! UI helpers for CLI display.

use console::style;

use numalgo_harness::CaseOutcome;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Styled header line.
#[must_use]
pub fn header(text: &str) -> String {
    let plain = format!("=== {text} ===");
    if is_color_disabled() {
        plain
    } else {
        style(plain).bold().cyan().to_string()
    }
}

/// Bracketed status tag for a case outcome.
#[must_use]
pub fn status_tag(outcome: &CaseOutcome) -> String {
    let (tag, styled) = match outcome {
        CaseOutcome::Passed { .. } => ("[OK]", style("[OK]").green().bold()),
        CaseOutcome::Failed { .. } => ("[FAIL]", style("[FAIL]").red().bold()),
        CaseOutcome::Skipped { .. } => ("[SKIP]", style("[SKIP]").yellow()),
        CaseOutcome::Errored { .. } => ("[ERROR]", style("[ERROR]").red()),
    };
    if is_color_disabled() {
        tag.to_string()
    } else {
        styled.to_string()
    }
}

/// Print an error message.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}
