//! CLI result presenters.

use numalgo_harness::{ResultPresenter, RunSummary, SuiteReport};

use crate::output::{format_case, format_suite_totals, format_summary, render_json};
use crate::ui::{header, print_error};

/// Human-readable presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_suite(&self, report: &SuiteReport) {
        if self.quiet {
            return;
        }

        println!();
        println!("{}", header(&format!("{} [{}]", report.label, report.prefix)));
        for case in &report.cases {
            println!("{}", format_case(case));
        }
        if self.verbose {
            println!("{}", format_suite_totals(report));
        }
    }

    fn present_summary(&self, summary: &RunSummary) {
        if !self.quiet {
            println!();
        }
        println!("{}", format_summary(summary));
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}

/// Presenter that emits the whole run as one JSON document.
pub struct JsonResultPresenter;

impl ResultPresenter for JsonResultPresenter {
    fn present_suite(&self, _report: &SuiteReport) {}

    fn present_summary(&self, summary: &RunSummary) {
        match render_json(summary) {
            Ok(json) => println!("{json}"),
            Err(e) => self.present_error(&format!("failed to serialize report: {e}")),
        }
    }

    fn present_error(&self, error: &str) {
        print_error(error);
    }
}
