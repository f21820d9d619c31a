//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use numalgo_cli::presenter::{CLIResultPresenter, JsonResultPresenter};
use numalgo_cli::showcase::print_showcase;
use numalgo_core::constants::exit_codes;
use numalgo_harness::{run_suites, select_suites, DirFixtureStore, ResultPresenter, RunSummary};

use crate::config::{AppConfig, OutputFormat};
use crate::errors::AppError;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        numalgo_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if config.showcase && config.format == OutputFormat::Text {
        print_showcase();
    }

    let summary = run_fixture_suites(config)?;

    let presenter: Box<dyn ResultPresenter> = match config.format {
        OutputFormat::Text => Box::new(CLIResultPresenter::new(config.verbose, config.quiet)),
        OutputFormat::Json => Box::new(JsonResultPresenter),
    };
    for report in &summary.suites {
        presenter.present_suite(report);
    }
    presenter.present_summary(&summary);

    Ok(exit_code(&summary))
}

/// Resolve the selected suites and run them against the fixture directory.
pub fn run_fixture_suites(config: &AppConfig) -> Result<RunSummary> {
    if !config.fixtures.is_dir() {
        return Err(AppError::MissingFixtureDir(config.fixtures.clone()).into());
    }

    let specs = select_suites(&config.suite)?;
    info!(suites = specs.len(), fixtures = %config.fixtures.display(), "running fixture suites");

    let store = DirFixtureStore::new(&config.fixtures);
    Ok(run_suites(&store, &specs)?)
}

/// Exit code for a finished run.
#[must_use]
pub fn exit_code(summary: &RunSummary) -> i32 {
    if summary.is_success() {
        exit_codes::SUCCESS
    } else {
        exit_codes::ERROR_TEST_FAILURES
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn config(args: &[&str]) -> AppConfig {
        let mut argv = vec!["numalgo"];
        argv.extend_from_slice(args);
        AppConfig::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_fixture_dir_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent");
        let err = run_fixture_suites(&config(&["--fixtures", missing.to_str().unwrap()]))
            .unwrap_err();
        assert!(err.downcast_ref::<AppError>().is_some());
    }

    #[test]
    fn unknown_suite_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&["--fixtures", dir.path().to_str().unwrap(), "-s", "nope"]);
        assert!(run_fixture_suites(&cfg).is_err());
    }

    #[test]
    fn empty_fixture_dir_fails_the_run() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = config(&["--fixtures", dir.path().to_str().unwrap(), "-s", "fibonacci:matrix"]);
        let summary = run_fixture_suites(&cfg).unwrap();
        assert_eq!(summary.suites[0].errored(), summary.suites[0].cases.len());
        assert_eq!(exit_code(&summary), exit_codes::ERROR_TEST_FAILURES);
    }

    #[test]
    fn passing_fixtures_succeed() {
        let dir = tempfile::tempdir().unwrap();
        let fixtures = [
            (0u64, 0u64),
            (1, 1),
            (10, 55),
            (30, 832_040),
            (70, 190_392_490_709_135),
            (90, 2_880_067_194_370_816_120),
        ];
        for (i, (n, f)) in fixtures.into_iter().enumerate() {
            let write = |ext: &str, value: u64| {
                std::fs::write(
                    dir.path().join(format!("4.Fibo_test.{i}.{ext}")),
                    format!("{value}\n"),
                )
                .unwrap();
            };
            write("in", n);
            write("out", f);
        }
        let cfg = config(&["--fixtures", dir.path().to_str().unwrap(), "-s", "fibonacci"]);
        let summary = run_fixture_suites(&cfg).unwrap();
        assert!(summary.is_success(), "{summary:?}");
        assert_eq!(exit_code(&summary), exit_codes::SUCCESS);
        assert_eq!(run(&cfg).unwrap(), exit_codes::SUCCESS);
    }
}
