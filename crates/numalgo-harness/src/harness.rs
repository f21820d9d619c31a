//! The fixture-driven runner.
//!
//! For each index in `0..count` the runner fetches the fixture pair, parses
//! it for the algorithm's arity, invokes the algorithm and records an outcome.
//! A case that cannot be evaluated is recorded and the runner moves on to the
//! next index; nothing escapes the per-case boundary.

use std::time::Instant;

use tracing::{debug, info, warn};

use crate::algorithm::FixtureAlgorithm;
use crate::fixture::{fixture_name, FixtureKind, FixtureStore};
use crate::interfaces::{CaseOutcome, CaseReport, HarnessError, SuiteReport};

/// Run `algorithm` over the fixtures `{prefix}_test.{0..count}`.
pub fn run<A: FixtureAlgorithm>(
    store: &dyn FixtureStore,
    prefix: &str,
    algorithm: &A,
    count: usize,
) -> SuiteReport {
    let start = Instant::now();

    let cases = (0..count)
        .map(|index| CaseReport {
            index,
            outcome: run_case(store, prefix, algorithm, index),
        })
        .collect();

    let report = SuiteReport {
        family: algorithm.family(),
        algorithm: algorithm.key().to_string(),
        label: algorithm.label().to_string(),
        prefix: prefix.to_string(),
        cases,
        elapsed: start.elapsed(),
    };

    info!(
        algorithm = %report.algorithm,
        prefix,
        passed = report.passed(),
        failed = report.failed(),
        skipped = report.skipped(),
        errored = report.errored(),
        "suite finished"
    );

    report
}

fn run_case<A: FixtureAlgorithm>(
    store: &dyn FixtureStore,
    prefix: &str,
    algorithm: &A,
    index: usize,
) -> CaseOutcome {
    let outcome = evaluate(store, prefix, algorithm, index)
        .unwrap_or_else(|err| CaseOutcome::from_error(&err));

    let key = algorithm.key();
    match &outcome {
        CaseOutcome::Passed { actual } => {
            debug!(algorithm = key, prefix, index, %actual, "case passed");
        }
        CaseOutcome::Failed { actual, expected, .. } => {
            warn!(algorithm = key, prefix, index, %actual, %expected, "case failed");
        }
        CaseOutcome::Skipped { reason } => {
            debug!(algorithm = key, prefix, index, %reason, "case skipped");
        }
        CaseOutcome::Errored { message, .. } => {
            warn!(algorithm = key, prefix, index, error = %message, "case not evaluated");
        }
    }
    outcome
}

fn evaluate<A: FixtureAlgorithm>(
    store: &dyn FixtureStore,
    prefix: &str,
    algorithm: &A,
    index: usize,
) -> Result<CaseOutcome, HarnessError> {
    let input = store.resolve(&fixture_name(prefix, index, FixtureKind::Input))?;
    let expected = store.resolve(&fixture_name(prefix, index, FixtureKind::Expected))?;

    let input = A::parse_input(&normalize(&input))?;
    let expected = A::parse_expected(&normalize(&expected))?;

    if let Some(reason) = algorithm.skip_reason(&input) {
        return Ok(CaseOutcome::Skipped { reason });
    }

    let actual = algorithm.invoke(&input);
    if A::matches(&actual, &expected) {
        Ok(CaseOutcome::Passed {
            actual: actual.to_string(),
        })
    } else {
        Ok(CaseOutcome::Failed {
            actual: actual.to_string(),
            expected: expected.to_string(),
            tolerance: A::tolerance(),
        })
    }
}

/// Unify line endings to `\n` and trim surrounding whitespace.
#[must_use]
pub fn normalize(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n").trim().to_string()
}
