//! Harness errors, structured results and the presenter interface.

use std::time::Duration;

use serde::{Serialize, Serializer};

use numalgo_core::registry::{AlgoError, Family};

use crate::fixture::FixtureError;

/// Error type for the harness.
///
/// Per-case errors never escape [`crate::harness::run`]; they are recorded
/// as [`CaseOutcome::Errored`].
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// A fixture could not be retrieved.
    #[error(transparent)]
    Fixture(#[from] FixtureError),

    /// Fixture text is not in the shape or numeric type the algorithm expects.
    #[error("invalid {what}: {reason}")]
    Parse { what: &'static str, reason: String },

    /// Suite selection does not name a known family or variant.
    #[error("unknown suite: {0}")]
    UnknownSuite(String),

    /// A suite refers to a variant the registry does not know.
    #[error(transparent)]
    Algorithm(#[from] AlgoError),
}

impl HarnessError {
    /// Category used in reports.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            HarnessError::Fixture(FixtureError::NotFound(_)) => ErrorKind::FixtureMissing,
            HarnessError::Fixture(FixtureError::Read { .. }) => ErrorKind::FixtureRead,
            HarnessError::Parse { .. } => ErrorKind::Parse,
            HarnessError::UnknownSuite(_) | HarnessError::Algorithm(_) => ErrorKind::Config,
        }
    }
}

/// Category of a case that could not be evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    FixtureMissing,
    FixtureRead,
    Parse,
    Config,
}

/// Outcome of one fixture case. Values are rendered with `Display` so that
/// reports from every arity share one shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CaseOutcome {
    /// The result matched the expected value.
    Passed { actual: String },
    /// The result did not match.
    Failed {
        actual: String,
        expected: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        tolerance: Option<f64>,
    },
    /// The input lies outside the variant's declared limit.
    Skipped { reason: String },
    /// The case could not be evaluated.
    Errored { kind: ErrorKind, message: String },
}

impl CaseOutcome {
    #[must_use]
    pub fn from_error(err: &HarnessError) -> Self {
        CaseOutcome::Errored {
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Whether this outcome makes the suite unsuccessful.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Failed { .. } | CaseOutcome::Errored { .. })
    }
}

/// Outcome of the fixture pair at `index`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseReport {
    pub index: usize,
    #[serde(flatten)]
    pub outcome: CaseOutcome,
}

/// Result of running one variant over one fixture family.
#[derive(Debug, Clone, Serialize)]
pub struct SuiteReport {
    pub family: Family,
    /// Variant key.
    pub algorithm: String,
    /// Display label of the variant.
    pub label: String,
    /// Fixture name prefix.
    pub prefix: String,
    pub cases: Vec<CaseReport>,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

impl SuiteReport {
    #[must_use]
    pub fn passed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Passed { .. }))
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Failed { .. }))
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Skipped { .. }))
    }

    #[must_use]
    pub fn errored(&self) -> usize {
        self.count(|o| matches!(o, CaseOutcome::Errored { .. }))
    }

    /// True when no case failed or errored. Skipped cases are neutral.
    #[must_use]
    pub fn is_success(&self) -> bool {
        !self.cases.iter().any(|c| c.outcome.is_failure())
    }

    fn count(&self, pred: impl Fn(&CaseOutcome) -> bool) -> usize {
        self.cases.iter().filter(|c| pred(&c.outcome)).count()
    }
}

/// Reports of every suite in one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    pub suites: Vec<SuiteReport>,
}

impl RunSummary {
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.suites.iter().all(SuiteReport::is_success)
    }

    /// Total case count.
    #[must_use]
    pub fn total(&self) -> usize {
        self.suites.iter().map(|s| s.cases.len()).sum()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.suites.iter().map(SuiteReport::passed).sum()
    }

    /// Failed plus errored cases.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.suites.iter().map(|s| s.failed() + s.errored()).sum()
    }

    #[must_use]
    pub fn skipped(&self) -> usize {
        self.suites.iter().map(SuiteReport::skipped).sum()
    }
}

/// Trait for presenting results to the user.
pub trait ResultPresenter {
    /// Present one suite's report.
    fn present_suite(&self, report: &SuiteReport);

    /// Present the totals of a run.
    fn present_summary(&self, summary: &RunSummary);

    /// Present an error.
    fn present_error(&self, error: &str);
}

fn serialize_millis<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64(d.as_secs_f64() * 1000.0)
}
