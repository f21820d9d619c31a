//! # numalgo-harness
//!
//! Fixture-driven validation of algorithm variants: a fixture store, one
//! adapter per algorithm arity, the per-suite runner and the catalogue of
//! suites the driver executes.

pub mod algorithm;
pub mod fixture;
pub mod harness;
pub mod interfaces;
pub mod suites;

pub use fixture::{DirFixtureStore, FixtureError, FixtureStore, MemoryFixtureStore};
pub use harness::run;
pub use interfaces::{CaseOutcome, CaseReport, HarnessError, ResultPresenter, RunSummary, SuiteReport};
pub use suites::{run_suite, run_suites, select_suites, SuiteSpec};
