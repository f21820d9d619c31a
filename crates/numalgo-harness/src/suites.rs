//! Suite catalogue and selection.
//!
//! A suite is one registry variant run over one fixture family. The default
//! sequence runs every variant of every family.

use tracing::debug;

use numalgo_core::registry::{
    fibonacci_variant, power_variant, prime_variant, Family, FIBONACCI_VARIANTS, POWER_VARIANTS,
    PRIME_VARIANTS,
};

use crate::fixture::FixtureStore;
use crate::harness;
use crate::interfaces::{HarnessError, RunSummary, SuiteReport};

/// Fixture prefix of the exponentiation family.
pub const POWER_PREFIX: &str = "3.Power";
/// Fixture prefix of the Fibonacci family.
pub const FIBONACCI_PREFIX: &str = "4.Fibo";
/// Fixture prefix of the prime-count family.
pub const PRIMES_PREFIX: &str = "5.Primes";

pub const POWER_FIXTURES: usize = 10;
pub const FIBONACCI_FIXTURES: usize = 6;
pub const PRIME_FIXTURES: usize = 8;

/// One variant run over one fixture family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuiteSpec {
    pub family: Family,
    pub variant: &'static str,
    pub prefix: &'static str,
    pub count: usize,
}

impl SuiteSpec {
    /// Suite for `variant` with the family's default prefix and fixture count.
    #[must_use]
    pub fn new(family: Family, variant: &'static str) -> Self {
        let (prefix, count) = match family {
            Family::Power => (POWER_PREFIX, POWER_FIXTURES),
            Family::Fibonacci => (FIBONACCI_PREFIX, FIBONACCI_FIXTURES),
            Family::Primes => (PRIMES_PREFIX, PRIME_FIXTURES),
        };
        Self {
            family,
            variant,
            prefix,
            count,
        }
    }
}

/// Every variant of one family, in registry order.
#[must_use]
pub fn family_suites(family: Family) -> Vec<SuiteSpec> {
    let keys: Vec<&'static str> = match family {
        Family::Power => POWER_VARIANTS.iter().map(|v| v.key).collect(),
        Family::Fibonacci => FIBONACCI_VARIANTS.iter().map(|v| v.key).collect(),
        Family::Primes => PRIME_VARIANTS.iter().map(|v| v.key).collect(),
    };
    keys.into_iter()
        .map(|key| SuiteSpec::new(family, key))
        .collect()
}

/// The full default sequence.
#[must_use]
pub fn default_suites() -> Vec<SuiteSpec> {
    Family::ALL.into_iter().flat_map(family_suites).collect()
}

/// Resolve a selection: `all`, a family name, or `family:variant`.
pub fn select_suites(selection: &str) -> Result<Vec<SuiteSpec>, HarnessError> {
    let selection = selection.trim();
    if selection == "all" {
        return Ok(default_suites());
    }

    let (family_name, variant) = match selection.split_once(':') {
        Some((family, variant)) => (family, Some(variant)),
        None => (selection, None),
    };
    let family =
        parse_family(family_name).ok_or_else(|| HarnessError::UnknownSuite(selection.to_string()))?;

    match variant {
        None => Ok(family_suites(family)),
        Some(key) => {
            let key = match family {
                Family::Power => power_variant(key)?.key,
                Family::Fibonacci => fibonacci_variant(key)?.key,
                Family::Primes => prime_variant(key)?.key,
            };
            Ok(vec![SuiteSpec::new(family, key)])
        }
    }
}

fn parse_family(name: &str) -> Option<Family> {
    match name {
        "power" | "pow" => Some(Family::Power),
        "fibonacci" | "fibo" | "fib" => Some(Family::Fibonacci),
        "primes" | "prime" | "sieve" => Some(Family::Primes),
        _ => None,
    }
}

/// Run one suite against the store.
pub fn run_suite(store: &dyn FixtureStore, spec: &SuiteSpec) -> Result<SuiteReport, HarnessError> {
    debug!(family = %spec.family, variant = spec.variant, prefix = spec.prefix, "running suite");
    let report = match spec.family {
        Family::Power => harness::run(store, spec.prefix, power_variant(spec.variant)?, spec.count),
        Family::Fibonacci => {
            harness::run(store, spec.prefix, fibonacci_variant(spec.variant)?, spec.count)
        }
        Family::Primes => harness::run(store, spec.prefix, prime_variant(spec.variant)?, spec.count),
    };
    Ok(report)
}

/// Run every suite in order and collect the reports.
pub fn run_suites(
    store: &dyn FixtureStore,
    specs: &[SuiteSpec],
) -> Result<RunSummary, HarnessError> {
    let suites = specs
        .iter()
        .map(|spec| run_suite(store, spec))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(RunSummary { suites })
}
