//! One harness capability per algorithm arity.
//!
//! [`FixtureAlgorithm`] says how to read a fixture's input and expected
//! output, how to invoke the algorithm, and how to compare. It is
//! implemented for the registry's variant types, so any variant can be
//! handed to [`crate::harness::run`].

use std::fmt::{Debug, Display};
use std::str::FromStr;

use numalgo_core::constants::POWER_TOLERANCE;
use numalgo_core::registry::{Family, FibonacciVariant, PowerVariant, PrimeCountVariant};

use crate::interfaces::HarnessError;

/// An algorithm that can be validated against text fixtures.
pub trait FixtureAlgorithm {
    type Input: Debug;
    type Output: Display;

    /// Family the algorithm belongs to.
    fn family(&self) -> Family;

    /// Stable key of the variant.
    fn key(&self) -> &str;

    /// Display label of the variant.
    fn label(&self) -> &str;

    /// Parse normalized input text.
    fn parse_input(text: &str) -> Result<Self::Input, HarnessError>;

    /// Parse normalized expected-output text.
    fn parse_expected(text: &str) -> Result<Self::Output, HarnessError>;

    /// Reason to skip this input, if it lies outside the declared limit.
    fn skip_reason(&self, input: &Self::Input) -> Option<String>;

    fn invoke(&self, input: &Self::Input) -> Self::Output;

    /// Whether `actual` is close enough to `expected`.
    fn matches(actual: &Self::Output, expected: &Self::Output) -> bool;

    /// Absolute tolerance used by [`FixtureAlgorithm::matches`], if any.
    fn tolerance() -> Option<f64> {
        None
    }
}

/// Base and exponent of a power fixture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerInput {
    pub base: f64,
    pub exponent: u64,
}

impl FixtureAlgorithm for PowerVariant {
    type Input = PowerInput;
    type Output = f64;

    fn family(&self) -> Family {
        Family::Power
    }

    fn key(&self) -> &str {
        self.key
    }

    fn label(&self) -> &str {
        self.label
    }

    fn parse_input(text: &str) -> Result<PowerInput, HarnessError> {
        let lines: Vec<&str> = text.lines().map(str::trim).collect();
        let [base, exponent] = lines.as_slice() else {
            return Err(HarnessError::Parse {
                what: "input",
                reason: format!("expected 2 lines (base, exponent), found {}", lines.len()),
            });
        };
        Ok(PowerInput {
            base: parse_number(base, "input base")?,
            exponent: parse_number(exponent, "input exponent")?,
        })
    }

    fn parse_expected(text: &str) -> Result<f64, HarnessError> {
        parse_number(text, "expected output")
    }

    fn skip_reason(&self, input: &PowerInput) -> Option<String> {
        limit_reason(self.accepts(input.exponent), "exponent", input.exponent, self.limit)
    }

    fn invoke(&self, input: &PowerInput) -> f64 {
        (self.func)(input.base, input.exponent)
    }

    fn matches(actual: &f64, expected: &f64) -> bool {
        (actual - expected).abs() < POWER_TOLERANCE
    }

    fn tolerance() -> Option<f64> {
        Some(POWER_TOLERANCE)
    }
}

impl FixtureAlgorithm for FibonacciVariant {
    type Input = u64;
    type Output = u64;

    fn family(&self) -> Family {
        Family::Fibonacci
    }

    fn key(&self) -> &str {
        self.key
    }

    fn label(&self) -> &str {
        self.label
    }

    fn parse_input(text: &str) -> Result<u64, HarnessError> {
        parse_number(text, "input")
    }

    fn parse_expected(text: &str) -> Result<u64, HarnessError> {
        parse_number(text, "expected output")
    }

    fn skip_reason(&self, n: &u64) -> Option<String> {
        limit_reason(self.accepts(*n), "n", *n, self.limit)
    }

    fn invoke(&self, n: &u64) -> u64 {
        (self.func)(*n)
    }

    fn matches(actual: &u64, expected: &u64) -> bool {
        actual == expected
    }
}

impl FixtureAlgorithm for PrimeCountVariant {
    type Input = u64;
    type Output = usize;

    fn family(&self) -> Family {
        Family::Primes
    }

    fn key(&self) -> &str {
        self.key
    }

    fn label(&self) -> &str {
        self.label
    }

    fn parse_input(text: &str) -> Result<u64, HarnessError> {
        parse_number(text, "input")
    }

    fn parse_expected(text: &str) -> Result<usize, HarnessError> {
        parse_number(text, "expected output")
    }

    fn skip_reason(&self, n: &u64) -> Option<String> {
        limit_reason(self.accepts(*n), "n", *n, self.limit)
    }

    fn invoke(&self, n: &u64) -> usize {
        (self.func)(*n)
    }

    fn matches(actual: &usize, expected: &usize) -> bool {
        actual == expected
    }
}

fn parse_number<T>(text: &str, what: &'static str) -> Result<T, HarnessError>
where
    T: FromStr,
    T::Err: Display,
{
    let text = text.trim();
    text.parse().map_err(|e| HarnessError::Parse {
        what,
        reason: format!("{text:?}: {e}"),
    })
}

fn limit_reason(accepted: bool, name: &str, value: u64, limit: Option<u64>) -> Option<String> {
    if accepted {
        return None;
    }
    let limit = limit.map_or_else(|| "none".to_string(), |l| l.to_string());
    Some(format!("{name} = {value} exceeds variant limit {limit}"))
}
