//! Headline value of every variant on its canonical input.

use numalgo_core::registry::{FIBONACCI_VARIANTS, POWER_VARIANTS, PRIME_VARIANTS};
use numalgo_core::sieve::{primes_bit_sieve, primes_boolean_sieve};

const POWER_BASE: f64 = 2.0;
const POWER_EXPONENT: u64 = 10;
const FIBONACCI_N: u64 = 10;
const PRIMES_N: u64 = 100;

/// Showcase lines, one per variant plus the sieve listings.
#[must_use]
pub fn showcase_lines() -> Vec<String> {
    let mut lines = Vec::new();

    for v in &POWER_VARIANTS {
        let value = (v.func)(POWER_BASE, POWER_EXPONENT);
        lines.push(format!("{}: {POWER_BASE}^{POWER_EXPONENT} = {value}", v.label));
    }
    for v in &FIBONACCI_VARIANTS {
        let value = (v.func)(FIBONACCI_N);
        lines.push(format!("{}: F({FIBONACCI_N}) = {value}", v.label));
    }
    for v in &PRIME_VARIANTS {
        let value = (v.func)(PRIMES_N);
        lines.push(format!("{}: {value} primes <= {PRIMES_N}", v.label));
    }

    lines.push(format!("Sieve primes <= {PRIMES_N}: {}", join(&primes_boolean_sieve(PRIMES_N))));
    lines.push(format!("Bit sieve primes <= {PRIMES_N}: {}", join(&primes_bit_sieve(PRIMES_N))));
    lines
}

/// Print the showcase to stdout.
pub fn print_showcase() {
    for line in showcase_lines() {
        println!("{line}");
    }
}

fn join(values: &[u64]) -> String {
    values
        .iter()
        .map(u64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
