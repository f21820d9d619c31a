//! Named algorithm variants, grouped by family.
//!
//! Each variant is a plain function pointer plus the largest input it is
//! trusted with. Consumers pick variants by key and call them without any
//! dynamic dispatch.

use std::fmt;

use serde::Serialize;

use crate::constants::{
    GOLDEN_RATIO_MAX_N, MAX_FIB_U64, NAIVE_POWER_MAX_EXPONENT, RECURSIVE_MAX_N, SIEVE_MAX_N,
    TRIAL_DIVISION_MAX_N,
};
use crate::{fibonacci, power, sieve};

/// Error type for registry lookups.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlgoError {
    /// No variant with this key exists in the family.
    #[error("unknown {family} algorithm: {key}")]
    UnknownAlgorithm { family: Family, key: String },
}

/// Algorithm family; one family per fixture arity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// `fn(f64, u64) -> f64`
    Power,
    /// `fn(u64) -> u64`
    Fibonacci,
    /// `fn(u64) -> usize`
    Primes,
}

impl Family {
    /// Every family, in suite order.
    pub const ALL: [Family; 3] = [Family::Power, Family::Fibonacci, Family::Primes];

    /// Lowercase name used on the command line.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Family::Power => "power",
            Family::Fibonacci => "fibonacci",
            Family::Primes => "primes",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named implementation of one family's contract.
#[derive(Debug, Clone, Copy)]
pub struct Variant<F> {
    /// Stable lookup key.
    pub key: &'static str,
    /// Human-readable label with the complexity class.
    pub label: &'static str,
    /// The implementation.
    pub func: F,
    /// Largest input (exponent or n) the variant is trusted with.
    pub limit: Option<u64>,
}

impl<F> Variant<F> {
    /// Whether `input` is inside the declared limit.
    #[must_use]
    pub fn accepts(&self, input: u64) -> bool {
        !matches!(self.limit, Some(limit) if input > limit)
    }
}

pub type PowerVariant = Variant<fn(f64, u64) -> f64>;
pub type FibonacciVariant = Variant<fn(u64) -> u64>;
pub type PrimeCountVariant = Variant<fn(u64) -> usize>;

pub static POWER_VARIANTS: [PowerVariant; 3] = [
    Variant {
        key: "iterative",
        label: "Iterative power, O(N)",
        func: power::power_iterative,
        limit: Some(NAIVE_POWER_MAX_EXPONENT),
    },
    Variant {
        key: "multiplication",
        label: "Power by squaring and multiplying, O(N/2 + log N)",
        func: power::power_multiplication,
        limit: None,
    },
    Variant {
        key: "binary",
        label: "Binary exponentiation, O(log N)",
        func: power::power,
        limit: None,
    },
];

pub static FIBONACCI_VARIANTS: [FibonacciVariant; 4] = [
    Variant {
        key: "recursive",
        label: "Recursive Fibonacci, O(2^N)",
        func: fibonacci::fib_recursive,
        limit: Some(RECURSIVE_MAX_N),
    },
    Variant {
        key: "iterative",
        label: "Iterative Fibonacci, O(N)",
        func: fibonacci::fib_iterative,
        limit: Some(MAX_FIB_U64),
    },
    Variant {
        key: "golden",
        label: "Golden ratio closed form, O(1)",
        func: fibonacci::fib_golden_ratio,
        limit: Some(GOLDEN_RATIO_MAX_N),
    },
    Variant {
        key: "matrix",
        label: "Matrix exponentiation, O(log N)",
        func: fibonacci::fib_matrix,
        limit: Some(MAX_FIB_U64),
    },
];

pub static PRIME_VARIANTS: [PrimeCountVariant; 4] = [
    Variant {
        key: "trial",
        label: "Trial division, O(N^2)",
        func: sieve::count_primes_trial_division,
        limit: Some(TRIAL_DIVISION_MAX_N),
    },
    Variant {
        key: "trial-optimized",
        label: "Trial division by known primes, O(N*sqrt(N)/ln N)",
        func: count_trial_division_optimized,
        limit: Some(SIEVE_MAX_N),
    },
    Variant {
        key: "sieve",
        label: "Sieve of Eratosthenes, O(N log log N)",
        func: count_boolean_sieve,
        limit: Some(SIEVE_MAX_N),
    },
    Variant {
        key: "bit-sieve",
        label: "Odd-only bit-packed sieve, O(N log log N)",
        func: count_bit_sieve,
        limit: Some(SIEVE_MAX_N),
    },
];

fn count_trial_division_optimized(n: u64) -> usize {
    sieve::primes_trial_division(n).len()
}

fn count_boolean_sieve(n: u64) -> usize {
    sieve::primes_boolean_sieve(n).len()
}

fn count_bit_sieve(n: u64) -> usize {
    sieve::primes_bit_sieve(n).len()
}

/// Look up a power variant by key.
pub fn power_variant(key: &str) -> Result<&'static PowerVariant, AlgoError> {
    find(&POWER_VARIANTS, Family::Power, key)
}

/// Look up a Fibonacci variant by key.
pub fn fibonacci_variant(key: &str) -> Result<&'static FibonacciVariant, AlgoError> {
    find(&FIBONACCI_VARIANTS, Family::Fibonacci, key)
}

/// Look up a prime-count variant by key.
pub fn prime_variant(key: &str) -> Result<&'static PrimeCountVariant, AlgoError> {
    find(&PRIME_VARIANTS, Family::Primes, key)
}

fn find<F>(
    variants: &'static [Variant<F>],
    family: Family,
    key: &str,
) -> Result<&'static Variant<F>, AlgoError> {
    variants
        .iter()
        .find(|v| v.key == key)
        .ok_or_else(|| AlgoError::UnknownAlgorithm {
            family,
            key: key.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_known_keys() {
        assert_eq!(power_variant("binary").unwrap().key, "binary");
        assert_eq!(power_variant("multiplication").unwrap().key, "multiplication");
        assert_eq!(fibonacci_variant("matrix").unwrap().key, "matrix");
        assert_eq!(prime_variant("bit-sieve").unwrap().key, "bit-sieve");
    }

    #[test]
    fn lookup_unknown_key() {
        let err = fibonacci_variant("fast").unwrap_err();
        assert_eq!(err.to_string(), "unknown fibonacci algorithm: fast");
    }

    #[test]
    fn keys_are_unique_per_family() {
        fn unique<F>(variants: &[Variant<F>]) -> bool {
            let mut keys: Vec<_> = variants.iter().map(|v| v.key).collect();
            keys.sort_unstable();
            keys.windows(2).all(|w| w[0] != w[1])
        }
        assert!(unique(&POWER_VARIANTS));
        assert!(unique(&FIBONACCI_VARIANTS));
        assert!(unique(&PRIME_VARIANTS));
    }

    #[test]
    fn limits() {
        let golden = fibonacci_variant("golden").unwrap();
        assert!(golden.accepts(70));
        assert!(!golden.accepts(71));
        assert!(power_variant("binary").unwrap().accepts(u64::MAX));
        for v in &PRIME_VARIANTS {
            assert!(!v.accepts(u64::MAX), "{}", v.key);
            assert!(v.accepts(10_000), "{}", v.key);
        }
    }

    #[test]
    fn every_variant_agrees_on_canonical_inputs() {
        for v in &POWER_VARIANTS {
            assert_eq!((v.func)(2.0, 10), 1024.0, "{}", v.key);
        }
        for v in &FIBONACCI_VARIANTS {
            assert_eq!((v.func)(10), 55, "{}", v.key);
        }
        for v in &PRIME_VARIANTS {
            assert_eq!((v.func)(100), 25, "{}", v.key);
        }
    }

    #[test]
    fn family_display() {
        assert_eq!(Family::Primes.to_string(), "primes");
        assert_eq!(
            serde_json::to_string(&Family::Fibonacci).unwrap(),
            "\"fibonacci\""
        );
    }
}
