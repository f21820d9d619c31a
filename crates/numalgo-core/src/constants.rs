//! Constants for algorithm domains, tolerances and exit codes.

/// Absolute tolerance used when comparing real-valued results.
pub const POWER_TOLERANCE: f64 = 1e-7;

/// Largest exponent the O(exponent) baseline is asked to handle.
pub const NAIVE_POWER_MAX_EXPONENT: u64 = 10_000_000;

/// Maximum Fibonacci index that fits in a u64.
/// F(93) = 12200160415121876738
pub const MAX_FIB_U64: u64 = 93;

/// Largest index for which Binet's formula in `f64` rounds to the exact value.
///
/// F(71) is the first index where the closed form drifts off by one.
pub const GOLDEN_RATIO_MAX_N: u64 = 70;

/// Largest index handed to the exponential-time recursive baseline.
pub const RECURSIVE_MAX_N: u64 = 35;

/// Largest sieve limit handed to the O(n²) trial division count.
pub const TRIAL_DIVISION_MAX_N: u64 = 10_000;

/// Largest limit handed to the sieves and the optimized trial division.
///
/// Their tables grow linearly with `n`.
pub const SIEVE_MAX_N: u64 = 100_000_000;

/// Width in bits of one word of the odd-only bit vector.
pub const BIT_WORD_WIDTH: u64 = 32;

/// Precomputed Fibonacci values for n = 0..=93.
///
/// F(94) = 19,740,274,219,868,223,167 overflows `u64::MAX`.
pub const FIB_TABLE: [u64; 94] = {
    let mut table = [0u64; 94];
    table[1] = 1;
    let mut i = 2;
    while i < 94 {
        table[i] = table[i - 1] + table[i - 2];
        i += 1;
    }
    table
};

/// Process exit codes.
pub mod exit_codes {
    /// Every suite passed.
    pub const SUCCESS: i32 = 0;
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// At least one fixture case failed or could not be evaluated.
    pub const ERROR_TEST_FAILURES: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fib_table_first_values() {
        assert_eq!(FIB_TABLE[0], 0);
        assert_eq!(FIB_TABLE[1], 1);
        assert_eq!(FIB_TABLE[2], 1);
        assert_eq!(FIB_TABLE[10], 55);
        assert_eq!(FIB_TABLE[20], 6765);
    }

    #[test]
    fn fib_table_last_value() {
        assert_eq!(FIB_TABLE[93], 12_200_160_415_121_876_738);
        assert_eq!(FIB_TABLE.len() as u64, MAX_FIB_U64 + 1);
    }

    #[test]
    fn domain_bounds_are_ordered() {
        assert!(RECURSIVE_MAX_N < GOLDEN_RATIO_MAX_N);
        assert!(GOLDEN_RATIO_MAX_N < MAX_FIB_U64);
    }
}
