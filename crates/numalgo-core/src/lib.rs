//! # numalgo-core
//!
//! Progressively optimized numeric algorithms: binary exponentiation,
//! Fibonacci strategies (iterative, closed form, matrix power) and prime
//! sieves (trial division, boolean sieve, odd-only bit-packed sieve).

pub mod bit_vector;
pub mod constants;
pub mod fibonacci;
pub mod matrix_ops;
pub mod matrix_types;
pub mod power;
pub mod registry;
pub mod sieve;

// Re-exports
pub use constants::{exit_codes, FIB_TABLE, GOLDEN_RATIO_MAX_N, MAX_FIB_U64, POWER_TOLERANCE};
pub use matrix_types::{Matrix, MatrixError};
pub use registry::{
    AlgoError, Family, FibonacciVariant, PowerVariant, PrimeCountVariant, Variant,
    FIBONACCI_VARIANTS, POWER_VARIANTS, PRIME_VARIANTS,
};

/// Compute F(n) using matrix exponentiation.
///
/// # Example
/// ```
/// assert_eq!(numalgo_core::fibonacci(10), 55);
/// assert_eq!(numalgo_core::fibonacci(0), 0);
/// ```
#[must_use]
pub fn fibonacci(n: u64) -> u64 {
    fibonacci::fib_matrix(n)
}
