//! Fibonacci strategies sharing the signature `fn(u64) -> u64`.
//!
//! - [`fib_iterative`]: O(n) rolling pair, the reference for the others.
//! - [`fib_golden_ratio`]: Binet's closed form in `f64`, exact only up to
//!   [`GOLDEN_RATIO_MAX_N`](crate::constants::GOLDEN_RATIO_MAX_N).
//! - [`fib_matrix`]: Q^(n-1) by binary matrix exponentiation, O(log n).
//! - [`fib_recursive`]: O(2^n) baseline.
//!
//! Results are `u64`, so every strategy is limited to
//! n <= [`MAX_FIB_U64`](crate::constants::MAX_FIB_U64).

use crate::matrix_ops::matrix_power;
use crate::matrix_types::Matrix;

/// Compute F(n) by iterating the pair (F(k), F(k+1)).
#[must_use]
pub fn fib_iterative(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    let mut a = 0u64;
    let mut b = 1u64;
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Compute F(n) with Binet's formula, rounded to the nearest integer.
///
/// The `f64` result drifts from the true value for n > 70; this strategy
/// does not try to correct that.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub fn fib_golden_ratio(n: u64) -> u64 {
    let sqrt5 = 5f64.sqrt();
    let phi = (1.0 + sqrt5) / 2.0;
    let psi = 1.0 - phi;
    let exponent = n as f64;
    ((phi.powf(exponent) - psi.powf(exponent)) / sqrt5).round() as u64
}

/// Compute F(n) as the top-left entry of [[1,1],[1,0]]^(n-1).
///
/// # Panics
///
/// Panics if F(n) does not fit in a `u64` (n > 93).
#[must_use]
pub fn fib_matrix(n: u64) -> u64 {
    if n == 0 {
        return 0;
    }
    matrix_power(&Matrix::<u64>::fibonacci_q(), n - 1).get(0, 0)
}

/// Compute F(n) by the defining recurrence.
#[must_use]
pub fn fib_recursive(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    fib_recursive(n - 1) + fib_recursive(n - 2)
}
