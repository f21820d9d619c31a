//! Real-valued exponentiation with a non-negative integer exponent.
//!
//! `power` is binary exponentiation (square-and-multiply, least significant
//! bit first) and needs O(log e) multiplications. `power_multiplication` is
//! the earlier square-and-multiply form that returns early on a zero exponent
//! and squares the base on every step, including the last. `power_iterative`
//! is the O(e) baseline both are checked against.
//!
//! Rounding error grows with the number of multiplications, so results must
//! be compared with [`POWER_TOLERANCE`](crate::constants::POWER_TOLERANCE)
//! rather than bit for bit.

/// Compute `base^exponent` by binary exponentiation.
///
/// `exponent == 0` yields exactly `1.0`, including for a zero base.
///
/// # Example
/// ```
/// assert_eq!(numalgo_core::power::power(2.0, 10), 1024.0);
/// assert_eq!(numalgo_core::power::power(0.0, 0), 1.0);
/// ```
#[must_use]
pub fn power(base: f64, exponent: u64) -> f64 {
    let mut result = 1.0;
    let mut base = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining & 1 == 1 {
            result *= base;
        }
        remaining >>= 1;
        if remaining > 0 {
            base *= base;
        }
    }

    result
}

/// Compute `base^exponent` by square-and-multiply, squaring unconditionally.
///
/// Produces the same value as [`power`]; the trailing square is discarded.
#[must_use]
pub fn power_multiplication(base: f64, exponent: u64) -> f64 {
    if exponent == 0 {
        return 1.0;
    }
    let mut result = 1.0;
    let mut base = base;
    let mut remaining = exponent;

    while remaining > 0 {
        if remaining % 2 == 1 {
            result *= base;
        }
        base *= base;
        remaining /= 2;
    }

    result
}

/// Compute `base^exponent` with one multiplication per unit of exponent.
#[must_use]
pub fn power_iterative(base: f64, exponent: u64) -> f64 {
    let mut result = 1.0;
    for _ in 0..exponent {
        result *= base;
    }
    result
}
