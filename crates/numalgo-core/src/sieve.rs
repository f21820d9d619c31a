//! # Sieve — prime enumeration up to a limit
//!
//! Four strategies, all pure functions of `n`:
//!
//! 1. **Trial division count** (`count_primes_trial_division`): tests every
//!    candidate against every smaller integer. O(n²), returns a count only.
//! 2. **Optimized trial division** (`primes_trial_division`): odd candidates
//!    tested only against already-found primes p with p² ≤ candidate.
//!    O(n·√n / ln n).
//! 3. **Boolean sieve** (`primes_boolean_sieve`): one flag per integer,
//!    multiples struck from i² for each i ≤ ⌊√n⌋. O(n log log n).
//! 4. **Bit-packed odd-only sieve** (`primes_bit_sieve`): one bit per odd
//!    integer in 32-bit words ([`OddBitVector`]), multiples struck from
//!    number² stepping 2·number. Same complexity, 1/16 of the boolean
//!    sieve's memory.
//!
//! The list-producing strategies return identical ascending sequences; the
//! count equals their length. Every strategy yields nothing for n < 2.

use num_integer::Roots;

use crate::bit_vector::OddBitVector;

/// Count primes ≤ n by testing each candidate against every smaller divisor.
#[must_use]
pub fn count_primes_trial_division(n: u64) -> usize {
    (2..=n)
        .filter(|&candidate| (2..candidate).all(|divisor| candidate % divisor != 0))
        .count()
}

/// Primes ≤ n by trial division against the primes found so far.
#[must_use]
pub fn primes_trial_division(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let mut primes = vec![2u64];
    for candidate in (3..=n).step_by(2) {
        let is_prime = primes
            .iter()
            .take_while(|&&p| p * p <= candidate)
            .all(|&p| candidate % p != 0);
        if is_prime {
            primes.push(candidate);
        }
    }
    primes
}

/// Primes ≤ n by the classic sieve of Eratosthenes over a boolean table.
///
/// Allocates `n + 1` flags; the registry caps `n` at
/// [`SIEVE_MAX_N`](crate::constants::SIEVE_MAX_N).
#[must_use]
pub fn primes_boolean_sieve(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let len = n as usize + 1;
    let mut is_prime = vec![true; len];
    is_prime[0] = false;
    is_prime[1] = false;

    for i in 2..=n.sqrt() as usize {
        if is_prime[i] {
            for multiple in (i * i..len).step_by(i) {
                is_prime[multiple] = false;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter_map(|(value, &flag)| flag.then_some(value as u64))
        .collect()
}

/// Primes ≤ n by a sieve that stores one bit per odd integer.
#[must_use]
pub fn primes_bit_sieve(n: u64) -> Vec<u64> {
    if n < 2 {
        return Vec::new();
    }
    let mut bits = OddBitVector::new_all_set(n);

    let mut number = 3u64;
    while number * number <= n {
        if bits.is_set(number) {
            let mut multiple = number * number;
            while multiple <= n {
                bits.clear(multiple);
                multiple += 2 * number;
            }
        }
        number += 2;
    }

    let mut primes = vec![2u64];
    primes.extend(bits.iter_set_from_three());
    primes
}
