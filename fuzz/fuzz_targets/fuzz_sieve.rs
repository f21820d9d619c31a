#![no_main]

use libfuzzer_sys::fuzz_target;

use numalgo_core::sieve::{primes_bit_sieve, primes_boolean_sieve};

fuzz_target!(|data: &[u8]| {
    if data.len() < 4 {
        return;
    }
    // Cap the limit for speed
    let n = u64::from(u32::from_le_bytes([data[0], data[1], data[2], data[3]])) % 100_000;

    assert_eq!(primes_bit_sieve(n), primes_boolean_sieve(n), "sieves disagree at n={n}");
});
