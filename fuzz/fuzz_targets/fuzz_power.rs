#![no_main]

use libfuzzer_sys::fuzz_target;

use numalgo_core::power::{power, power_iterative, power_multiplication};

fuzz_target!(|data: &[u8]| {
    if data.len() < 10 {
        return;
    }
    let base = f64::from_le_bytes([
        data[0], data[1], data[2], data[3], data[4], data[5], data[6], data[7],
    ]);
    if !base.is_finite() {
        return;
    }
    let exponent = u64::from(u16::from_le_bytes([data[8], data[9]]));

    // Should not panic; both strategies agree on exact cases
    let fast = power(base, exponent);
    let slow = power_iterative(base, exponent);
    // Same multiplications into the result; only the discarded square differs
    assert_eq!(power_multiplication(base, exponent).to_bits(), fast.to_bits());
    if exponent == 0 {
        assert_eq!(fast, 1.0);
        assert_eq!(slow, 1.0);
    }
    if base == 0.0 && exponent > 0 {
        assert_eq!(fast, 0.0);
    }
});
