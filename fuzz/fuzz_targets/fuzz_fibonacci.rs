#![no_main]

use libfuzzer_sys::fuzz_target;

use numalgo_core::constants::{FIB_TABLE, GOLDEN_RATIO_MAX_N};
use numalgo_core::fibonacci::{fib_golden_ratio, fib_iterative, fib_matrix};

fuzz_target!(|data: &[u8]| {
    let Some(&byte) = data.first() else {
        return;
    };
    // Largest F(n) that fits in u64 is F(93)
    let n = u64::from(byte) % 94;

    let expected = FIB_TABLE[n as usize];
    assert_eq!(fib_iterative(n), expected, "iterative mismatch at n={n}");
    assert_eq!(fib_matrix(n), expected, "matrix mismatch at n={n}");
    if n <= GOLDEN_RATIO_MAX_N {
        assert_eq!(fib_golden_ratio(n), expected, "golden ratio mismatch at n={n}");
    }
});
