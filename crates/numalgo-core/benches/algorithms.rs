//! Criterion benchmarks comparing the variants of each algorithm family.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use numalgo_core::registry::{FIBONACCI_VARIANTS, POWER_VARIANTS, PRIME_VARIANTS};

fn bench_power(c: &mut Criterion) {
    let exponents: Vec<u64> = vec![1_000, 100_000, 1_000_000];

    for variant in &POWER_VARIANTS {
        let mut group = c.benchmark_group(format!("power/{}", variant.key));
        for &e in &exponents {
            group.bench_with_input(BenchmarkId::from_parameter(e), &e, |b, &e| {
                b.iter(|| (variant.func)(black_box(1.000_001), e));
            });
        }
        group.finish();
    }
}

fn bench_fibonacci(c: &mut Criterion) {
    for variant in &FIBONACCI_VARIANTS {
        let ns: &[u64] = if variant.key == "recursive" {
            &[10, 20, 25]
        } else {
            &[10, 30, 70]
        };
        let mut group = c.benchmark_group(format!("fibonacci/{}", variant.key));
        for &n in ns {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| (variant.func)(black_box(n)));
            });
        }
        group.finish();
    }
}

fn bench_primes(c: &mut Criterion) {
    let ns: Vec<u64> = vec![1_000, 10_000, 100_000];

    for variant in &PRIME_VARIANTS {
        let mut group = c.benchmark_group(format!("primes/{}", variant.key));
        for &n in ns.iter().filter(|&&n| variant.accepts(n)) {
            group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
                b.iter(|| (variant.func)(black_box(n)));
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_power, bench_fibonacci, bench_primes);
criterion_main!(benches);
