//! Property-based tests driving the harness through a fixture directory.

use proptest::prelude::*;

use numalgo_core::constants::FIB_TABLE;
use numalgo_core::power::power;
use numalgo_harness::{run_suite, select_suites, DirFixtureStore};

fn write_pair(dir: &std::path::Path, prefix: &str, index: usize, input: &str, expected: &str) {
    std::fs::write(dir.join(format!("{prefix}_test.{index}.in")), input).unwrap();
    std::fs::write(dir.join(format!("{prefix}_test.{index}.out")), expected).unwrap();
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    /// Generated Fibonacci fixtures pass for iterative and matrix variants.
    #[test]
    fn generated_fibonacci_fixtures_pass(ns in prop::collection::vec(0u64..=93, 6)) {
        let dir = tempfile::tempdir().unwrap();
        for (i, n) in ns.iter().enumerate() {
            write_pair(dir.path(), "4.Fibo", i, &format!("{n}\n"), &FIB_TABLE[*n as usize].to_string());
        }
        let store = DirFixtureStore::new(dir.path());
        for key in ["fibonacci:iterative", "fibonacci:matrix"] {
            let spec = &select_suites(key).unwrap()[0];
            let report = run_suite(&store, spec).unwrap();
            prop_assert_eq!(report.passed(), 6, "{:?}", report.cases);
        }
    }

    /// A removed fixture only affects its own index.
    #[test]
    fn removed_fixture_is_isolated(missing in 0usize..6) {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..6 {
            if i != missing {
                write_pair(dir.path(), "4.Fibo", i, "10", "55");
            }
        }
        let store = DirFixtureStore::new(dir.path());
        let spec = &select_suites("fibonacci:matrix").unwrap()[0];
        let report = run_suite(&store, spec).unwrap();
        prop_assert_eq!(report.cases.len(), 6);
        prop_assert_eq!(report.errored(), 1);
        prop_assert_eq!(report.passed(), 5);
        prop_assert!(report.cases[missing].outcome.is_failure());
    }

    /// Power fixtures written from the binary result pass with CRLF line endings.
    #[test]
    fn generated_power_fixtures_pass(base in 0.5f64..1.5, exponent in 0u64..64) {
        let dir = tempfile::tempdir().unwrap();
        let expected = power(base, exponent);
        write_pair(dir.path(), "3.Power", 0, &format!("{base}\r\n{exponent}\r\n"), &format!("{expected}\r\n"));
        let store = DirFixtureStore::new(dir.path());
        let spec = numalgo_harness::SuiteSpec { count: 1, ..select_suites("power:binary").unwrap()[0].clone() };
        let report = run_suite(&store, &spec).unwrap();
        prop_assert_eq!(report.passed(), 1, "{:?}", report.cases);
    }
}
