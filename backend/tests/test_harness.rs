//! Tests for the timing harness and suite driver

use std::cell::Cell;

use random_u64_core::{
    run_benchmark, BenchmarkConfig, BenchmarkSuite, Method, Reporter, RngManager, ITERATIONS,
};

#[test]
fn test_generator_called_exactly_iteration_count_times() {
    let calls = Cell::new(0usize);
    run_benchmark(
        || {
            calls.set(calls.get() + 1);
            0
        },
        ITERATIONS,
    );

    assert_eq!(calls.get(), ITERATIONS);
}

#[test]
fn test_benchmark_advances_shared_source() {
    let mut rng = RngManager::new(3);
    let before = rng.get_state();

    run_benchmark(|| Method::PairConcat.generate(&mut rng), 5);

    assert_ne!(rng.get_state(), before);
}

#[test]
fn test_suite_records_one_entry_per_method_in_order() {
    let mut suite = BenchmarkSuite::new(BenchmarkConfig { iterations: 50 }, RngManager::new(9));
    let mut reporter = Reporter::new(Vec::new());

    let records = suite.run(&mut reporter).unwrap();

    assert_eq!(records.len(), Method::ALL.len());
    let methods: Vec<Method> = records.iter().map(|r| r.method).collect();
    assert_eq!(methods, Method::ALL.to_vec());
    assert!(records.iter().all(|r| r.elapsed_ms >= 0.0));
}

#[test]
fn test_suite_with_zero_iterations_still_reports_every_method() {
    let mut suite = BenchmarkSuite::new(BenchmarkConfig { iterations: 0 }, RngManager::new(9));
    let mut reporter = Reporter::new(Vec::new());

    let records = suite.run(&mut reporter).unwrap();

    assert_eq!(records.len(), 6);
    assert_eq!(suite.config().iterations, 0);
}
