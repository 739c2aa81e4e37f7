//! Timing harness

use std::hint::black_box;
use std::time::Instant;

/// Fixed number of calls made to every generator
pub const ITERATIONS: usize = 100_000;

/// Call `generator` exactly `iterations` times and return the elapsed wall
/// time in fractional milliseconds.
///
/// Results are discarded through [`black_box`] so the calls are not
/// optimised away.
///
/// # Example
/// ```
/// use random_u64_core::run_benchmark;
///
/// let mut calls = 0;
/// let elapsed = run_benchmark(|| { calls += 1; 7 }, 10);
/// assert_eq!(calls, 10);
/// assert!(elapsed >= 0.0);
/// ```
pub fn run_benchmark<F>(mut generator: F, iterations: usize) -> f64
where
    F: FnMut() -> u64,
{
    let start = Instant::now();

    for _ in 0..iterations {
        black_box(generator());
    }

    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_iterations_never_calls() {
        let mut calls = 0;
        run_benchmark(
            || {
                calls += 1;
                0
            },
            0,
        );
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_elapsed_is_non_negative() {
        let elapsed = run_benchmark(|| 1, 1000);
        assert!(elapsed >= 0.0);
    }
}
