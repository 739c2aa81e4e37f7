//! Benchmark driver
//!
//! Runs every [`Method`] in declaration order against one shared random
//! source, reporting each result as soon as its batch finishes.

use std::io::Write;

use tracing::{debug, info};

use super::config::BenchmarkConfig;
use super::error::BenchmarkError;
use super::harness::run_benchmark;
use super::report::{rank, Reporter, TimingRecord};
use crate::generators::Method;
use crate::rng::RandomSource;

/// All generators benchmarked against a single shared source
///
/// # Example
/// ```
/// use random_u64_core::{BenchmarkConfig, BenchmarkSuite, Reporter, RngManager};
///
/// let config = BenchmarkConfig { iterations: 10 };
/// let mut suite = BenchmarkSuite::new(config, RngManager::new(1));
/// let mut reporter = Reporter::new(Vec::new());
///
/// let records = suite.run(&mut reporter).unwrap();
/// assert_eq!(records.len(), 6);
/// ```
pub struct BenchmarkSuite<R: RandomSource> {
    config: BenchmarkConfig,
    rng: R,
}

impl<R: RandomSource> BenchmarkSuite<R> {
    pub fn new(config: BenchmarkConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Benchmark every method, print as we go, then print the ranking
    ///
    /// Returns one record per method in benchmark order.
    pub fn run<W: Write>(
        &mut self,
        reporter: &mut Reporter<W>,
    ) -> Result<Vec<TimingRecord>, BenchmarkError> {
        let iterations = self.config.iterations;
        info!(iterations, methods = Method::ALL.len(), "starting benchmark");

        reporter.banner(iterations)?;

        let mut records = Vec::with_capacity(Method::ALL.len());
        for method in Method::ALL {
            let rng = &mut self.rng;
            let elapsed_ms = run_benchmark(|| method.generate(&mut *rng), iterations);
            let record = TimingRecord::new(method, elapsed_ms);

            debug!(
                method = method.id(),
                label = %method.label(),
                elapsed_ms,
                "method finished"
            );

            reporter.method_result(&record)?;
            records.push(record);
        }

        let ranked = rank(&records);
        debug!(ranking = ?ranked, "benchmark complete");
        reporter.ranking(&ranked)?;

        Ok(records)
    }
}
