use serde::{Deserialize, Serialize};

use super::harness::ITERATIONS;

/// Parameters of a benchmark run
///
/// The binary always runs with `BenchmarkConfig::default()`; nothing is
/// read from the command line or the environment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Calls made to each generator
    pub iterations: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            iterations: ITERATIONS,
        }
    }
}
