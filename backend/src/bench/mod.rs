//! Timing harness, reporting and the benchmark driver

pub mod config;
pub mod error;
pub mod harness;
pub mod report;
pub mod suite;

pub use config::BenchmarkConfig;
pub use error::BenchmarkError;
pub use harness::{run_benchmark, ITERATIONS};
pub use report::{rank, Reporter, TimingRecord, RANKING_LABEL, SEPARATOR};
pub use suite::BenchmarkSuite;
