//! Random U64 Core - 64-bit random integer benchmark
//!
//! Compares six ways of building a `u64` from a source that natively
//! produces 32-bit signed integers, timing each over a fixed number of
//! calls and ranking them fastest first.
//!
//! # Architecture
//!
//! - **rng**: the [`RandomSource`] capability and the xorshift64* source
//! - **generators**: the six strategies and the [`Method`] list
//! - **bench**: timing harness, ranking, console reporter, suite driver
//!
//! # Critical Invariants
//!
//! 1. Generators draw only through the `RandomSource` they are handed
//! 2. One timing record per method, in declaration order
//! 3. Ranking is a stable sort on elapsed time

// Module declarations
pub mod bench;
pub mod generators;
pub mod rng;

// Re-exports for convenience
pub use bench::{
    rank, run_benchmark, BenchmarkConfig, BenchmarkError, BenchmarkSuite, Reporter,
    TimingRecord, ITERATIONS, RANKING_LABEL, SEPARATOR,
};
pub use generators::Method;
pub use rng::{RandomSource, RngManager};
