//! Timing records, ranking and console output
//!
//! # Output format
//!
//! ```text
//! 100000 iterations for each method.
//! --------------------------------------------
//! Running Method1()
//! Elapsed time: 12.3456 milliseconds
//! ...
//!
//! Methods in order of speed (fastest -> slowest): 5, 2, 6, 4, 3, 1
//! ```

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::error::BenchmarkError;
use crate::generators::Method;

/// Line printed before each method's result
pub const SEPARATOR: &str = "--------------------------------------------";

/// Label in front of the final ranking
pub const RANKING_LABEL: &str = "Methods in order of speed (fastest -> slowest): ";

/// Elapsed time of one method's batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimingRecord {
    pub method: Method,
    pub elapsed_ms: f64,
}

impl TimingRecord {
    pub fn new(method: Method, elapsed_ms: f64) -> Self {
        Self { method, elapsed_ms }
    }
}

/// Methods ordered from fastest to slowest
///
/// The sort is stable: equal timings keep their benchmarking order.
///
/// # Example
/// ```
/// use random_u64_core::{rank, Method, TimingRecord};
///
/// let records = [
///     TimingRecord::new(Method::Accumulate32, 9.0),
///     TimingRecord::new(Method::PairConcat, 1.5),
///     TimingRecord::new(Method::ByteArray, 1.5),
/// ];
/// assert_eq!(
///     rank(&records),
///     vec![Method::PairConcat, Method::ByteArray, Method::Accumulate32]
/// );
/// ```
pub fn rank(records: &[TimingRecord]) -> Vec<Method> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| a.elapsed_ms.total_cmp(&b.elapsed_ms));
    sorted.into_iter().map(|r| r.method).collect()
}

/// Writes benchmark progress and the ranking to `out`
pub struct Reporter<W: Write> {
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// `"<N> iterations for each method."`
    pub fn banner(&mut self, iterations: usize) -> Result<(), BenchmarkError> {
        writeln!(self.out, "{} iterations for each method.", iterations)?;
        Ok(())
    }

    /// Separator, method header and elapsed time for one record
    pub fn method_result(&mut self, record: &TimingRecord) -> Result<(), BenchmarkError> {
        writeln!(self.out, "{}", SEPARATOR)?;
        writeln!(self.out, "Running {}()", record.method)?;
        writeln!(self.out, "Elapsed time: {} milliseconds", record.elapsed_ms)?;
        Ok(())
    }

    /// Blank line, then the comma-separated ids fastest first
    pub fn ranking(&mut self, ranked: &[Method]) -> Result<(), BenchmarkError> {
        let ids: Vec<String> = ranked.iter().map(|m| m.id().to_string()).collect();

        writeln!(self.out)?;
        writeln!(self.out, "{}{}", RANKING_LABEL, ids.join(", "))?;
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
