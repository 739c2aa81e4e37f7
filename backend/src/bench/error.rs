use thiserror::Error;

/// Errors that can end a benchmark run
///
/// Generators and the harness cannot fail; only console I/O can.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
