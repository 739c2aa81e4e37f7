//! random-u64: benchmark six ways of building a random `u64`
//!
//! Takes no arguments. Prints per-method timings and a ranking to stdout,
//! then waits for a line on stdin before exiting.

mod logging;

use std::io::{self, BufRead};

use random_u64_core::{BenchmarkConfig, BenchmarkError, BenchmarkSuite, Reporter, RngManager};
use tracing::debug;

fn main() -> Result<(), BenchmarkError> {
    logging::init_logging();

    let rng = RngManager::from_entropy();
    debug!(seed = rng.get_state(), "seeded random source");

    let mut suite = BenchmarkSuite::new(BenchmarkConfig::default(), rng);
    let mut reporter = Reporter::new(io::stdout().lock());
    suite.run(&mut reporter)?;
    drop(reporter);

    // Pause before exit; content and EOF are both fine
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;

    Ok(())
}
