//! Command dispatch logic for searchlab

use std::time::Instant;

use searchlab_core::error::Result;
use tracing::debug;

mod run;

use crate::cli::Cli;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    // The binary has a single command: run the full suite.
    let result = run::run_all_algorithms(cli);
    debug!(elapsed = ?start.elapsed(), "run_all_algorithms");
    result
}
