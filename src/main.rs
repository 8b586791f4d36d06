//! logfold: collapse repeated log lines into counted runs
//!
//! Reads a log file, strips known prefixes, and writes each run of identical
//! consecutive lines once with its repeat count.

use anyhow::Result;

fn main() -> Result<()> {
    logfold::cli::run()
}
