//! csvslice - filter, sort and aggregate a CSV file from the command line
//!
//! # Program Flow
//!
//! 1. Parse command-line arguments into an immutable configuration
//! 2. Validate the requested stages (sort and aggregate are exclusive)
//! 3. Load the CSV file into an in-memory table
//! 4. Filter, then sort or aggregate
//! 5. Print the resulting table as a grid to stdout

use anyhow::{Context, Result};
use env_logger::Env;
use log::debug;

use csvslice::cli;
use csvslice::pipeline::Pipeline;
use csvslice::render::render_table;

/// Main entry point for the csvslice utility
///
/// Any error ends the run with a message on stderr and a non-zero exit
/// status; no table is printed in that case.
fn main() -> Result<()> {
    let args = cli::parse_args()?;
    let config = args.into_config();

    let default_level = if config.verbose() { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(default_level)).init();

    debug!("Configuration: {config:?}");

    let pipeline = Pipeline::from_config(&config).context("Invalid query")?;

    let table = pipeline
        .run()
        .with_context(|| format!("Failed to process file: {}", pipeline.file().display()))?;

    println!("{}", render_table(&table));

    Ok(())
}
