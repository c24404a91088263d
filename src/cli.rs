//! CLI argument parsing module for csvslice
//!
//! This module defines the command-line interface with clap. Every query
//! flag takes a `<column>=<operand>` expression; interpretation of the
//! expressions happens later in the pipeline.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::config::AppConfig;

/// Command-line arguments for csvslice
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Filter, sort and aggregate a CSV file, printing the result as a table"
)]
pub struct CsvSliceArgs {
    /// Path to the CSV file to load
    ///
    /// The first record is the header row naming the columns.
    #[clap(short, long, default_value = "test_data.csv", help = "Path to csv-file")]
    pub file: PathBuf,

    /// Filter rows - format: column=value
    ///
    /// The value is type-inferred, so `age=30` matches the number 30
    /// and `name=Alice` matches the text Alice.
    #[clap(short, long = "where", help = "Filter by column, as column=value")]
    pub where_expr: Option<String>,

    /// Sort rows - format: column=asc|desc
    ///
    /// Any direction other than `desc` sorts ascending.
    /// Cannot be combined with --aggregate.
    #[clap(short, long, help = "Asc/desc ordering, as column=asc|desc")]
    pub order_by: Option<String>,

    /// Aggregate a column - format: column=min|max|avg
    ///
    /// Runs after --where when both are given.
    /// Cannot be combined with --order-by.
    #[clap(short, long, help = "Aggregation, as column=min|max|avg")]
    pub aggregate: Option<String>,

    /// Enable verbose diagnostic output on stderr
    #[clap(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CsvSliceArgs {
    /// Turn the parsed arguments into the run configuration
    pub fn into_config(self) -> AppConfig {
        AppConfig::new(
            self.file,
            self.where_expr,
            self.order_by,
            self.aggregate,
            self.verbose,
        )
    }
}

/// Parse command-line arguments into the CsvSliceArgs structure
///
/// # Returns
/// * `Ok(CsvSliceArgs)` - Command-line arguments successfully parsed
/// * `Err` - Error during argument parsing (handled by clap, usually results in help text display)
pub fn parse_args() -> Result<CsvSliceArgs> {
    Ok(CsvSliceArgs::parse())
}
