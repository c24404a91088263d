//! CSV file handling module for csvslice
//!
//! This module loads a CSV file into an in-memory [`Table`]:
//!
//! - The first record becomes the header, verbatim
//! - Every other field goes through [`infer`] independently
//! - Quoted fields keep their embedded commas and newlines
//! - Records of a different width than the header are kept as they are
//!
//! The whole file is read before any query stage runs.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use log::debug;

use crate::error::CsvSliceResult;
use crate::table::Table;
use crate::value::infer;

/// Load a CSV file into an in-memory table
///
/// The file handle is dropped when this function returns, whether parsing
/// succeeded or not.
///
/// # Returns
/// * `Ok(Table)` with the header and all data rows
/// * `Err(IoError)` if the file cannot be opened or read
/// * `Err(ParseError)` if the CSV reader rejects the framing (e.g. invalid UTF-8)
///
/// # Example
/// ```no_run
/// # use csvslice::csv_handler::load_csv;
/// # fn example() -> csvslice::error::CsvSliceResult<()> {
/// let table = load_csv("test_data.csv")?;
/// println!("Loaded {} rows", table.row_count());
/// # Ok(())
/// # }
/// ```
pub fn load_csv<P: AsRef<Path>>(path: P) -> CsvSliceResult<Table> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let table = read_csv(BufReader::new(file))?;

    debug!(
        "Loaded {} rows with {} columns from {}",
        table.row_count(),
        table.column_count(),
        path.display()
    );

    Ok(table)
}

/// Parse CSV data from any reader into a table
///
/// An empty input yields a table with no columns and no rows.
pub fn read_csv<R: Read>(reader: R) -> CsvSliceResult<Table> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()?
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>();

    let mut table = Table::new(headers);

    for result in csv_reader.records() {
        let record = result?;
        table.add_row(record.iter().map(infer).collect());
    }

    Ok(table)
}
