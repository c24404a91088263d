//! Filter and sort stages
//!
//! Both operations take a table by reference and return a new table with the
//! same header. Cells are compared with the ordering defined on [`Cell`], so
//! an integer matches an equal float and text never matches a number.

use log::debug;

use crate::error::{CsvSliceResult, Stage};
use crate::table::{SortDirection, Table};
use crate::value::Cell;

/// Keep the data rows whose cell in `column` equals `value`
///
/// A row too short to have the column never matches. Zero matches is not
/// an error: the result is the header alone.
///
/// # Returns
/// * `Ok(Table)` with the matching rows in their original order
/// * `Err(ColumnNotFound)` if `column` is not in the header
pub fn filter(table: &Table, column: &str, value: &Cell) -> CsvSliceResult<Table> {
    let col_idx = table.resolve_column(column, Stage::Filter)?;

    let result = table.select(|row| row.get(col_idx) == Some(value));

    debug!(
        "Filter {}={} kept {} of {} rows",
        column,
        value,
        result.row_count(),
        table.row_count()
    );

    Ok(result)
}

/// Stable sort of the data rows by the cells in `column`
///
/// Rows with equal keys keep their relative order in both directions.
/// A row too short to have the column sorts like a no-value cell.
///
/// # Returns
/// * `Ok(Table)` with the same header and reordered rows
/// * `Err(ColumnNotFound)` if `column` is not in the header
pub fn sort(table: &Table, column: &str, direction: SortDirection) -> CsvSliceResult<Table> {
    let col_idx = table.resolve_column(column, Stage::Sort)?;

    let mut sorted_rows = table.rows().to_vec();
    sorted_rows.sort_by(|row_a, row_b| {
        let a = row_a.get(col_idx).unwrap_or(&Cell::Null);
        let b = row_b.get(col_idx).unwrap_or(&Cell::Null);
        match direction {
            SortDirection::Ascending => a.cmp(b),
            SortDirection::Descending => b.cmp(a),
        }
    });

    debug!("Sorted {} rows by {} ({:?})", sorted_rows.len(), column, direction);

    Ok(Table::with_rows(table.columns().to_vec(), sorted_rows))
}
