//! Aggregate function module for csvslice
//!
//! This module reduces one column of a table to a single value with
//! `min`, `max` or `avg`. Only numeric cells take part; text and short rows
//! are skipped without error.

use log::debug;

use crate::error::{CsvSliceError, CsvSliceResult, Stage};
use crate::table::Table;
use crate::value::Cell;

/// Supported aggregate functions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    /// Smallest numeric value
    Min,
    /// Largest numeric value
    Max,
    /// Arithmetic mean, always a float
    Avg,
}

impl AggregateFunction {
    /// Convert a function name to an AggregateFunction
    ///
    /// Names are matched exactly: `min`, `max`, `avg`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "min" => Some(AggregateFunction::Min),
            "max" => Some(AggregateFunction::Max),
            "avg" => Some(AggregateFunction::Avg),
            _ => None,
        }
    }

    /// The function name as shown in the result table
    pub fn name(&self) -> &'static str {
        match self {
            AggregateFunction::Min => "min",
            AggregateFunction::Max => "max",
            AggregateFunction::Avg => "avg",
        }
    }

    /// Execute the aggregate function on a column of values
    ///
    /// Non-numeric cells are ignored. With no numeric cells at all the
    /// result is `Cell::Null`.
    pub fn execute(&self, values: &[Cell]) -> Cell {
        let numbers: Vec<&Cell> = values.iter().filter(|v| v.is_numeric()).collect();

        if numbers.is_empty() {
            return Cell::Null;
        }

        match self {
            AggregateFunction::Min => self.min(&numbers),
            AggregateFunction::Max => self.max(&numbers),
            AggregateFunction::Avg => self.avg(&numbers),
        }
    }

    /// First occurrence wins on ties; the cell keeps its kind
    fn min(&self, numbers: &[&Cell]) -> Cell {
        let mut min_value = numbers[0];
        for value in &numbers[1..] {
            if *value < min_value {
                min_value = *value;
            }
        }
        min_value.clone()
    }

    fn max(&self, numbers: &[&Cell]) -> Cell {
        let mut max_value = numbers[0];
        for value in &numbers[1..] {
            if *value > max_value {
                max_value = *value;
            }
        }
        max_value.clone()
    }

    fn avg(&self, numbers: &[&Cell]) -> Cell {
        let sum: f64 = numbers.iter().filter_map(|v| v.as_f64()).sum();
        Cell::Float(sum / numbers.len() as f64)
    }
}

/// Reduce `column` to a single value with the named function
///
/// The result always has two columns and one data row. The header is
/// `[<func>, "value"]` and the row is `[<func>, <result>]`, where the
/// result is `Cell::Null` if the column held no numbers.
///
/// # Returns
/// * `Ok(Table)` with the one-row result
/// * `Err(ColumnNotFound)` if `column` is not in the header
/// * `Err(UnknownAggregate)` if `func` is not `min`, `max` or `avg`
pub fn aggregate(table: &Table, column: &str, func: &str) -> CsvSliceResult<Table> {
    let col_idx = table.resolve_column(column, Stage::Aggregate)?;
    let function = AggregateFunction::from_name(func)
        .ok_or_else(|| CsvSliceError::UnknownAggregate(func.to_string()))?;

    let values: Vec<Cell> = table
        .rows()
        .iter()
        .filter_map(|row| row.get(col_idx).cloned())
        .collect();
    let result = function.execute(&values);

    debug!(
        "Aggregated {}({}) over {} rows: {:?}",
        function.name(),
        column,
        table.row_count(),
        result
    );

    let mut output = Table::new(vec![function.name().to_string(), "value".to_string()]);
    output.add_row(vec![Cell::Text(function.name().to_string()), result]);
    Ok(output)
}
