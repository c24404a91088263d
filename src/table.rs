//! Table module for csvslice
//!
//! This module provides the in-memory table representation that every query
//! stage reads and produces:
//!
//! - A header row of column names, kept as plain text
//! - Data rows of typed [`Cell`] values, positionally aligned with the header
//! - Column lookup by exact header name
//!
//! Tables are never mutated by query stages. Each stage builds a new table
//! with its own copy of the header.

use std::collections::HashMap;

use crate::error::{CsvSliceError, CsvSliceResult, Stage};
use crate::value::Cell;

/// Represents a row in a table
pub type Row = Vec<Cell>;

/// Represents an in-memory table
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    /// Column names, in file order
    columns: Vec<String>,

    /// Map of column names to their indices
    column_map: HashMap<String, usize>,

    /// Rows of data
    rows: Vec<Row>,
}

/// Sort direction for the `--order-by` flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Sort in ascending order (default)
    Ascending,
    /// Sort in descending order
    Descending,
}

impl SortDirection {
    /// Interpret a direction token from the command line
    ///
    /// `desc` in any letter case means descending. Every other token,
    /// including typos, is ascending.
    pub fn from_token(token: &str) -> Self {
        if token.eq_ignore_ascii_case("desc") {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        }
    }
}

impl Table {
    /// Create a new empty table with the given header
    ///
    /// If a name appears more than once in the header, lookups resolve to
    /// its first occurrence.
    pub fn new(columns: Vec<String>) -> Self {
        let mut column_map = HashMap::with_capacity(columns.len());
        for (i, name) in columns.iter().enumerate() {
            column_map.entry(name.clone()).or_insert(i);
        }

        Table {
            columns,
            column_map,
            rows: Vec::new(),
        }
    }

    /// Create a table from a header and a set of data rows
    pub fn with_rows(columns: Vec<String>, rows: Vec<Row>) -> Self {
        let mut table = Table::new(columns);
        table.rows = rows;
        table
    }

    /// Get the columns of the table
    ///
    /// The column names keep the order in which they were loaded.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get the column count
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the data rows of the table (the header is not included)
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get the data row count
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Append a data row
    ///
    /// Row width is not checked against the header; ragged CSV records are
    /// kept as they were read.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the index of a column by name
    ///
    /// # Returns
    /// * `Some(usize)` with the column index if found
    /// * `None` if no column with that name exists
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.column_map.get(name).copied()
    }

    /// Resolve a column name for a query stage
    ///
    /// # Returns
    /// * `Ok(usize)` with the column index
    /// * `Err(ColumnNotFound)` naming the column and the stage
    pub fn resolve_column(&self, name: &str, stage: Stage) -> CsvSliceResult<usize> {
        self.column_index(name)
            .ok_or_else(|| CsvSliceError::ColumnNotFound {
                column: name.to_string(),
                stage,
            })
    }

    /// Create a new table holding the data rows that match a predicate
    ///
    /// The header is copied unchanged; rows keep their relative order.
    pub fn select<F>(&self, predicate: F) -> Self
    where
        F: Fn(&Row) -> bool,
    {
        let rows = self.rows.iter().filter(|row| predicate(row)).cloned().collect();
        Table::with_rows(self.columns.clone(), rows)
    }
}
