//! csvslice library crate
//!
//! This is the library component of csvslice, a command-line utility that
//! loads a CSV file into memory and slices it. The library provides:
//!
//! - CSV loading with per-cell type inference (integer, float, text)
//! - Filtering rows by `column=value`
//! - Stable sorting by one column, ascending or descending
//! - Single-column aggregation (min, max, avg)
//! - A pipeline that runs these stages in order and rejects sort + aggregate
//! - Grid rendering of the result table
//!
//! Every stage returns a new table and leaves its input untouched.

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod csv_handler;
pub mod error;
pub mod expression;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod table;
pub mod value;
