//! Configuration module for csvslice
//!
//! This module provides the immutable run configuration. It is built once
//! from the command line and passed explicitly to the pipeline, so nothing
//! downstream reads process-wide state.

use std::path::{Path, PathBuf};

/// Application configuration
///
/// Holds the raw query expressions exactly as given on the command line;
/// the pipeline interprets them.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path of the CSV file to load
    file: PathBuf,

    /// `--where` expression, `column=value`
    where_expr: Option<String>,

    /// `--order-by` expression, `column=asc|desc`
    order_by: Option<String>,

    /// `--aggregate` expression, `column=min|max|avg`
    aggregate: Option<String>,

    /// Whether to show diagnostic logging
    verbose: bool,
}

impl AppConfig {
    /// Create a new application configuration
    pub fn new(
        file: PathBuf,
        where_expr: Option<String>,
        order_by: Option<String>,
        aggregate: Option<String>,
        verbose: bool,
    ) -> Self {
        Self {
            file,
            where_expr,
            order_by,
            aggregate,
            verbose,
        }
    }

    /// Get the input file path
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Get the filter expression
    pub fn where_expr(&self) -> Option<&str> {
        self.where_expr.as_deref()
    }

    /// Get the sort expression
    pub fn order_by(&self) -> Option<&str> {
        self.order_by.as_deref()
    }

    /// Get the aggregation expression
    pub fn aggregate(&self) -> Option<&str> {
        self.aggregate.as_deref()
    }

    /// Get the verbose flag
    pub fn verbose(&self) -> bool {
        self.verbose
    }
}
