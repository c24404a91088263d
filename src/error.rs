//! Error handling for csvslice
//!
//! This module defines the error kinds that can terminate a csvslice run.
//! Every failure is terminal: there is no retry and no partial output, so
//! each variant carries enough context (stage, column or function name) for
//! the user to see what went wrong.
//!
//! The module uses thiserror to keep the variants and their messages together.

use std::fmt;

use thiserror::Error;

/// Pipeline stage that referenced a column
///
/// Used in `ColumnNotFound` so the message says which flag named the
/// missing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// `--where` filtering
    Filter,
    /// `--order-by` sorting
    Sort,
    /// `--aggregate` reduction
    Aggregate,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Filter => write!(f, "filter"),
            Stage::Sort => write!(f, "order-by"),
            Stage::Aggregate => write!(f, "aggregate"),
        }
    }
}

/// CsvSliceError represents all possible errors that can occur in csvslice
///
/// This enum covers failures during:
/// - File I/O operations
/// - CSV parsing
/// - Column resolution in query stages
/// - Argument interpretation (aggregate names, expressions, flag combinations)
#[derive(Error, Debug)]
pub enum CsvSliceError {
    /// Error during file system operations (opening/reading the input)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed CSV framing detected by the CSV reader
    #[error("CSV parsing error: {0}")]
    ParseError(csv::Error),

    /// A query stage referenced a column that is not in the header row
    #[error("Column '{column}' not found ({stage})")]
    ColumnNotFound {
        /// Column name as given on the command line
        column: String,
        /// Stage that tried to resolve it
        stage: Stage,
    },

    /// Aggregate function name is not one of min, max, avg
    #[error("Unknown aggregate function '{0}' (expected min, max or avg)")]
    UnknownAggregate(String),

    /// Both --order-by and --aggregate were requested
    #[error("Invalid combination of arguments: --order-by and --aggregate are exclusive")]
    InvalidCombination,

    /// A `column=value` argument without the `=` separator
    #[error("Invalid {flag} expression '{expression}': expected <column>=<value>")]
    InvalidExpression {
        /// Flag the expression was passed to
        flag: &'static str,
        /// The raw expression text
        expression: String,
    },
}

impl From<csv::Error> for CsvSliceError {
    /// I/O failures surfaced by the CSV reader are reported as I/O errors,
    /// everything else is a parse error.
    fn from(err: csv::Error) -> Self {
        if !err.is_io_error() {
            return CsvSliceError::ParseError(err);
        }
        match err.into_kind() {
            csv::ErrorKind::Io(io_err) => CsvSliceError::IoError(io_err),
            kind => CsvSliceError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                format!("{kind:?}"),
            )),
        }
    }
}

/// Result type alias for operations that can produce a CsvSliceError
pub type CsvSliceResult<T> = std::result::Result<T, CsvSliceError>;
