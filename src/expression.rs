//! Parsing of `<column>=<value>` arguments
//!
//! `--where`, `--order-by` and `--aggregate` all take the same shape of
//! argument. The split happens on the first `=`, so the right-hand side may
//! itself contain `=`.

use crate::error::{CsvSliceError, CsvSliceResult};
use crate::table::SortDirection;
use crate::value::{infer, Cell};

/// Split an expression into its column and operand parts
pub fn split_expression<'a>(
    flag: &'static str,
    expression: &'a str,
) -> CsvSliceResult<(&'a str, &'a str)> {
    expression
        .split_once('=')
        .ok_or_else(|| CsvSliceError::InvalidExpression {
            flag,
            expression: expression.to_string(),
        })
}

/// `--where <column>=<value>`
#[derive(Debug, Clone, PartialEq)]
pub struct WhereClause {
    /// Column to compare
    pub column: String,
    /// Value to compare against, already type-inferred
    pub value: Cell,
}

impl WhereClause {
    /// Parse a filter expression, inferring the type of the value side
    pub fn parse(expression: &str) -> CsvSliceResult<Self> {
        let (column, value) = split_expression("--where", expression)?;
        Ok(WhereClause {
            column: column.to_string(),
            value: infer(value),
        })
    }
}

/// `--order-by <column>=<asc|desc>`
#[derive(Debug, Clone, PartialEq)]
pub struct OrderByClause {
    /// Column to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl OrderByClause {
    /// Parse a sort expression; any direction other than `desc` is ascending
    pub fn parse(expression: &str) -> CsvSliceResult<Self> {
        let (column, direction) = split_expression("--order-by", expression)?;
        Ok(OrderByClause {
            column: column.to_string(),
            direction: SortDirection::from_token(direction),
        })
    }
}

/// `--aggregate <column>=<min|max|avg>`
///
/// The function name is kept as text and checked when the aggregate stage
/// runs, after the column has been resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateClause {
    /// Column to reduce
    pub column: String,
    /// Aggregate function name
    pub function: String,
}

impl AggregateClause {
    /// Parse an aggregation expression, leaving the function name unchecked
    pub fn parse(expression: &str) -> CsvSliceResult<Self> {
        let (column, function) = split_expression("--aggregate", expression)?;
        Ok(AggregateClause {
            column: column.to_string(),
            function: function.to_string(),
        })
    }
}
