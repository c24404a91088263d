//! Query pipeline for csvslice
//!
//! The pipeline sequences the optional stages of a run:
//!
//! 1. Load the CSV file into a table
//! 2. Filter (`--where`), if requested
//! 3. Sort (`--order-by`) or aggregate (`--aggregate`), never both
//!
//! Each stage consumes the previous stage's table and produces a new one.
//! The sort/aggregate exclusivity is checked when the pipeline is built,
//! before the file is touched.

use std::path::{Path, PathBuf};

use log::{debug, info};

use crate::aggregate::aggregate;
use crate::config::AppConfig;
use crate::csv_handler::load_csv;
use crate::error::{CsvSliceError, CsvSliceResult};
use crate::expression::{AggregateClause, OrderByClause, WhereClause};
use crate::query::{filter, sort};
use crate::table::Table;

/// Which of the two terminal stages runs after filtering
#[derive(Debug, Clone, PartialEq)]
pub enum FinalStage {
    /// Print the (filtered) rows as they are
    None,
    /// Sort the rows
    OrderBy(OrderByClause),
    /// Reduce a column to one value
    Aggregate(AggregateClause),
}

/// A validated query plan over one CSV file
#[derive(Debug, Clone)]
pub struct Pipeline {
    /// Input file
    file: PathBuf,
    /// Optional filter stage
    where_clause: Option<WhereClause>,
    /// Sort, aggregate or nothing
    final_stage: FinalStage,
}

impl Pipeline {
    /// Build a pipeline from the run configuration
    ///
    /// # Returns
    /// * `Ok(Pipeline)` ready to run
    /// * `Err(InvalidCombination)` if both `--order-by` and `--aggregate` are set
    /// * `Err(InvalidExpression)` if an expression lacks its `=` separator
    pub fn from_config(config: &AppConfig) -> CsvSliceResult<Self> {
        let final_stage = match (config.order_by(), config.aggregate()) {
            (Some(_), Some(_)) => return Err(CsvSliceError::InvalidCombination),
            (Some(expr), None) => FinalStage::OrderBy(OrderByClause::parse(expr)?),
            (None, Some(expr)) => FinalStage::Aggregate(AggregateClause::parse(expr)?),
            (None, None) => FinalStage::None,
        };

        let where_clause = config.where_expr().map(WhereClause::parse).transpose()?;

        Ok(Pipeline {
            file: config.file().to_path_buf(),
            where_clause,
            final_stage,
        })
    }

    /// Input file this pipeline reads
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Load the input file and run every stage over it
    pub fn run(&self) -> CsvSliceResult<Table> {
        let table = load_csv(&self.file)?;
        info!("Loaded {} rows from {}", table.row_count(), self.file.display());
        self.execute(table)
    }

    /// Run the filter and final stages over an already loaded table
    pub fn execute(&self, table: Table) -> CsvSliceResult<Table> {
        let mut result = table;

        if let Some(clause) = &self.where_clause {
            result = filter(&result, &clause.column, &clause.value)?;
        }

        result = match &self.final_stage {
            FinalStage::None => result,
            FinalStage::OrderBy(clause) => sort(&result, &clause.column, clause.direction)?,
            FinalStage::Aggregate(clause) => aggregate(&result, &clause.column, &clause.function)?,
        };

        debug!("Pipeline produced {} rows", result.row_count());
        Ok(result)
    }
}
