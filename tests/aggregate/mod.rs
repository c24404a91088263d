//! End-to-end tests for --aggregate

use crate::helpers::{run_and_collect_rows, PEOPLE_CSV};

#[test]
fn test_avg_after_filter() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["--where", "age=30", "--aggregate", "age=avg"])?;
    assert_eq!(rows, vec![vec!["avg", "value"], vec!["avg", "30.0"]]);
    Ok(())
}

#[test]
fn test_min_and_max() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-a", "age=min"])?;
    assert_eq!(rows[1], vec!["min", "25"]);

    let rows = run_and_collect_rows(PEOPLE_CSV, &["-a", "age=max"])?;
    assert_eq!(rows[1], vec!["max", "30"]);
    Ok(())
}

#[test]
fn test_avg_ignores_non_numeric_cells() -> Result<(), Box<dyn std::error::Error>> {
    let csv = "item,price\npen,1.5\ncup,N/A\nmug,2.5\n";
    let rows = run_and_collect_rows(csv, &["-a", "price=avg"])?;
    assert_eq!(rows[1], vec!["avg", "2.0"]);
    Ok(())
}

#[test]
fn test_aggregate_without_numbers_prints_empty_value() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-a", "name=max"])?;
    assert_eq!(rows, vec![vec!["max", "value"], vec!["max", ""]]);
    Ok(())
}

#[test]
fn test_aggregate_after_empty_filter() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-w", "name=Dave", "-a", "age=avg"])?;
    assert_eq!(rows[1], vec!["avg", ""]);
    Ok(())
}
