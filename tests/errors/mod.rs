//! End-to-end tests for failing runs
//!
//! Every failure must exit non-zero, explain itself on stderr and print
//! nothing on stdout.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

use crate::helpers::{create_temp_dir, run_test_case, CsvSliceTestCase};

#[test]
fn test_order_by_with_aggregate_fails_before_reading() -> Result<(), Box<dyn std::error::Error>> {
    // The file does not exist: the combination check must come first
    let mut cmd = Command::cargo_bin("csvslice")?;
    cmd.args(["-f", "no/such/file.csv", "-o", "age=desc", "-a", "age=avg"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Invalid combination"))
        .stderr(predicate::str::contains("I/O error").not());

    Ok(())
}

#[test]
fn test_missing_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let missing = temp_dir.path().join("missing.csv");

    let mut cmd = Command::cargo_bin("csvslice")?;
    cmd.arg("-f").arg(&missing);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("missing.csv"))
        .stderr(predicate::str::contains("I/O error"));

    Ok(())
}

#[test]
fn test_unknown_filter_column() -> Result<(), Box<dyn std::error::Error>> {
    let test_case = CsvSliceTestCase {
        args: vec!["-w".to_string(), "salary=10".to_string()],
        expected_stderr: vec!["Column 'salary' not found (filter)".to_string()],
        should_succeed: false,
        ..Default::default()
    };

    run_test_case(test_case)
}

#[test]
fn test_unknown_sort_column() -> Result<(), Box<dyn std::error::Error>> {
    let test_case = CsvSliceTestCase {
        args: vec!["-o".to_string(), "Age=asc".to_string()],
        expected_stderr: vec!["Column 'Age' not found (order-by)".to_string()],
        should_succeed: false,
        ..Default::default()
    };

    run_test_case(test_case)
}

#[test]
fn test_unknown_aggregate_function() -> Result<(), Box<dyn std::error::Error>> {
    let test_case = CsvSliceTestCase {
        args: vec!["-a".to_string(), "age=sum".to_string()],
        expected_stderr: vec!["Unknown aggregate function 'sum'".to_string()],
        should_succeed: false,
        ..Default::default()
    };

    run_test_case(test_case)
}

#[test]
fn test_expression_without_separator() -> Result<(), Box<dyn std::error::Error>> {
    let test_case = CsvSliceTestCase {
        args: vec!["-w".to_string(), "age".to_string()],
        expected_stderr: vec!["Invalid --where expression 'age'".to_string()],
        should_succeed: false,
        ..Default::default()
    };

    run_test_case(test_case)
}

#[test]
fn test_malformed_utf8_is_reported() -> Result<(), Box<dyn std::error::Error>> {
    let temp_dir = create_temp_dir()?;
    let file_path = temp_dir.path().join("bad.csv");
    std::fs::write(&file_path, b"name\n\xff\xfe\n")?;

    let mut cmd = Command::cargo_bin("csvslice")?;
    cmd.arg("-f").arg(&file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("CSV parsing error"));

    Ok(())
}
