//! End-to-end tests for --order-by sorting

use crate::helpers::{run_and_collect_rows, PEOPLE_CSV};

fn first_column(rows: &[Vec<String>]) -> Vec<&str> {
    rows.iter().skip(1).map(|row| row[0].as_str()).collect()
}

#[test]
fn test_order_by_desc_is_stable() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["--order-by", "age=desc"])?;
    assert_eq!(rows[0], vec!["name", "age"]);
    assert_eq!(first_column(&rows), vec!["Alice", "Cara", "Bob"]);
    Ok(())
}

#[test]
fn test_order_by_asc() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-o", "age=asc"])?;
    assert_eq!(first_column(&rows), vec!["Bob", "Alice", "Cara"]);
    Ok(())
}

#[test]
fn test_order_by_direction_is_case_insensitive() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-o", "name=DESC"])?;
    assert_eq!(first_column(&rows), vec!["Cara", "Bob", "Alice"]);
    Ok(())
}

#[test]
fn test_order_by_unknown_direction_sorts_ascending() -> Result<(), Box<dyn std::error::Error>> {
    let rows = run_and_collect_rows(PEOPLE_CSV, &["-o", "name=ask"])?;
    assert_eq!(first_column(&rows), vec!["Alice", "Bob", "Cara"]);
    Ok(())
}

#[test]
fn test_order_by_numbers_not_lexicographic() -> Result<(), Box<dyn std::error::Error>> {
    let csv = "id,score\na,10\nb,9\nc,100\nd,9.5\n";
    let rows = run_and_collect_rows(csv, &["-o", "score=asc"])?;
    assert_eq!(first_column(&rows), vec!["b", "d", "a", "c"]);
    Ok(())
}

#[test]
fn test_filter_then_order_by() -> Result<(), Box<dyn std::error::Error>> {
    let csv = "name,team,score\nAnn,red,5\nBen,blue,7\nCal,red,9\nDee,red,1\n";
    let rows = run_and_collect_rows(csv, &["-w", "team=red", "-o", "score=desc"])?;
    assert_eq!(first_column(&rows), vec!["Cal", "Ann", "Dee"]);
    Ok(())
}
