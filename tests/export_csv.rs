mod common;

use std::fs;

use common::{expense, june_trip};
use trip_budget_core::demo;
use trip_budget_core::export::{expenses_to_csv, write_expenses_csv};
use trip_budget_core::trip::ExpenseCategory;

#[test]
fn csv_has_one_quoted_row_per_expense() {
    let trip = demo::paris_vacation();
    let csv = expenses_to_csv(&trip).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(lines.len(), 1 + trip.expenses.len());
    for line in &lines {
        assert!(line.starts_with('"') && line.ends_with('"'));
        assert_eq!(line.matches("\",\"").count(), 5);
    }
    assert!(lines[5].contains("\"Souvenirs\""));
    assert!(lines[5].contains("\"200\""));
}

#[test]
fn export_to_path_round_trips_through_the_filesystem() {
    let mut trip = june_trip(500.0);
    trip.add_expense(expense(42.5, ExpenseCategory::Activities, 3));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("expenses.csv");
    write_expenses_csv(&trip, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, expenses_to_csv(&trip).unwrap());
    assert!(written.contains("\"2025-06-03\",\"activities\",\"fixture\",\"42.5\",\"EUR\",\"\""));
}

#[test]
fn empty_trip_exports_just_the_header() {
    let trip = june_trip(500.0);
    let csv = expenses_to_csv(&trip).unwrap();
    assert_eq!(
        csv.trim_end(),
        "\"Date\",\"Category\",\"Description\",\"Amount\",\"Currency\",\"Notes\""
    );
}
