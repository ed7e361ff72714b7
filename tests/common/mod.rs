use chrono::NaiveDate;
use trip_budget_core::trip::{Expense, ExpenseCategory, Trip};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn june_trip(budget: f64) -> Trip {
    Trip::new(
        "June Getaway",
        "Lisbon, Portugal",
        date(2025, 6, 1),
        date(2025, 6, 10),
        "EUR",
        budget,
    )
    .unwrap()
}

pub fn expense(amount: f64, category: ExpenseCategory, day: u32) -> Expense {
    Expense::new(amount, category, "fixture", date(2025, 6, day), "EUR")
}
