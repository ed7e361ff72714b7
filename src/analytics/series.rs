use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trip::{Expense, ExpenseCategory, Trip};

/// One calendar day of the trip with actual and cumulative spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DaySpend {
    pub date: NaiveDate,
    pub spent: f64,
    pub running_total: f64,
    /// Proportional budget allocated through this day; absent when the trip
    /// has no budget.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget_line: Option<f64>,
}

/// Per-day spend broken out by category.
///
/// Only categories that appear somewhere in the trip are keyed; each is
/// zero-filled on days without a matching expense.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayCategorySpend {
    pub date: NaiveDate,
    pub amounts: BTreeMap<ExpenseCategory, f64>,
}

/// Daily actual spend, running total, and budget reference line, one entry
/// per calendar day from the trip start through its end.
///
/// The running total accumulates over the full expense list, so an expense
/// dated before the trip starts still counts toward every day's cumulative
/// figure even though no day bucket holds it.
pub fn daily_spending_series(trip: &Trip) -> Vec<DaySpend> {
    let day_count = trip.days().count();
    let daily_budget = if trip.budget != 0.0 {
        Some(trip.budget / day_count as f64)
    } else {
        None
    };

    trip.days()
        .enumerate()
        .map(|(index, date)| {
            let spent = trip
                .expenses
                .iter()
                .filter(|expense| expense.date == date)
                .map(|expense| expense.amount)
                .sum();
            let running_total = trip
                .expenses
                .iter()
                .filter(|expense| expense.date <= date)
                .map(|expense| expense.amount)
                .sum();
            DaySpend {
                date,
                spent,
                running_total,
                budget_line: daily_budget.map(|per_day| per_day * (index + 1) as f64),
            }
        })
        .collect()
}

/// Per-day, per-category spend for every category used anywhere in the trip.
///
/// Empty when the trip has no expenses at all.
pub fn daily_spending_by_category(trip: &Trip) -> Vec<DayCategorySpend> {
    if trip.expenses.is_empty() {
        return Vec::new();
    }

    let mut categories: Vec<ExpenseCategory> = Vec::new();
    for expense in &trip.expenses {
        if !categories.contains(&expense.category) {
            categories.push(expense.category);
        }
    }

    trip.days()
        .map(|date| {
            let mut amounts = BTreeMap::new();
            for category in &categories {
                let total = trip
                    .expenses
                    .iter()
                    .filter(|expense| expense.category == *category && expense.date == date)
                    .map(|expense| expense.amount)
                    .sum();
                amounts.insert(*category, total);
            }
            DayCategorySpend { date, amounts }
        })
        .collect()
}

/// Sums amounts per currency code, as the expense list displays them. No
/// conversion: each currency is its own bucket.
pub fn totals_by_currency(expenses: &[Expense]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for expense in expenses {
        *totals.entry(expense.currency.clone()).or_insert(0.0) += expense.amount;
    }
    totals
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;
    use crate::trip::Trip;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn series_covers_the_range_with_budget_line() {
        let trip = demo::paris_vacation();
        let series = daily_spending_series(&trip);

        assert_eq!(series.len(), 10);
        // Jun 1 carries the hotel and the flights.
        assert_eq!(series[0].spent, 2000.0);
        assert_eq!(series[0].running_total, 2000.0);
        assert_eq!(series[0].budget_line, Some(500.0));
        // No spending after Jun 4; the running total holds steady.
        assert_eq!(series[9].spent, 0.0);
        assert_eq!(series[9].running_total, 2370.0);
        assert_eq!(series[9].budget_line, Some(5000.0));
    }

    #[test]
    fn trip_without_budget_has_no_budget_line() {
        let mut trip = demo::paris_vacation();
        trip.budget = 0.0;
        let series = daily_spending_series(&trip);
        assert!(series.iter().all(|day| day.budget_line.is_none()));
    }

    #[test]
    fn same_day_expenses_sum_into_one_bucket() {
        let mut trip = Trip::new(
            "Shared day",
            "Anywhere",
            date(2025, 2, 1),
            date(2025, 2, 3),
            "USD",
            0.0,
        )
        .unwrap();
        trip.add_expense(Expense::new(
            30.0,
            ExpenseCategory::Food,
            "Breakfast",
            date(2025, 2, 2),
            "USD",
        ));
        trip.add_expense(Expense::new(
            70.0,
            ExpenseCategory::Food,
            "Dinner",
            date(2025, 2, 2),
            "USD",
        ));

        let series = daily_spending_series(&trip);
        assert_eq!(series[1].spent, 100.0);

        let by_category = daily_spending_by_category(&trip);
        assert_eq!(by_category.len(), 3);
        assert_eq!(by_category[1].amounts[&ExpenseCategory::Food], 100.0);
        assert_eq!(by_category[0].amounts[&ExpenseCategory::Food], 0.0);
    }

    #[test]
    fn out_of_range_expenses_count_only_in_running_totals() {
        let mut trip = Trip::new(
            "Early bird",
            "Anywhere",
            date(2025, 2, 10),
            date(2025, 2, 12),
            "USD",
            0.0,
        )
        .unwrap();
        // Booked before departure: outside the range, still real spending.
        trip.add_expense(Expense::new(
            300.0,
            ExpenseCategory::Transportation,
            "Flights",
            date(2025, 2, 1),
            "USD",
        ));
        trip.add_expense(Expense::new(
            50.0,
            ExpenseCategory::Food,
            "Lunch",
            date(2025, 2, 11),
            "USD",
        ));

        let series = daily_spending_series(&trip);
        assert_eq!(series[0].spent, 0.0);
        assert_eq!(series[0].running_total, 300.0);
        assert_eq!(series[1].spent, 50.0);
        assert_eq!(series[2].running_total, 350.0);
    }

    #[test]
    fn empty_trip_still_enumerates_days() {
        let trip = Trip::new(
            "Quiet",
            "Nowhere",
            date(2025, 1, 1),
            date(2025, 1, 4),
            "USD",
            400.0,
        )
        .unwrap();

        let series = daily_spending_series(&trip);
        assert_eq!(series.len(), 4);
        assert!(series.iter().all(|day| day.spent == 0.0 && day.running_total == 0.0));

        assert!(daily_spending_by_category(&trip).is_empty());
    }

    #[test]
    fn currencies_bucket_separately() {
        let mut trip = demo::paris_vacation();
        trip.add_expense(Expense::new(
            90.0,
            ExpenseCategory::Food,
            "Bistro",
            date(2025, 6, 5),
            "EUR",
        ));

        let totals = totals_by_currency(&trip.expenses);
        assert_eq!(totals["USD"], 2370.0);
        assert_eq!(totals["EUR"], 90.0);
    }
}
