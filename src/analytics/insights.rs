use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analytics::series::daily_spending_series;
use crate::analytics::summary::{category_totals, total_spent};
use crate::trip::{Expense, ExpenseCategory, Trip};

/// A single day's total, used for the highest/lowest spending day highlights.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub amount: f64,
}

/// The single largest expense of the trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TopExpense {
    pub id: Uuid,
    pub description: String,
    pub amount: f64,
}

/// Headline findings for a trip's analytics view. Every highlight is `None`
/// when the trip has no expenses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TripInsights {
    pub highest_day: Option<DayTotal>,
    /// Cheapest day among days with any spending; zero-spend days never win.
    pub lowest_day: Option<DayTotal>,
    pub average_daily_spend: f64,
    pub most_expensive_category: Option<ExpenseCategory>,
    pub top_expense: Option<TopExpense>,
}

impl TripInsights {
    fn empty() -> Self {
        Self {
            highest_day: None,
            lowest_day: None,
            average_daily_spend: 0.0,
            most_expensive_category: None,
            top_expense: None,
        }
    }
}

/// Computes the trip's headline insights.
///
/// Ties resolve to the earliest date or the first-listed expense, so repeated
/// calls on an unchanged trip always agree.
pub fn trip_insights(trip: &Trip) -> TripInsights {
    if trip.expenses.is_empty() {
        return TripInsights::empty();
    }

    let series = daily_spending_series(trip);

    let mut highest_day: Option<DayTotal> = None;
    let mut lowest_day: Option<DayTotal> = None;
    for day in &series {
        if highest_day.map_or(true, |best| day.spent > best.amount) {
            highest_day = Some(DayTotal {
                date: day.date,
                amount: day.spent,
            });
        }
        if day.spent > 0.0 && lowest_day.map_or(true, |best| day.spent < best.amount) {
            lowest_day = Some(DayTotal {
                date: day.date,
                amount: day.spent,
            });
        }
    }

    // Inclusive day count here, unlike the summary's exclusive duration.
    let average_daily_spend = total_spent(&trip.expenses) / series.len().max(1) as f64;

    let mut most_expensive_category: Option<(ExpenseCategory, f64)> = None;
    for (category, amount) in category_totals(&trip.expenses) {
        if most_expensive_category.map_or(true, |(_, top)| amount > top) {
            most_expensive_category = Some((category, amount));
        }
    }

    let mut top_expense: Option<&Expense> = None;
    for expense in &trip.expenses {
        if top_expense.map_or(true, |best| expense.amount > best.amount) {
            top_expense = Some(expense);
        }
    }

    TripInsights {
        highest_day,
        lowest_day,
        average_daily_spend,
        most_expensive_category: most_expensive_category.map(|(category, _)| category),
        top_expense: top_expense.map(|expense| TopExpense {
            id: expense.id,
            description: expense.description.clone(),
            amount: expense.amount,
        }),
    }
}

/// The trip's most recent `count` expenses, newest first.
pub fn recent_expenses(trip: &Trip, count: usize) -> Vec<&Expense> {
    trip.expenses.iter().rev().take(count).collect()
}

/// Percentage of the trip elapsed as of `today`, clamped to `[0, 100]`.
/// Zero-length ranges count as one day, like the daily average.
pub fn trip_progress(trip: &Trip, today: NaiveDate) -> f64 {
    let total_days = trip.duration_days();
    let days_passed = (today - trip.start_date).num_days().clamp(0, total_days);
    days_passed as f64 / total_days as f64 * 100.0
}
