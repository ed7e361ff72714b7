use serde::{Deserialize, Serialize};

use crate::trip::{Expense, ExpenseCategory, Trip};

/// Total spend for one category plus its share of the overall spend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
    pub percentage: f64,
}

impl CategoryTotal {
    /// Zero-valued stand-in reported when a trip has no expenses.
    pub fn placeholder() -> Self {
        Self {
            category: ExpenseCategory::Miscellaneous,
            amount: 0.0,
            percentage: 0.0,
        }
    }
}

/// Budget-versus-actual snapshot for a whole trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSummary {
    pub total_budget: f64,
    pub total_spent: f64,
    /// Negative when the trip is over budget.
    pub remaining: f64,
    pub percentage_spent: f64,
    /// Sorted descending by amount; ties keep first-encounter order.
    pub category_summary: Vec<CategoryTotal>,
    pub daily_average: f64,
    pub highest_category: CategoryTotal,
}

impl BudgetSummary {
    /// All-zero summary used when no trip is selected.
    pub fn empty() -> Self {
        Self {
            total_budget: 0.0,
            total_spent: 0.0,
            remaining: 0.0,
            percentage_spent: 0.0,
            category_summary: Vec::new(),
            daily_average: 0.0,
            highest_category: CategoryTotal::placeholder(),
        }
    }
}

/// Sums expense amounts per category, in first-encounter order. Only
/// categories with at least one expense appear.
pub fn category_totals(expenses: &[Expense]) -> Vec<(ExpenseCategory, f64)> {
    let mut totals: Vec<(ExpenseCategory, f64)> = Vec::new();
    for expense in expenses {
        match totals
            .iter_mut()
            .find(|(category, _)| *category == expense.category)
        {
            Some((_, amount)) => *amount += expense.amount,
            None => totals.push((expense.category, expense.amount)),
        }
    }
    totals
}

/// Category totals with each category's share of the overall spend.
///
/// Shares are 0 rather than NaN when nothing has been spent.
pub fn category_breakdown(expenses: &[Expense]) -> Vec<CategoryTotal> {
    let totals = category_totals(expenses);
    let total_spent: f64 = totals.iter().map(|(_, amount)| amount).sum();
    totals
        .into_iter()
        .map(|(category, amount)| CategoryTotal {
            category,
            amount,
            percentage: percentage_of(amount, total_spent),
        })
        .collect()
}

pub fn total_spent(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|expense| expense.amount).sum()
}

/// Budget-versus-actual summary across the whole trip.
///
/// Totals are trip-wide and ignore the date range entirely.
/// `percentage_spent` is 0 when the trip has no budget, never NaN.
pub fn budget_summary(trip: &Trip) -> BudgetSummary {
    let total_spent = total_spent(&trip.expenses);
    let mut category_summary = category_breakdown(&trip.expenses);
    // Stable sort: equal amounts keep first-encounter order.
    category_summary.sort_by(|a, b| b.amount.total_cmp(&a.amount));
    let highest_category = category_summary
        .first()
        .cloned()
        .unwrap_or_else(CategoryTotal::placeholder);

    BudgetSummary {
        total_budget: trip.budget,
        total_spent,
        remaining: trip.budget - total_spent,
        percentage_spent: percentage_of(total_spent, trip.budget),
        category_summary,
        daily_average: total_spent / trip.duration_days() as f64,
        highest_category,
    }
}

pub(crate) fn percentage_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}
