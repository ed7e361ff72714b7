use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TripError;

use super::expense::Expense;

/// A planned trip with its budget and the expenses logged against it.
///
/// Expense order is append order; every derivation that cares about ties
/// relies on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Trip {
    pub id: Uuid,
    pub name: String,
    pub destination: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub base_currency: String,
    pub budget: f64,
    #[serde(default)]
    pub companions: Vec<String>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl Trip {
    /// Creates a trip, rejecting ranges that end before they start.
    pub fn new(
        name: impl Into<String>,
        destination: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        base_currency: impl Into<String>,
        budget: f64,
    ) -> Result<Self, TripError> {
        if end_date < start_date {
            return Err(TripError::InvalidDateRange {
                start: start_date,
                end: end_date,
            });
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name: name.into(),
            destination: destination.into(),
            start_date,
            end_date,
            base_currency: base_currency.into(),
            budget,
            companions: Vec::new(),
            expenses: Vec::new(),
        })
    }

    pub fn with_companions(mut self, companions: Vec<String>) -> Self {
        self.companions = companions;
        self
    }

    pub fn add_expense(&mut self, expense: Expense) -> Uuid {
        let id = expense.id;
        self.expenses.push(expense);
        id
    }

    pub fn expense(&self, id: Uuid) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    pub fn expense_mut(&mut self, id: Uuid) -> Option<&mut Expense> {
        self.expenses.iter_mut().find(|expense| expense.id == id)
    }

    pub fn remove_expense(&mut self, id: Uuid) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;
        Some(self.expenses.remove(index))
    }

    /// Trip duration as the difference between end and start, floored to one
    /// day. Used for daily averages and progress, not for day enumeration.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days().max(1)
    }

    /// Every calendar day of the trip, start through end inclusive.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end_date;
        self.start_date.iter_days().take_while(move |day| *day <= end)
    }
}
