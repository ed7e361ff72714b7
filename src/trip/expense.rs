use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::category::ExpenseCategory;

/// A single dated, categorised expense logged against a trip.
///
/// `currency` is carried for display and per-currency totals; no conversion
/// happens anywhere in this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Expense {
    pub id: Uuid,
    pub amount: f64,
    pub category: ExpenseCategory,
    pub description: String,
    pub date: NaiveDate,
    pub currency: String,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_frequency: Option<RecurringFrequency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Expense {
    pub fn new(
        amount: f64,
        category: ExpenseCategory,
        description: impl Into<String>,
        date: NaiveDate,
        currency: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            category,
            description: description.into(),
            date,
            currency: currency.into(),
            is_recurring: false,
            recurring_frequency: None,
            notes: None,
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_recurrence(mut self, frequency: RecurringFrequency) -> Self {
        self.is_recurring = true;
        self.recurring_frequency = Some(frequency);
        self
    }
}

/// How often a recurring expense repeats. Display metadata only; the
/// aggregation functions ignore it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurringFrequency {
    Daily,
    Weekly,
    Monthly,
}
