//! Trip domain models: trips, expenses, and the fixed category set.

pub mod category;
pub mod expense;
#[allow(clippy::module_inception)]
pub mod trip;

pub use category::ExpenseCategory;
pub use expense::{Expense, RecurringFrequency};
pub use trip::Trip;
