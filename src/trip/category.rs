use std::fmt;

use serde::{Deserialize, Serialize};

/// Classifies an expense into one of the seven fixed vacation categories.
///
/// The set is closed: views and aggregations can match exhaustively.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ExpenseCategory {
    Accommodation,
    Transportation,
    Food,
    Activities,
    Shopping,
    Emergency,
    Miscellaneous,
}

impl ExpenseCategory {
    /// Every category, in canonical order.
    pub const ALL: [ExpenseCategory; 7] = [
        ExpenseCategory::Accommodation,
        ExpenseCategory::Transportation,
        ExpenseCategory::Food,
        ExpenseCategory::Activities,
        ExpenseCategory::Shopping,
        ExpenseCategory::Emergency,
        ExpenseCategory::Miscellaneous,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExpenseCategory::Accommodation => "accommodation",
            ExpenseCategory::Transportation => "transportation",
            ExpenseCategory::Food => "food",
            ExpenseCategory::Activities => "activities",
            ExpenseCategory::Shopping => "shopping",
            ExpenseCategory::Emergency => "emergency",
            ExpenseCategory::Miscellaneous => "miscellaneous",
        }
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
