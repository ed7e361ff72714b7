//! Pure aggregation over trips: summaries, daily series, and insights.
//!
//! Every function here is total over its input and builds fresh output on
//! each call; nothing is cached or written back to the trip. Expenses dated
//! outside the trip's range are excluded from day buckets but still count in
//! trip-wide totals, matching the dashboard this engine feeds.

pub mod insights;
pub mod series;
pub mod summary;

pub use insights::{recent_expenses, trip_insights, trip_progress, DayTotal, TopExpense, TripInsights};
pub use series::{
    daily_spending_by_category, daily_spending_series, totals_by_currency, DayCategorySpend,
    DaySpend,
};
pub use summary::{budget_summary, category_breakdown, category_totals, BudgetSummary, CategoryTotal};
