use chrono::NaiveDate;
use thiserror::Error;

/// Error type that captures the store's few fallible operations.
#[derive(Debug, Error)]
pub enum TripError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid date range: trip ends {end} before it starts {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },
}
