//! Seed data mirroring the demo trip the dashboard ships with. Handy as a
//! realistic fixture for consumers and tests.

use chrono::NaiveDate;

use crate::trip::{Expense, ExpenseCategory, Trip};

/// The demo "Paris Vacation" trip: a 5000 USD budget over ten days, with five
/// expenses logged across the first four.
pub fn paris_vacation() -> Trip {
    let mut trip = Trip::new(
        "Paris Vacation",
        "Paris, France",
        date(2025, 6, 1),
        date(2025, 6, 10),
        "USD",
        5000.0,
    )
    .expect("demo date range is valid")
    .with_companions(vec!["Alice".into(), "Bob".into()]);

    trip.add_expense(
        Expense::new(
            1200.0,
            ExpenseCategory::Accommodation,
            "Hotel Booking",
            date(2025, 6, 1),
            "USD",
        )
        .with_notes("Booked through Booking.com"),
    );
    trip.add_expense(Expense::new(
        800.0,
        ExpenseCategory::Transportation,
        "Round-trip Flights",
        date(2025, 6, 1),
        "USD",
    ));
    trip.add_expense(Expense::new(
        50.0,
        ExpenseCategory::Food,
        "Dinner at Le Café",
        date(2025, 6, 2),
        "USD",
    ));
    trip.add_expense(Expense::new(
        120.0,
        ExpenseCategory::Activities,
        "Louvre Museum Tickets",
        date(2025, 6, 3),
        "USD",
    ));
    trip.add_expense(Expense::new(
        200.0,
        ExpenseCategory::Shopping,
        "Souvenirs",
        date(2025, 6, 4),
        "USD",
    ));
    trip
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo dates are valid")
}
