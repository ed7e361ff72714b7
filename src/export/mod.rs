//! CSV export of a trip's expense list.

use std::io::Write;
use std::path::Path;

use csv::{QuoteStyle, Writer, WriterBuilder};

use crate::errors::TripError;
use crate::trip::Trip;

const HEADERS: [&str; 6] = ["Date", "Category", "Description", "Amount", "Currency", "Notes"];

/// Renders the trip's expenses as CSV with every field quoted.
pub fn expenses_to_csv(trip: &Trip) -> Result<String, TripError> {
    let mut buf = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .from_writer(&mut buf);
        write_records(&mut writer, trip)?;
        writer.flush()?;
    }
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Writes the trip's expenses as CSV to `path`.
pub fn write_expenses_csv(trip: &Trip, path: &Path) -> Result<(), TripError> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .from_path(path)?;
    write_records(&mut writer, trip)?;
    writer.flush()?;
    Ok(())
}

fn write_records<W: Write>(writer: &mut Writer<W>, trip: &Trip) -> Result<(), TripError> {
    writer.write_record(HEADERS)?;
    for expense in &trip.expenses {
        writer.write_record([
            expense.date.format("%Y-%m-%d").to_string(),
            expense.category.to_string(),
            expense.description.clone(),
            expense.amount.to_string(),
            expense.currency.clone(),
            expense.notes.clone().unwrap_or_default(),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo;

    #[test]
    fn every_field_is_quoted() {
        let trip = demo::paris_vacation();
        let csv = expenses_to_csv(&trip).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines.len(), 6);
        assert_eq!(
            lines[0],
            "\"Date\",\"Category\",\"Description\",\"Amount\",\"Currency\",\"Notes\""
        );
        assert_eq!(
            lines[1],
            "\"2025-06-01\",\"accommodation\",\"Hotel Booking\",\"1200\",\"USD\",\"Booked through Booking.com\""
        );
        // Missing notes render as an empty quoted field.
        assert!(lines[2].ends_with(",\"\""));
    }
}
