//! Invoice date normalization.
//!
//! The export writes creation timestamps as day/month/year with a 12-hour
//! clock, e.g. `31/12/2024 03:45 PM`. Only the calendar date is kept.

use chrono::NaiveDateTime;
use sales_model::CellValue;

/// Format of timestamps written by the export.
pub const SOURCE_DATETIME_FORMAT: &str = "%d/%m/%Y %I:%M %p";

/// Format of `invoice_date` in the output.
pub const DATE_OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// Parses an export timestamp, returning `None` on any mismatch.
pub fn parse_source_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDateTime::parse_from_str(trimmed, SOURCE_DATETIME_FORMAT).ok()
}

/// Normalizes an `invoice_date` cell to `YYYY-MM-DD`.
///
/// Native date cells are formatted directly. Text must match
/// [`SOURCE_DATETIME_FORMAT`]. Anything else yields `None`.
pub fn normalize_invoice_date(cell: &CellValue) -> Option<String> {
    let datetime = match cell {
        CellValue::DateTime(datetime) => *datetime,
        CellValue::Text(value) => parse_source_datetime(value)?,
        _ => return None,
    };
    Some(datetime.format(DATE_OUTPUT_FORMAT).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_afternoon_timestamps() {
        let parsed = parse_source_datetime("31/12/2024 03:45 PM").expect("parse");
        assert_eq!(
            parsed.format("%Y-%m-%d %H:%M").to_string(),
            "2024-12-31 15:45"
        );
    }

    #[test]
    fn rejects_other_layouts() {
        assert!(parse_source_datetime("2024-12-31 15:45").is_none());
        assert!(parse_source_datetime("31/12/2024").is_none());
        assert!(parse_source_datetime("31/13/2024 03:45 PM").is_none());
        assert!(parse_source_datetime("").is_none());
    }
}
