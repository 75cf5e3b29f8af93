//! Display formatting for bill fields.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

const SHORT_MONTHS: [&str; 12] = [
    "Janv.", "Févr.", "Mars", "Avr.", "Mai", "Juin", "Juil.", "Août", "Sept.", "Oct.", "Nov.",
    "Déc.",
];

/// A date value that could not be parsed for display.
///
/// Callers decide what to do with it; the bills table keeps the raw
/// string on screen rather than dropping the record.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unparseable date: {0}")]
pub struct DateFormatError(pub String);

/// Format an ISO `yyyy-mm-dd` date (a trailing time part is ignored) to
/// the French short display form.
///
/// Example: "2004-04-04" -> "4 Avr. 04"
pub fn format_date(iso: &str) -> Result<String, DateFormatError> {
    let date_part = iso.split('T').next().unwrap_or(iso);
    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|_| DateFormatError(iso.to_string()))?;

    let month = SHORT_MONTHS[date.month0() as usize];
    Ok(format!("{} {} {:02}", date.day(), month, date.year() % 100))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_dates() {
        assert_eq!(format_date("2004-04-04").unwrap(), "4 Avr. 04");
        assert_eq!(format_date("2022-01-01").unwrap(), "1 Janv. 22");
        assert_eq!(format_date("2021-12-31").unwrap(), "31 Déc. 21");
    }

    #[test]
    fn ignores_time_component() {
        assert_eq!(format_date("2022-01-01T10:30:00Z").unwrap(), "1 Janv. 22");
    }

    #[test]
    fn reports_corrupted_dates() {
        assert_eq!(
            format_date("not-a-date"),
            Err(DateFormatError("not-a-date".to_string()))
        );
        assert!(format_date("").is_err());
        assert!(format_date("2022-13-01").is_err());
    }
}
