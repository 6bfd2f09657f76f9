//! Display formatting for terminal output

pub mod expense;

use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;

pub use expense::{format_expense_details, format_expense_register, format_expense_row};

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date with a user-supplied strftime pattern.
///
/// Patterns chrono cannot parse fall back to ISO `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate, pattern: &str) -> String {
    let valid = !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error));
    let pattern = if valid { pattern } else { FALLBACK_DATE_FORMAT };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(format_date(date, "%Y-%m-%d"), "2024-03-10");
        assert_eq!(format_date(date, "%d/%m/%Y"), "10/03/2024");
    }

    #[test]
    fn test_invalid_pattern_falls_back() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(format_date(date, "%Q"), "2024-03-10");
    }
}
