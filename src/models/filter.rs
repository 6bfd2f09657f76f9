//! Reporting windows: filter modes and inclusive date ranges

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ExpenseError, ExpenseResult};

/// Which reporting window to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    /// No date filtering
    #[default]
    All,
    /// Sunday through Saturday of the reference week
    Week,
    /// First through last day of the reference month
    Month,
}

impl FilterMode {
    /// Every mode, in the order the filter buttons are shown
    pub const ALL_MODES: [FilterMode; 3] = [FilterMode::All, FilterMode::Week, FilterMode::Month];

    /// Wire name, as accepted by [`FromStr`]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Week => "week",
            Self::Month => "month",
        }
    }

    /// Human-facing label
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Week => "This Week",
            Self::Month => "This Month",
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterMode {
    type Err = ExpenseError;

    /// Mode names are matched exactly: "Week" is not "week".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            other => Err(ExpenseError::InvalidFilterMode(other.to_string())),
        }
    }
}

/// Inclusive calendar-date range with `start <= end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

#[derive(Deserialize)]
struct RawDateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ExpenseError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Build a range, rejecting `start > end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> ExpenseResult<Self> {
        if start > end {
            return Err(ExpenseError::Validation(format!(
                "Date range start {} is after end {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }

    /// Caller guarantees `start <= end`.
    pub(crate) fn from_ordered(start: NaiveDate, end: NaiveDate) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Check if a date falls within this range (both ends inclusive)
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of calendar days covered, counting both ends
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}..{}",
            self.start.format("%Y-%m-%d"),
            self.end.format("%Y-%m-%d")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_modes() {
        assert_eq!("all".parse::<FilterMode>().unwrap(), FilterMode::All);
        assert_eq!("week".parse::<FilterMode>().unwrap(), FilterMode::Week);
        assert_eq!("month".parse::<FilterMode>().unwrap(), FilterMode::Month);
    }

    #[test]
    fn test_parse_rejects_unknown_modes() {
        for bad in ["bogus", "Week", "", " month"] {
            let err = bad.parse::<FilterMode>().unwrap_err();
            assert!(matches!(err, ExpenseError::InvalidFilterMode(ref m) if m == bad));
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(FilterMode::Week.label(), "This Week");
        assert_eq!(FilterMode::Month.to_string(), "month");
        for mode in FilterMode::ALL_MODES {
            assert_eq!(mode.as_str().parse::<FilterMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_range_rejects_inverted_bounds() {
        let err = DateRange::new(date(2024, 3, 2), date(2024, 3, 1)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_range_contains_both_ends() {
        let range = DateRange::new(date(2024, 3, 10), date(2024, 3, 16)).unwrap();
        assert!(range.contains(date(2024, 3, 10)));
        assert!(range.contains(date(2024, 3, 16)));
        assert!(!range.contains(date(2024, 3, 17)));
        assert_eq!(range.num_days(), 7);
        assert_eq!(range.to_string(), "2024-03-10..2024-03-16");
    }

    #[test]
    fn test_single_day_range() {
        let day = date(2024, 2, 29);
        let range = DateRange::new(day, day).unwrap();
        assert_eq!(range.num_days(), 1);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: DateRange =
            serde_json::from_str(r#"{"start":"2024-03-01","end":"2024-03-31"}"#).unwrap();
        assert_eq!(ok.end(), date(2024, 3, 31));

        let bad = serde_json::from_str::<DateRange>(r#"{"start":"2024-04-01","end":"2024-03-31"}"#);
        assert!(bad.is_err());
    }
}
