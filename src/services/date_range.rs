//! Date range resolution for the reporting filters
//!
//! Turns a filter mode plus a reference instant into the inclusive calendar
//! dates to query. Weeks run Sunday through Saturday. Nothing here reads the
//! clock; callers pass "now" in.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate, TimeZone};

use crate::error::ExpenseResult;
use crate::models::{DateRange, FilterMode};

/// Resolve a textual filter mode against a reference instant
///
/// The instant is reduced to its calendar date in its own time zone, so
/// passing `chrono::Local::now()` uses the environment's local calendar.
///
/// Returns `Ok(None)` for `all`.
///
/// # Errors
///
/// Returns `InvalidFilterMode` for anything other than `all`, `week` or `month`.
pub fn resolve<Tz: TimeZone>(mode: &str, reference: &DateTime<Tz>) -> ExpenseResult<Option<DateRange>> {
    let mode: FilterMode = mode.parse()?;
    Ok(resolve_for_date(mode, reference.date_naive()))
}

/// Resolve an already-parsed mode against a calendar date
pub fn resolve_for_date(mode: FilterMode, date: NaiveDate) -> Option<DateRange> {
    match mode {
        FilterMode::All => None,
        FilterMode::Week => Some(week_containing(date)),
        FilterMode::Month => Some(month_containing(date)),
    }
}

/// The Sunday..Saturday week containing `date`
pub fn week_containing(date: NaiveDate) -> DateRange {
    // 0 = Sunday .. 6 = Saturday
    let day_of_week = u64::from(date.weekday().num_days_from_sunday());

    let start = date
        .checked_sub_days(Days::new(day_of_week))
        .unwrap_or(NaiveDate::MIN);
    let end = date
        .checked_add_days(Days::new(6 - day_of_week))
        .unwrap_or(NaiveDate::MAX);

    DateRange::from_ordered(start, end)
}

/// First through last day of the month containing `date`
pub fn month_containing(date: NaiveDate) -> DateRange {
    let start = date.with_day(1).unwrap_or(date);

    // Day before the first of next month; only the final representable month
    // has no successor, and its last day is NaiveDate::MAX.
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next_month| next_month.pred_opt())
        .unwrap_or(NaiveDate::MAX);

    DateRange::from_ordered(start, end)
}
