//! Calendar-safe date arithmetic.
//!
//! All values are naive wall-clock dates. Nothing here knows about time zones.

use chrono::{Datelike, Duration, Months, NaiveDate};

use super::error::DateError;

/// Builds a date from its parts, signalling [`DateError::InvalidDate`] for
/// days that do not exist (e.g. February 30th).
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, DateError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or(DateError::InvalidDate { year, month, day })
}

/// Adds `n` days (negative to go back), rolling over months and years.
///
/// `None` when the result falls outside the representable date range.
pub fn add_days(date: NaiveDate, n: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(n)?)
}

/// Adds `n` calendar months (negative to go back).
///
/// When the target month is shorter than the source day, the result is
/// clamped to the last day of the target month: Jan 31 + 1 month is Feb 28
/// (or Feb 29 in a leap year). `None` when the result falls outside the
/// representable date range.
pub fn add_months(date: NaiveDate, n: i32) -> Option<NaiveDate> {
    let months = Months::new(n.unsigned_abs());
    if n >= 0 {
        date.checked_add_months(months)
    } else {
        date.checked_sub_months(months)
    }
}

/// Steps a year/month pair by `n` months without touching the day.
pub fn shift_month(year: i32, month: u32, n: i32) -> (i32, u32) {
    let index = year * 12 + month as i32 - 1 + n;
    (index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
}

/// ISO weekday of a date, Monday = 0 through Sunday = 6.
pub fn weekday_of(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_monday()
}

/// Number of calendar days from `a` to `b`, counting both ends.
///
/// Returns `0` when `b` is before `a`.
pub fn inclusive_day_count(a: NaiveDate, b: NaiveDate) -> i64 {
    let diff = (b - a).num_days();
    if diff < 0 {
        0
    } else {
        diff + 1
    }
}
