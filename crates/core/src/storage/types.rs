use chrono::NaiveDate;

use super::DateRangeError;
use crate::access::Viewer;
use crate::calendar::inclusive_day_count;

/// A query window with inclusive start and end dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// A window covering exactly one day.
    pub fn single_day(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Whether `date` falls inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Number of days in the window, bounds included.
    pub fn day_count(&self) -> i64 {
        inclusive_day_count(self.start, self.end)
    }
}

/// What a store is asked for when a window is queried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    pub range: DateRange,
    /// Only events this viewer may see are returned.
    pub viewer: Viewer,
    /// Restrict to events with `send_reminder` set.
    pub reminders_only: bool,
}

impl EventQuery {
    pub fn new(range: DateRange, viewer: Viewer) -> Self {
        Self {
            range,
            viewer,
            reminders_only: false,
        }
    }

    pub fn reminders_only(mut self, reminders_only: bool) -> Self {
        self.reminders_only = reminders_only;
        self
    }
}
