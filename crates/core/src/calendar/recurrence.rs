use std::{fmt, str::FromStr};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use super::error::RecurrenceError;

/// How often a template event repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceKind {
    Yearly,
    Monthly,
    Weekly,
    /// Repeats on the weekdays enabled in the rule's [`WeekdayMask`].
    Daily,
}

impl RecurrenceKind {
    /// The literal stored on event records ("Every Year", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Yearly => "Every Year",
            Self::Monthly => "Every Month",
            Self::Weekly => "Every Week",
            Self::Daily => "Every Day",
        }
    }
}

impl fmt::Display for RecurrenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RecurrenceKind {
    type Err = RecurrenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yearly" | "every year" => Ok(Self::Yearly),
            "monthly" | "every month" => Ok(Self::Monthly),
            "weekly" | "every week" => Ok(Self::Weekly),
            "daily" | "every day" => Ok(Self::Daily),
            _ => Err(RecurrenceError::UnknownKind(s.to_string())),
        }
    }
}

/// Seven enable flags, Monday first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekdayMask([bool; 7]);

impl WeekdayMask {
    pub fn new(days: [bool; 7]) -> Self {
        Self(days)
    }

    /// Every weekday enabled.
    pub fn all() -> Self {
        Self([true; 7])
    }

    /// No weekday enabled.
    pub fn none() -> Self {
        Self([false; 7])
    }

    pub fn from_weekdays(days: &[Weekday]) -> Self {
        let mut mask = Self::none();
        for day in days {
            mask.set(*day, true);
        }
        mask
    }

    pub fn set(&mut self, day: Weekday, enabled: bool) {
        self.0[day.num_days_from_monday() as usize] = enabled;
    }

    pub fn is_set(&self, day: Weekday) -> bool {
        self.0[day.num_days_from_monday() as usize]
    }

    /// Looks a weekday up by its Monday-based index.
    pub fn is_set_index(&self, index: u32) -> bool {
        self.0.get(index as usize).copied().unwrap_or(false)
    }

    pub fn enabled_days(&self) -> Vec<Weekday> {
        [
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
        .into_iter()
        .filter(|day| self.is_set(*day))
        .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|enabled| !enabled)
    }
}

/// Describes how a template event repeats.
///
/// The weekday mask only matters for [`RecurrenceKind::Daily`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub kind: RecurrenceKind,
    #[serde(default)]
    pub weekday_mask: WeekdayMask,
}

impl RecurrenceRule {
    pub fn yearly() -> Self {
        Self::of_kind(RecurrenceKind::Yearly)
    }

    pub fn monthly() -> Self {
        Self::of_kind(RecurrenceKind::Monthly)
    }

    pub fn weekly() -> Self {
        Self::of_kind(RecurrenceKind::Weekly)
    }

    /// Daily repetition restricted to the given weekdays.
    pub fn daily(days: &[Weekday]) -> Self {
        Self {
            kind: RecurrenceKind::Daily,
            weekday_mask: WeekdayMask::from_weekdays(days),
        }
    }

    pub fn of_kind(kind: RecurrenceKind) -> Self {
        Self {
            kind,
            weekday_mask: WeekdayMask::none(),
        }
    }
}
