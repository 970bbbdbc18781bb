//! API request types for event operations.
//!
//! Following the Functional Core pattern, these are pure data types with no I/O.

use chrono::{NaiveDate, NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use super::recurrence::{RecurrenceKind, RecurrenceRule, WeekdayMask};
use super::types::{EventShares, TemplateEvent, UserId, Visibility};
use crate::serde::{
    deserialize_optional_date, deserialize_optional_datetime, deserialize_optional_string,
};

/// Request payload for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub subject: String,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub description: Option<String>,
    pub starts_on: NaiveDateTime,
    #[serde(default, deserialize_with = "deserialize_optional_datetime")]
    pub ends_on: Option<NaiveDateTime>,
    #[serde(default)]
    pub all_day: bool,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub persons: Vec<UserId>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// Makes the event recurring when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat_on: Option<RecurrenceKind>,
    /// Enabled weekdays for daily repetition.
    #[serde(default)]
    pub weekdays: Vec<Weekday>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub repeat_till: Option<NaiveDate>,
    #[serde(default)]
    pub send_reminder: bool,
}

impl CreateEventRequest {
    /// Create a one-shot request with just a subject and start.
    pub fn new(subject: impl Into<String>, starts_on: NaiveDateTime) -> Self {
        Self {
            subject: subject.into(),
            description: None,
            starts_on,
            ends_on: None,
            all_day: false,
            visibility: Visibility::Private,
            persons: Vec::new(),
            roles: Vec::new(),
            repeat_on: None,
            weekdays: Vec::new(),
            repeat_till: None,
            send_reminder: false,
        }
    }

    pub fn with_end(mut self, ends_on: NaiveDateTime) -> Self {
        self.ends_on = Some(ends_on);
        self
    }

    pub fn repeating(mut self, kind: RecurrenceKind) -> Self {
        self.repeat_on = Some(kind);
        self
    }

    pub fn on_weekdays(mut self, days: &[Weekday]) -> Self {
        self.weekdays = days.to_vec();
        self
    }

    /// Convert into a stored event owned by `owner`.
    pub fn into_event(self, owner: impl Into<UserId>) -> TemplateEvent {
        let recurrence = self.repeat_on.map(|kind| RecurrenceRule {
            kind,
            weekday_mask: WeekdayMask::from_weekdays(&self.weekdays),
        });

        let mut event = TemplateEvent::new(owner, self.subject, self.starts_on);
        event.description = self.description;
        event.ends_on = self.ends_on;
        event.all_day = self.all_day;
        event.visibility = self.visibility;
        event.shares = EventShares {
            persons: self.persons,
            roles: self.roles,
        };
        event.is_recurring = recurrence.is_some();
        event.recurrence = recurrence;
        event.repeat_till = self.repeat_till;
        event.send_reminder = self.send_reminder;
        event
    }
}
