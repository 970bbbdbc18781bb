use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::recurrence::{RecurrenceKind, RecurrenceRule};

/// Login name identifying a user.
pub type UserId = String;

/// Who can see an event without being explicitly invited.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    Public,
    #[default]
    Private,
}

/// People and roles an event is explicitly shared with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventShares {
    #[serde(default)]
    pub persons: Vec<UserId>,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// A stored calendar event, recurring or not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateEvent {
    pub id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub starts_on: NaiveDateTime,
    pub ends_on: Option<NaiveDateTime>,
    pub owner: UserId,
    /// Display-only flag; expansion arithmetic ignores it.
    pub all_day: bool,
    pub visibility: Visibility,
    #[serde(default)]
    pub shares: EventShares,
    pub is_recurring: bool,
    /// Present iff `is_recurring`.
    pub recurrence: Option<RecurrenceRule>,
    /// Last date an occurrence may fall on. `None` repeats forever.
    pub repeat_till: Option<NaiveDate>,
    pub send_reminder: bool,
}

impl TemplateEvent {
    /// Creates a private, one-shot event owned by `owner`.
    pub fn new(
        owner: impl Into<UserId>,
        subject: impl Into<String>,
        starts_on: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            description: None,
            starts_on,
            ends_on: None,
            owner: owner.into(),
            all_day: false,
            visibility: Visibility::Private,
            shares: EventShares::default(),
            is_recurring: false,
            recurrence: None,
            repeat_till: None,
            send_reminder: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_end(mut self, ends_on: NaiveDateTime) -> Self {
        self.ends_on = Some(ends_on);
        self
    }

    pub fn all_day(mut self) -> Self {
        self.all_day = true;
        self
    }

    pub fn public(mut self) -> Self {
        self.visibility = Visibility::Public;
        self
    }

    /// Marks the event as repeating by `rule`.
    pub fn recurring(mut self, rule: RecurrenceRule) -> Self {
        self.is_recurring = true;
        self.recurrence = Some(rule);
        self
    }

    pub fn repeat_till(mut self, date: NaiveDate) -> Self {
        self.repeat_till = Some(date);
        self
    }

    pub fn with_reminder(mut self) -> Self {
        self.send_reminder = true;
        self
    }

    pub fn shared_with_person(mut self, person: impl Into<UserId>) -> Self {
        self.shares.persons.push(person.into());
        self
    }

    pub fn shared_with_role(mut self, role: impl Into<String>) -> Self {
        self.shares.roles.push(role.into());
        self
    }

    /// Sets a specific ID for this event (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Date portion of `starts_on`.
    pub fn anchor_date(&self) -> NaiveDate {
        self.starts_on.date()
    }

    /// Time-of-day portion of `starts_on`.
    pub fn anchor_time(&self) -> NaiveTime {
        self.starts_on.time()
    }
}

/// One concrete dated instance of an event, as returned to callers.
///
/// A strict projection of [`TemplateEvent`]: recurrence masks and share
/// lists never leave the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Occurrence {
    pub id: Uuid,
    pub subject: String,
    pub description: Option<String>,
    pub starts_on: NaiveDateTime,
    pub ends_on: Option<NaiveDateTime>,
    pub owner: UserId,
    pub all_day: bool,
    pub visibility: Visibility,
    pub is_recurring: bool,
    pub repeat_on: Option<RecurrenceKind>,
    pub repeat_till: Option<NaiveDate>,
    pub send_reminder: bool,
}

impl Occurrence {
    /// Projects a template as-is, keeping its own timestamps.
    pub fn from_template(template: &TemplateEvent) -> Self {
        Self {
            id: template.id,
            subject: template.subject.clone(),
            description: template.description.clone(),
            starts_on: template.starts_on,
            ends_on: template.ends_on,
            owner: template.owner.clone(),
            all_day: template.all_day,
            visibility: template.visibility,
            is_recurring: template.is_recurring,
            repeat_on: template.recurrence.map(|rule| rule.kind),
            repeat_till: template.repeat_till,
            send_reminder: template.send_reminder,
        }
    }

    /// Projects a template onto `date`, keeping its original times of day.
    pub fn at_date(template: &TemplateEvent, date: NaiveDate) -> Self {
        let mut occurrence = Self::from_template(template);
        occurrence.starts_on = date.and_time(template.anchor_time());
        occurrence.ends_on = template.ends_on.map(|end| date.and_time(end.time()));
        occurrence
    }

    /// Date portion of `starts_on`.
    pub fn date(&self) -> NaiveDate {
        self.starts_on.date()
    }
}

/// A user known to the calendar, as needed by the digest job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub language: Option<String>,
    pub roles: Vec<String>,
    pub enabled: bool,
    /// Desk users as opposed to website/portal users.
    pub is_system_user: bool,
}

impl User {
    /// Creates an enabled system user with no roles.
    pub fn new(id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            language: None,
            roles: Vec::new(),
            enabled: true,
            is_system_user: true,
        }
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.roles.push(role.into());
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    pub fn website_user(mut self) -> Self {
        self.is_system_user = false;
        self
    }
}
