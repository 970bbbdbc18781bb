use thiserror::Error;

/// Errors raised by calendar date construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid calendar date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
}

/// Errors that can occur when validating an event before it is stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event subject cannot be empty")]
    EmptySubject,
    #[error("Event subject too long (max 140 characters)")]
    SubjectTooLong,
    #[error("Event end must be after start")]
    EndBeforeStart,
    #[error("Recurring event requires a recurrence rule")]
    MissingRecurrence,
    #[error("Recurrence rule set on a non-recurring event")]
    UnexpectedRecurrence,
    #[error("Repeat-till date must not be before the event start")]
    RepeatTillBeforeStart,
}

/// Errors that can occur when parsing recurrence rules.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecurrenceError {
    #[error("Unknown recurrence kind: {0}")]
    UnknownKind(String),
}

/// Errors raised when a template cannot be expanded.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExpandError {
    #[error("Event {0} is not recurring")]
    NotRecurring(String),
    #[error("Recurring event {0} has no recurrence rule")]
    MissingRecurrence(String),
}
