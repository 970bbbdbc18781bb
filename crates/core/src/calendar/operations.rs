use chrono::NaiveDate;

use super::error::EventError;
use super::types::TemplateEvent;
use crate::storage::DateRange;

/// Stand-in for an unbounded `repeat_till` when matching candidates.
pub fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(3000, 1, 1).unwrap_or(NaiveDate::MAX)
}

/// Validates an event before creation or update.
pub fn validate_event(event: &TemplateEvent) -> Result<(), EventError> {
    if event.subject.trim().is_empty() {
        return Err(EventError::EmptySubject);
    }
    if event.subject.chars().count() > 140 {
        return Err(EventError::SubjectTooLong);
    }
    if event.ends_on.is_some_and(|end| end < event.starts_on) {
        return Err(EventError::EndBeforeStart);
    }
    match (event.is_recurring, event.recurrence.is_some()) {
        (true, false) => return Err(EventError::MissingRecurrence),
        (false, true) => return Err(EventError::UnexpectedRecurrence),
        _ => {}
    }
    if event
        .repeat_till
        .is_some_and(|till| till < event.anchor_date())
    {
        return Err(EventError::RepeatTillBeforeStart);
    }
    Ok(())
}

/// Coarse date match used by stores to pick candidate events for a window.
///
/// One-shot events match when their start or end date lies in the window, or
/// when they span all of it. Recurring events additionally match when they
/// started on or before the window and have not expired before its first day.
/// Expansion decides which recurring candidates actually produce occurrences.
pub fn is_candidate(event: &TemplateEvent, range: DateRange) -> bool {
    let start = event.starts_on.date();
    let end = event.ends_on.map(|end| end.date());

    let overlaps = range.contains(start)
        || end.is_some_and(|end| range.contains(end))
        || end.is_some_and(|end| start <= range.start && end >= range.end);

    let active_recurrence = event.is_recurring
        && start <= range.start
        && event.repeat_till.unwrap_or_else(far_future) >= range.start;

    overlaps || active_recurrence
}
