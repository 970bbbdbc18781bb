//! Mock data generation for testing and seeding.
//!
//! This module contains pure functions for generating mock events. These
//! functions have no side effects and can be used in unit tests, integration
//! tests, and seeding the in-memory store.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use super::recurrence::RecurrenceRule;
use super::types::TemplateEvent;

/// Generate demo events around a center date.
///
/// Produces a mix covering every recurrence kind:
/// - one-shot events a few days either side of `center_date`
/// - a yearly anniversary, a monthly report, a weekly review
/// - a daily (Mon/Wed/Fri) workout with a reminder
/// - a public all-day holiday and an event shared with a role
///
/// # Example
///
/// ```
/// use almanac_core::calendar::generate_seed_events;
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let events = generate_seed_events("Administrator", center);
///
/// assert!(events.iter().any(|e| e.is_recurring));
/// assert!(events.iter().all(|e| e.owner == "Administrator"));
/// ```
pub fn generate_seed_events(owner: &str, center_date: NaiveDate) -> Vec<TemplateEvent> {
    let at = |date: NaiveDate, hour: u32, min: u32| -> NaiveDateTime {
        date.and_time(NaiveTime::from_hms_opt(hour, min, 0).unwrap_or(NaiveTime::MIN))
    };
    let month_start = center_date.with_day(1).unwrap_or(center_date);

    let one_shot_subjects = ["Dentist", "Coffee with Ana", "Quarterly Planning", "Car Service"];
    let mut events: Vec<TemplateEvent> = one_shot_subjects
        .iter()
        .enumerate()
        .map(|(i, subject)| {
            let date = center_date + Duration::days(i as i64 * 3 - 4);
            let hour = 9 + i as u32 * 2;
            TemplateEvent::new(owner, *subject, at(date, hour, 0)).with_end(at(date, hour + 1, 0))
        })
        .collect();

    events.push(
        TemplateEvent::new(owner, "Company Anniversary", at(month_start, 0, 0))
            .all_day()
            .public()
            .recurring(RecurrenceRule::yearly()),
    );
    events.push(
        TemplateEvent::new(owner, "Monthly Report", at(month_start - Duration::days(62), 15, 0))
            .with_end(at(month_start - Duration::days(62), 16, 0))
            .with_description("Send the monthly numbers to finance")
            .recurring(RecurrenceRule::monthly())
            .shared_with_role("Accounts Manager"),
    );
    events.push(
        TemplateEvent::new(owner, "Weekly Review", at(center_date - Duration::days(21), 17, 0))
            .with_end(at(center_date - Duration::days(21), 17, 30))
            .recurring(RecurrenceRule::weekly())
            .with_reminder(),
    );
    events.push(
        TemplateEvent::new(owner, "Workout", at(center_date - Duration::days(30), 7, 0))
            .with_end(at(center_date - Duration::days(30), 8, 0))
            .recurring(RecurrenceRule::daily(&[Weekday::Mon, Weekday::Wed, Weekday::Fri]))
            .repeat_till(center_date + Duration::days(60))
            .with_reminder(),
    );
    events.push(
        TemplateEvent::new(owner, "Public Holiday", at(center_date + Duration::days(10), 0, 0))
            .all_day()
            .public()
            .with_reminder(),
    );

    events
}
