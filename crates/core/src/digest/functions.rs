use chrono::NaiveDate;

use super::{DigestItem, DigestMessage};
use crate::calendar::{Occurrence, User};

pub const DIGEST_SUBJECT: &str = "Upcoming Events for Today";
pub const DIGEST_HEADING: &str = "Events In Today's Calendar";
pub const DIGEST_FOOTER: &str =
    "Daily Event Digest is sent for Calendar Events where reminders are set.";

/// Builds the digest for `user`, or `None` when there is nothing to send.
///
/// `occurrences` are expected to be today's reminder-enabled occurrences for
/// this user, already sorted.
pub fn build_digest(
    user: &User,
    today: NaiveDate,
    occurrences: &[Occurrence],
) -> Option<DigestMessage> {
    if occurrences.is_empty() {
        return None;
    }

    let items = occurrences
        .iter()
        .map(|occurrence| DigestItem {
            when: format_when(occurrence, today),
            subject: occurrence.subject.clone(),
            description: occurrence.description.clone(),
        })
        .collect();

    Some(DigestMessage {
        user_id: user.id.clone(),
        recipient: user.email.clone(),
        language: user.language.clone(),
        date: today,
        subject: DIGEST_SUBJECT.to_string(),
        items,
    })
}

/// Display label for when an occurrence starts.
///
/// All-day occurrences read "All Day". Occurrences starting today show only
/// the time; ones carried over from an earlier day show the full timestamp.
pub fn format_when(occurrence: &Occurrence, today: NaiveDate) -> String {
    if occurrence.all_day {
        "All Day".to_string()
    } else if occurrence.date() == today {
        occurrence.starts_on.format("%H:%M").to_string()
    } else {
        occurrence.starts_on.format("%Y-%m-%d %H:%M").to_string()
    }
}
