//! Window queries and the daily digest job.
//!
//! These functions orchestrate the repositories and the pure core: fetch
//! candidates, expand them into occurrences, and build digests.

use chrono::NaiveDate;
use thiserror::Error;

use almanac_core::access::Viewer;
use almanac_core::calendar::{query_window, Occurrence};
use almanac_core::digest::{build_digest, Notifier};
use almanac_core::storage::{
    DateRange, DateRangeError, EventQuery, EventRepository, RepositoryError, UserRepository,
};

/// Errors raised by the service layer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    #[error(transparent)]
    InvalidRange(#[from] DateRangeError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Occurrences visible to `viewer` between `start` and `end`, inclusive.
///
/// Rejects `start > end` before touching the store. With `for_reminder`
/// only events that send reminders are returned.
pub async fn get_events(
    repo: &dyn EventRepository,
    start: NaiveDate,
    end: NaiveDate,
    viewer: &Viewer,
    for_reminder: bool,
) -> Result<Vec<Occurrence>, ServiceError> {
    let range = DateRange::new(start, end)?;
    let query = EventQuery::new(range, viewer.clone()).reminders_only(for_reminder);

    let candidates = repo.find_candidates(&query).await?;
    let occurrences = query_window(range, &candidates);

    tracing::debug!(
        user = %viewer.user_id,
        %start,
        %end,
        candidates = candidates.len(),
        occurrences = occurrences.len(),
        "Window query"
    );

    Ok(occurrences)
}

/// Outcome of one digest run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DigestReport {
    /// Digests delivered.
    pub sent: usize,
    /// Recipients with nothing on their calendar today.
    pub skipped: usize,
    /// Recipients whose query or delivery failed.
    pub failed: usize,
}

/// Send today's reminder digest to every digest recipient.
///
/// A failure for one recipient is logged and counted; the remaining
/// recipients are still processed. Only listing the recipients can fail
/// the whole run.
pub async fn send_event_digest(
    today: NaiveDate,
    users: &dyn UserRepository,
    events: &dyn EventRepository,
    notifier: &dyn Notifier,
) -> Result<DigestReport, ServiceError> {
    let recipients = users.list_digest_recipients().await?;
    let mut report = DigestReport::default();

    for user in &recipients {
        let viewer = Viewer::from(user);
        let occurrences = match get_events(events, today, today, &viewer, true).await {
            Ok(occurrences) => occurrences,
            Err(err) => {
                tracing::error!(user = %user.id, error = %err, "Failed to query digest events");
                report.failed += 1;
                continue;
            }
        };

        let Some(message) = build_digest(user, today, &occurrences) else {
            report.skipped += 1;
            continue;
        };

        match notifier.send(&message).await {
            Ok(()) => report.sent += 1,
            Err(err) => {
                tracing::error!(user = %user.id, error = %err, "Failed to send digest");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        %today,
        sent = report.sent,
        skipped = report.skipped,
        failed = report.failed,
        "Digest run finished"
    );

    Ok(report)
}
