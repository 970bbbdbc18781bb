//! Window query orchestration.
//!
//! Merges one-shot events with the expanded occurrences of recurring ones.
//! Candidates arrive already filtered by the store (access rules and a coarse
//! date match), so one-shot events pass through unchanged.

use super::expand::expand;
use super::types::{Occurrence, TemplateEvent};
use crate::storage::DateRange;

/// Resolves `candidates` into the occurrences visible in `window`.
///
/// Recurring templates never appear themselves, only their occurrences. A
/// template that cannot be expanded is skipped so the rest of the window still
/// renders. The result is sorted by `starts_on`; ties keep candidate order.
pub fn query_window(window: DateRange, candidates: &[TemplateEvent]) -> Vec<Occurrence> {
    let (recurring, one_shot): (Vec<&TemplateEvent>, Vec<&TemplateEvent>) =
        candidates.iter().partition(|event| event.is_recurring);

    let mut occurrences: Vec<Occurrence> =
        one_shot.into_iter().map(Occurrence::from_template).collect();

    for template in recurring {
        match expand(template, window) {
            Ok(expanded) => {
                tracing::debug!(
                    event_id = %template.id,
                    count = expanded.len(),
                    "Expanded recurring event"
                );
                occurrences.extend(expanded);
            }
            Err(error) => {
                tracing::warn!(event_id = %template.id, error = %error, "Skipping malformed event");
            }
        }
    }

    occurrences.sort_by_key(|occurrence| occurrence.starts_on);
    occurrences
}
