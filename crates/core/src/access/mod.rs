//! Visibility rules for events.
//!
//! Stores apply these predicates when answering candidate queries; the
//! expansion engine only ever sees events that already passed them.

mod functions;
mod types;

pub use functions::{can_modify, can_view};
pub use types::Viewer;
