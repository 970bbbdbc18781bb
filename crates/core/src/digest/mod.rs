//! Daily event digest.
//!
//! Builds the per-user summary of today's occurrences. Rendering and delivery
//! belong to the [`Notifier`] implementation.

mod error;
mod functions;
mod traits;
mod types;

pub use error::NotifyError;
pub use functions::{build_digest, format_when, DIGEST_FOOTER, DIGEST_HEADING, DIGEST_SUBJECT};
pub use traits::Notifier;
pub use types::{DigestItem, DigestMessage};
