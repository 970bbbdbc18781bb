mod error;
mod http_mapping;
mod traits;
mod types;

pub use error::{DateRangeError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use traits::{EventRepository, UserRepository};
pub use types::{DateRange, EventQuery};

/// Accounts that exist on every installation and never receive digests.
pub const STANDARD_USERS: [&str; 2] = ["Guest", "Administrator"];
