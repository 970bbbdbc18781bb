mod dates;
mod error;
mod expand;
mod mock_data;
mod operations;
mod query;
mod recurrence;
mod requests;
mod types;

pub use dates::{add_days, add_months, date_from_ymd, inclusive_day_count, shift_month, weekday_of};
pub use error::{DateError, EventError, ExpandError, RecurrenceError};
pub use expand::expand;
pub use mock_data::generate_seed_events;
pub use operations::{far_future, is_candidate, validate_event};
pub use query::query_window;
pub use recurrence::{RecurrenceKind, RecurrenceRule, WeekdayMask};
pub use requests::CreateEventRequest;
pub use types::{EventShares, Occurrence, TemplateEvent, User, UserId, Visibility};
