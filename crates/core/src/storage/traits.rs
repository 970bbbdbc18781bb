use async_trait::async_trait;
use uuid::Uuid;

use crate::calendar::{TemplateEvent, User};

use super::{EventQuery, Result};

/// Repository for stored events.
#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Gets an event by its ID.
    async fn get_event(&self, id: Uuid) -> Result<Option<TemplateEvent>>;

    /// Gets the events that may have occurrences in the query window and
    /// that the query's viewer is allowed to see.
    ///
    /// Recurring templates are returned unexpanded.
    async fn find_candidates(&self, query: &EventQuery) -> Result<Vec<TemplateEvent>>;

    /// Creates a new event.
    async fn create_event(&self, event: &TemplateEvent) -> Result<()>;

    /// Updates an existing event.
    async fn update_event(&self, event: &TemplateEvent) -> Result<()>;

    /// Deletes an event by its ID.
    async fn delete_event(&self, id: Uuid) -> Result<()>;
}

/// Repository for user operations.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Gets a user by their login name.
    async fn get_user(&self, id: &str) -> Result<Option<User>>;

    /// Gets the users who receive the daily event digest: enabled system
    /// users other than the built-in accounts.
    async fn list_digest_recipients(&self) -> Result<Vec<User>>;

    /// Creates a new user.
    async fn create_user(&self, user: &User) -> Result<()>;
}
