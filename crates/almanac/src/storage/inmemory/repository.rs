//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use almanac_core::access::can_view;
use almanac_core::calendar::{is_candidate, TemplateEvent, User, UserId};
use almanac_core::storage::{
    EventQuery, EventRepository, RepositoryError, Result, UserRepository, STANDARD_USERS,
};

/// In-memory storage backend.
///
/// Uses HashMaps wrapped in `Arc<RwLock<_>>` for thread-safe access.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    events: Arc<RwLock<HashMap<Uuid, TemplateEvent>>>,
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EventRepository for InMemoryRepository {
    async fn get_event(&self, id: Uuid) -> Result<Option<TemplateEvent>> {
        let events = self.events.read().await;
        Ok(events.get(&id).cloned())
    }

    async fn find_candidates(&self, query: &EventQuery) -> Result<Vec<TemplateEvent>> {
        let events = self.events.read().await;
        let mut candidates: Vec<TemplateEvent> = events
            .values()
            .filter(|e| is_candidate(e, query.range))
            .filter(|e| !query.reminders_only || e.send_reminder)
            .filter(|e| can_view(e, &query.viewer))
            .cloned()
            .collect();
        candidates.sort_by(|a, b| a.starts_on.cmp(&b.starts_on).then(a.id.cmp(&b.id)));
        Ok(candidates)
    }

    async fn create_event(&self, event: &TemplateEvent) -> Result<()> {
        let mut events = self.events.write().await;
        if events.contains_key(&event.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn update_event(&self, event: &TemplateEvent) -> Result<()> {
        let mut events = self.events.write().await;
        if !events.contains_key(&event.id) {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: event.id.to_string(),
            });
        }
        events.insert(event.id, event.clone());
        Ok(())
    }

    async fn delete_event(&self, id: Uuid) -> Result<()> {
        let mut events = self.events.write().await;
        if events.remove(&id).is_none() {
            return Err(RepositoryError::NotFound {
                entity_type: "Event",
                id: id.to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl UserRepository for InMemoryRepository {
    async fn get_user(&self, id: &str) -> Result<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn list_digest_recipients(&self) -> Result<Vec<User>> {
        let users = self.users.read().await;
        let mut recipients: Vec<User> = users
            .values()
            .filter(|u| u.enabled && u.is_system_user)
            .filter(|u| !STANDARD_USERS.contains(&u.id.as_str()))
            .cloned()
            .collect();
        recipients.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(recipients)
    }

    async fn create_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(RepositoryError::AlreadyExists {
                entity_type: "User",
                id: user.id.clone(),
            });
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}
