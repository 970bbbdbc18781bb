//! Application state with repository-based storage.
//!
//! This module defines the shared application state that is passed to all
//! request handlers. It holds repository and notifier trait objects so the
//! handlers never depend on a concrete backend.

use std::sync::Arc;

use chrono::NaiveDate;

use almanac_core::calendar::{generate_seed_events, User};
use almanac_core::digest::Notifier;
use almanac_core::storage::{EventRepository, RepositoryError, UserRepository};

use crate::config::Config;
use crate::digest::LogNotifier;
use crate::storage::InMemoryRepository;

/// Owner of the seeded demo events.
pub const DEMO_USER: &str = "demo";

/// Shared application state.
///
/// This is cloned for each request handler and contains shared resources
/// including repository trait objects for storage access.
#[derive(Clone)]
pub struct AppState {
    /// Event repository.
    pub event_repo: Arc<dyn EventRepository>,
    /// User repository, used by the digest job.
    pub user_repo: Arc<dyn UserRepository>,
    /// Digest delivery channel.
    pub notifier: Arc<dyn Notifier>,
    /// Runtime configuration.
    pub config: Config,
}

impl AppState {
    /// Creates state backed by an empty in-memory store.
    pub fn new(config: Config) -> Self {
        let repo = Arc::new(InMemoryRepository::new());
        let notifier = Arc::new(LogNotifier::new(config.digest_sender.clone()));

        Self {
            event_repo: repo.clone(),
            user_repo: repo,
            notifier,
            config,
        }
    }

    /// Creates state and seeds it with demo users and events centered on `today`.
    pub async fn with_demo_data(config: Config, today: NaiveDate) -> Result<Self, RepositoryError> {
        let state = Self::new(config);

        for user in [
            User::new(DEMO_USER, "demo@almanac.local"),
            User::new("accounts", "accounts@almanac.local").with_role("Accounts Manager"),
            User::new("Administrator", "admin@almanac.local"),
            User::new("Guest", "guest@almanac.local"),
        ] {
            state.user_repo.create_user(&user).await?;
        }

        let events = generate_seed_events(DEMO_USER, today);
        for event in &events {
            state.event_repo.create_event(event).await?;
        }

        tracing::info!(events = events.len(), "Seeded demo data");

        Ok(state)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Config::default())
    }
}
