//! Event handlers.
//!
//! Window queries return expanded occurrences; the single-event routes work
//! on stored templates.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use almanac_core::access::{can_modify, can_view, Viewer};
use almanac_core::calendar::{validate_event, CreateEventRequest, Occurrence, TemplateEvent};
use almanac_core::serde::deserialize_flag;
use almanac_core::storage::RepositoryError;

use crate::{
    context::{CurrentViewer, RequestContext},
    handlers::AppError,
    service::get_events,
    state::AppState,
};

/// Query parameters for listing occurrences.
#[derive(Debug, Deserialize)]
pub struct ListEventsQuery {
    /// First day of the window (ISO 8601: YYYY-MM-DD)
    pub start: NaiveDate,
    /// Last day of the window, inclusive
    pub end: NaiveDate,
    /// Only events that send reminders
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub for_reminder: bool,
}

fn not_found(id: Uuid) -> RepositoryError {
    RepositoryError::NotFound {
        entity_type: "Event",
        id: id.to_string(),
    }
}

fn forbidden(id: Uuid, viewer: &Viewer) -> RepositoryError {
    RepositoryError::Forbidden {
        entity_type: "Event",
        id: id.to_string(),
        user: viewer.user_id.clone(),
    }
}

/// Loads an event the viewer owns, or fails with 404/403.
async fn owned_event(
    state: &AppState,
    id: Uuid,
    viewer: &Viewer,
) -> Result<TemplateEvent, AppError> {
    let event = state
        .event_repo
        .get_event(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    if !can_modify(&event, viewer) {
        return Err(forbidden(id, viewer).into());
    }

    Ok(event)
}

/// List occurrences in a date window (GET /api/events).
pub async fn list_events(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Query(query): Query<ListEventsQuery>,
) -> Result<Json<Vec<Occurrence>>, AppError> {
    let occurrences = get_events(
        state.event_repo.as_ref(),
        query.start,
        query.end,
        &viewer,
        query.for_reminder,
    )
    .await?;

    Ok(Json(occurrences))
}

/// Get a stored event by ID (GET /api/events/{id}).
///
/// Events the caller may not see are reported as missing.
pub async fn get_event(
    State(state): State<AppState>,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<Uuid>,
) -> Result<Json<TemplateEvent>, AppError> {
    let event = state
        .event_repo
        .get_event(id)
        .await?
        .filter(|event| can_view(event, &viewer))
        .ok_or_else(|| not_found(id))?;

    Ok(Json(event))
}

/// Create a new event (POST /api/events).
pub async fn create_event(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentViewer(viewer): CurrentViewer,
    Json(payload): Json<CreateEventRequest>,
) -> Result<(StatusCode, Json<TemplateEvent>), AppError> {
    let event = payload.into_event(viewer.user_id);
    validate_event(&event)?;

    state.event_repo.create_event(&event).await?;

    tracing::info!(
        request_id = %ctx.request_id,
        event_id = %event.id,
        owner = %event.owner,
        recurring = event.is_recurring,
        "Created event"
    );

    Ok((StatusCode::CREATED, Json(event)))
}

/// Replace an event's details (PUT /api/events/{id}). Owner only.
pub async fn update_event(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<Uuid>,
    Json(payload): Json<CreateEventRequest>,
) -> Result<Json<TemplateEvent>, AppError> {
    let existing = owned_event(&state, id, &viewer).await?;

    let event = payload.into_event(existing.owner).with_id(id);
    validate_event(&event)?;

    state.event_repo.update_event(&event).await?;

    tracing::info!(request_id = %ctx.request_id, event_id = %id, "Updated event");

    Ok(Json(event))
}

/// Delete an event (DELETE /api/events/{id}). Owner only.
pub async fn delete_event(
    State(state): State<AppState>,
    ctx: RequestContext,
    CurrentViewer(viewer): CurrentViewer,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    owned_event(&state, id, &viewer).await?;

    state.event_repo.delete_event(id).await?;

    tracing::info!(request_id = %ctx.request_id, event_id = %id, "Deleted event");

    Ok(StatusCode::NO_CONTENT)
}
