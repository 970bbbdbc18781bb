//! Axum extractors for RequestContext and CurrentViewer.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{request::Parts, HeaderMap, StatusCode},
};
use uuid::Uuid;

use almanac_core::access::Viewer;

use super::types::{CurrentViewer, RequestContext, RequestId};

const USER_ID_HEADER: &str = "x-user-id";
const USER_ROLES_HEADER: &str = "x-user-roles";

fn extract_request_id(headers: &HeaderMap) -> RequestId {
    headers
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .map(RequestId::from_uuid)
        .unwrap_or_else(RequestId::new)
}

/// Reads the acting identity from `x-user-id` and `x-user-roles`.
///
/// Roles are a comma-separated list; blank entries are dropped.
fn extract_viewer(headers: &HeaderMap) -> Option<Viewer> {
    let user_id = headers
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())?;

    let roles = headers
        .get(USER_ROLES_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|role| !role.is_empty())
                .map(String::from)
                .collect::<Vec<_>>()
        })
        .unwrap_or_default();

    Some(Viewer::new(user_id).with_roles(roles))
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(RequestContext {
            viewer: extract_viewer(&parts.headers),
            request_id: extract_request_id(&parts.headers),
        })
    }
}

impl<S> FromRequestParts<S> for CurrentViewer
where
    S: Send + Sync,
{
    type Rejection = (StatusCode, &'static str);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Ok(ctx) = RequestContext::from_request_parts(parts, state).await;

        match ctx.viewer {
            Some(viewer) => Ok(CurrentViewer(viewer)),
            None => {
                tracing::warn!(request_id = %ctx.request_id, "Request without x-user-id");
                Err((StatusCode::UNAUTHORIZED, "Missing x-user-id header"))
            }
        }
    }
}
