//! Activity endpoints.
//!
//! Thin adapters over [`ActivityRegistry`](crate::registry::ActivityRegistry):
//! extract the activity name and email, call the registry, serialize the
//! outcome. Registry errors and extractor rejections both render as
//! `{"detail": ...}`.

use crate::activity::{Activity, ActivityCatalog};
use crate::api::state::ApiState;
use crate::api::types::{EmailBody, EmailQuery, MessageResponse};
use crate::error::{RegistryError, RegistryResult};
use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use std::sync::Arc;
use tracing::warn;

/// GET /activities
pub async fn list_activities(State(state): State<Arc<ApiState>>) -> Json<ActivityCatalog> {
    Json(state.registry.list())
}

/// GET /activities/:activity_name
pub async fn get_activity(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<String>, PathRejection>,
) -> RegistryResult<Json<Activity>> {
    let Path(activity_name) = path?;
    state.registry.get(&activity_name).map(Json)
}

/// POST /activities/:activity_name/signup?email=...
pub async fn signup_for_activity(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    body: Option<Json<EmailBody>>,
) -> RegistryResult<Json<MessageResponse>> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = resolve_email(query, body)?;

    let message = state
        .registry
        .signup(&activity_name, &email)
        .inspect_err(|e| {
            warn!(activity = %activity_name, email = %email, "Signup failed: {}", e)
        })?;

    Ok(Json(MessageResponse { message }))
}

/// POST /activities/:activity_name/unregister?email=...
pub async fn unregister_from_activity(
    State(state): State<Arc<ApiState>>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<EmailQuery>, QueryRejection>,
    body: Option<Json<EmailBody>>,
) -> RegistryResult<Json<MessageResponse>> {
    let Path(activity_name) = path?;
    let Query(query) = query?;
    let email = resolve_email(query, body)?;

    let message = state
        .registry
        .unregister(&activity_name, &email)
        .inspect_err(|e| {
            warn!(activity = %activity_name, email = %email, "Unregister failed: {}", e)
        })?;

    Ok(Json(MessageResponse { message }))
}

/// A non-blank query parameter wins over the JSON body. Only presence is
/// checked; the email is kept exactly as submitted.
fn resolve_email(query: EmailQuery, body: Option<Json<EmailBody>>) -> RegistryResult<String> {
    non_blank(query.email)
        .or_else(|| body.and_then(|Json(b)| non_blank(b.email)))
        .ok_or(RegistryError::MissingEmail)
}

fn non_blank(email: Option<String>) -> Option<String> {
    email.filter(|e| !e.trim().is_empty())
}
