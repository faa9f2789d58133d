//! Public endpoints.
//!
//! Root redirect to the front-end, health check and the JSON 404 fallback.

use crate::api::state::ApiState;
use crate::api::types::{ErrorResponse, HealthResponse};
use axum::{extract::State, http::StatusCode, response::Redirect, Json};
use std::sync::Arc;

/// Location of the bundled front-end page
pub const INDEX_PATH: &str = "/static/index.html";

/// GET / - 307 to the front-end page
pub async fn root_redirect() -> Redirect {
    Redirect::temporary(INDEX_PATH)
}

/// GET /health
pub async fn health_check(State(state): State<Arc<ApiState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        activities: state.registry.len(),
    })
}

pub async fn not_found() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            detail: "Not Found".to_string(),
        }),
    )
}

pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse {
            detail: "Method Not Allowed".to_string(),
        }),
    )
}
