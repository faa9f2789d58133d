//! API route handlers.
//!
//! Each submodule handles a specific group of endpoints:
//! - `activities`: Activity listing, signup and unregister
//! - `public`: Root redirect, health check, unknown routes

pub mod activities;
pub mod public;

use crate::api::state::ApiState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

/// Create the API router
pub fn router(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/", get(public::root_redirect))
        .route("/health", get(public::health_check))
        // Activities
        .route("/activities", get(activities::list_activities))
        .route("/activities/:activity_name", get(activities::get_activity))
        .route(
            "/activities/:activity_name/signup",
            post(activities::signup_for_activity),
        )
        .route(
            "/activities/:activity_name/unregister",
            post(activities::unregister_from_activity),
        )
        .with_state(state)
}
