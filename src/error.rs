//! Error types for the activity registry

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Result type for registry operations
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Errors that can occur in the activity registry
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound(String),

    #[error("{email} is already signed up for {activity}")]
    AlreadyRegistered { email: String, activity: String },

    #[error("{email} is not registered for {activity}")]
    NotRegistered { email: String, activity: String },

    #[error("{0} is full")]
    ActivityFull(String),

    #[error("email is required")]
    MissingEmail,

    /// Malformed path or query string
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid activity catalog: {0}")]
    InvalidCatalog(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RegistryError {
    /// HTTP status this error maps to when surfaced to a caller
    pub fn status_code(&self) -> StatusCode {
        match self {
            RegistryError::NotFound(_) => StatusCode::NOT_FOUND,
            RegistryError::AlreadyRegistered { .. }
            | RegistryError::NotRegistered { .. }
            | RegistryError::ActivityFull(_)
            | RegistryError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RegistryError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            RegistryError::InvalidCatalog(_)
            | RegistryError::Serialization(_)
            | RegistryError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error body returned for every failed request
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub detail: String,
}

impl IntoResponse for RegistryError {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            detail: self.to_string(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}

impl From<PathRejection> for RegistryError {
    fn from(rejection: PathRejection) -> Self {
        RegistryError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for RegistryError {
    fn from(rejection: QueryRejection) -> Self {
        RegistryError::BadRequest(rejection.body_text())
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        RegistryError::Internal(err.to_string())
    }
}

impl From<serde_json::Error> for RegistryError {
    fn from(err: serde_json::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for RegistryError {
    fn from(err: toml::de::Error) -> Self {
        RegistryError::Serialization(err.to_string())
    }
}
