//! Request and response types for the REST API.

use serde::{Deserialize, Serialize};

pub use crate::error::ErrorResponse;

/// `?email=` query parameter for signup/unregister
#[derive(Debug, Default, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

/// JSON body form of the email, as posted by the bundled front-end
#[derive(Debug, Default, Deserialize)]
pub struct EmailBody {
    pub email: Option<String>,
}

/// Confirmation returned by signup/unregister
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub activities: usize,
}
