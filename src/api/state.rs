//! API state.
//!
//! Contains the shared state used across all API endpoints.

use crate::registry::ActivityRegistry;
use std::sync::Arc;

/// State handed to every handler
pub struct ApiState {
    pub registry: ActivityRegistry,
}

impl ApiState {
    pub fn new(registry: ActivityRegistry) -> Arc<Self> {
        Arc::new(Self { registry })
    }
}
