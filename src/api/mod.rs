//! REST API implementation.

pub mod routes;
pub mod state;
pub mod types;

pub use routes::router;
pub use state::ApiState;
