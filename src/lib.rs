//! Mergington High School activity signup service
//!
//! A small HTTP service backed by an in-memory registry of extracurricular
//! activities. Students list activities, sign up, and unregister by email.
//!
//! ## Module Structure
//!
//! - `activity`: Activity record and the seed catalog
//! - `registry`: The activity registry (list / signup / unregister)
//! - `error`: Registry errors and their HTTP mapping
//! - `config`: Server configuration and catalog loading
//! - `api`: REST API handlers and router
//! - `server`: HTTP server bootstrap

pub mod activity;
pub mod api;
pub mod config;
pub mod error;
pub mod registry;
pub mod server;

pub use activity::{default_catalog, Activity, ActivityCatalog};
pub use api::ApiState;
pub use config::{load_catalog, ServerConfig};
pub use error::{ErrorResponse, RegistryError, RegistryResult};
pub use registry::ActivityRegistry;
pub use server::{build_app, run_server};
