//! Activity Signup Server
//!
//! Wires the REST API, the static front-end and the HTTP layers together:
//!
//! ```text
//! GET  /                              -> 307 /static/index.html
//! GET  /health                        -> service status
//! GET  /activities                    -> every activity, catalog order
//! GET  /activities/:name              -> one activity
//! POST /activities/:name/signup       -> add ?email= to the roster
//! POST /activities/:name/unregister   -> remove ?email= from the roster
//! GET  /static/*                      -> front-end files
//! ```

use crate::api::{self, routes::public, ApiState};
use crate::config::ServerConfig;
use axum::Router;
use std::path::Path;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Build the full application router
pub fn build_app(state: Arc<ApiState>, static_dir: &Path) -> Router {
    api::router(state)
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(public::not_found)
        .method_not_allowed_fallback(public::method_not_allowed)
        .layer(
            ServiceBuilder::new().layer(TraceLayer::new_for_http()).layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            ),
        )
}

/// Load the catalog, bind the listener and serve until shutdown
pub async fn run_server(config: ServerConfig) -> anyhow::Result<()> {
    let registry = config.build_registry()?;
    let activity_count = registry.len();
    let state = ApiState::new(registry);

    let app = build_app(state, &config.static_dir);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    let capacity = if config.enforce_capacity {
        "enforced"
    } else {
        "informational"
    };

    info!("╔══════════════════════════════════════════════════════════════╗");
    info!("║          Mergington High School Activity Signup              ║");
    info!("╠══════════════════════════════════════════════════════════════╣");
    info!("║  Listening on: {:46}║", addr);
    info!("║  Activities:   {:46}║", activity_count);
    info!("║  Static dir:   {:46}║", config.static_dir.display().to_string());
    info!("║  Capacity:     {:46}║", capacity);
    info!("╚══════════════════════════════════════════════════════════════╝");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
