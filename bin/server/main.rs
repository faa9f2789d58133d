//! Activity Signup Server
//!
//! Runs the Mergington High School activity signup service as a standalone
//! HTTP server.

use anyhow::Result;
use clap::Parser;
use mergington_activities::{run_server, ServerConfig};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "activities-server")]
#[command(about = "Mergington High School activity signup server")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "8000", env = "ACTIVITIES_PORT")]
    port: u16,

    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "ACTIVITIES_HOST")]
    host: String,

    /// Directory served under /static
    #[arg(long, default_value = "static", env = "STATIC_DIR")]
    static_dir: PathBuf,

    /// Seed catalog file (JSON, or TOML with a .toml extension)
    #[arg(long, env = "ACTIVITIES_CATALOG")]
    catalog: Option<PathBuf>,

    /// Reject signups once an activity is full
    #[arg(long, env = "ENFORCE_CAPACITY")]
    enforce_capacity: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&args.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    info!("Starting activity signup server");
    if let Some(catalog) = &args.catalog {
        info!("  Catalog: {}", catalog.display());
    }

    let config = ServerConfig {
        host: args.host,
        port: args.port,
        static_dir: args.static_dir,
        catalog_path: args.catalog,
        enforce_capacity: args.enforce_capacity,
    };

    run_server(config).await
}
