//! Salon HTTP Server Binary
//!
//! This is the main entry point for the salon REST API server.
//! It initializes the repository, sets up the HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin salon-server
//!
//! # Seed from an agenda file instead of the built-in demo data
//! AGENDA_FILE=demo-agenda.json cargo run --bin salon-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `AGENDA_FILE`: Optional JSON agenda seed for one salon
//! - `RUST_LOG`: Log filter directives (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use salon_rust::db::LocalRepository;
use salon_rust::http::{create_router, AppState};
use salon_rust::models::{demo_agenda, parse_agenda_json_file};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging; RUST_LOG accepts full filter directives.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting salon HTTP server");

    let repository = LocalRepository::new();
    seed_repository(&repository)?;
    info!(salons = repository.salon_count(), "Repository initialized");

    // Create application state
    let state = AppState::new(std::sync::Arc::new(repository));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health endpoint: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Seed the in-memory repository, either from `AGENDA_FILE` or from the
/// built-in demo agenda, which carries appointments for the current day
/// so the default server serves a populated grid.
fn seed_repository(repository: &LocalRepository) -> anyhow::Result<()> {
    let (agenda, source) = match env::var("AGENDA_FILE") {
        Ok(path) => (parse_agenda_json_file(&path)?, path),
        Err(_) => (demo_agenda(), "built-in demo agenda".to_string()),
    };
    let salon_id = repository.load_agenda(agenda);
    info!(agenda = %source, %salon_id, "Seeded repository");
    Ok(())
}
