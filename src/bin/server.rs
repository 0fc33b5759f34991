//! Flightdesk HTTP Server Binary
//!
//! This is the main entry point for the flightdesk REST API server.
//! It initializes the ledger, optionally loads a seed dataset, sets up the
//! HTTP router, and starts serving requests.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin flightdesk-server --features "local-repo,http-server"
//!
//! # With a seed dataset
//! SEED_DATA=data/seed.json cargo run --bin flightdesk-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `SEED_DATA`: Path to a JSON seed dataset loaded at startup (optional)
//! - `FLIGHTDESK_CONFIG`: Path to a TOML config file overriding the above
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use flightdesk::config::ServerConfig;
use flightdesk::db;
use flightdesk::http::{create_router, AppState};
use flightdesk::models::dataset;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting flightdesk HTTP server");

    let config = ServerConfig::resolve().map_err(anyhow::Error::msg)?;

    // Initialize global repository once and reuse it across the app
    db::init_repository()?;
    let repository = std::sync::Arc::clone(db::get_repository()?);
    info!("Ledger initialized successfully");

    // Load seed data when configured
    if let Some(seed_path) = &config.seed_data {
        let payload = std::fs::read_to_string(seed_path)?;
        let parsed = dataset::parse_dataset_json_str(&payload)?;
        let summary = dataset::load_dataset(repository.as_ref(), &parsed).await?;
        info!(
            "Seed dataset loaded (checksum {}): {} airports, {} flights, {} passengers, {} bookings applied, {} rejected",
            parsed.checksum,
            summary.airports,
            summary.flights,
            summary.passengers,
            summary.bookings_applied,
            summary.bookings_rejected,
        );
    }

    // Create application state
    let state = AppState::new(repository);

    // Create router with all endpoints
    let app = create_router(state);

    let addr: SocketAddr = config.bind_addr().parse()?;

    info!("Server listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
