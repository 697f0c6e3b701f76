//! Geohazard survey planning server.

use anyhow::{Context, Result};
use ghz_core::ranking::DroneRanker;
use ghz_core::{DroneCatalog, MissionPlanner, SensorCatalog};
use ghz_server::{api, config::Config, state::AppState};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env()
            .add_directive("ghz_server=debug".parse()?))
        .init();

    tracing::info!("Starting geohazard planning server...");

    let config = Config::from_env();

    let drones = DroneCatalog::from_path(&config.drone_catalog_path)
        .with_context(|| format!("loading drone catalog {}", config.drone_catalog_path))?;
    let sensors = SensorCatalog::from_path(&config.sensor_catalog_path)
        .with_context(|| format!("loading sensor catalog {}", config.sensor_catalog_path))?;
    tracing::info!(
        "Loaded {} drones and {} sensors",
        drones.len(),
        sensors.len()
    );
    if drones.is_empty() {
        tracing::warn!("Drone catalog is empty, every mission will have no candidates");
    }

    let ranker = DroneRanker::new(config.top_n, config.jitter);
    let planner = MissionPlanner::with_ranker(drones, sensors, ranker);
    let state = Arc::new(AppState::new(planner, config.jitter_seed));

    let app = api::routes()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Run server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
