// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_service::DashboardService;
use crate::application::session::DashboardSession;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::simulated_repository::SimulatedAnalytics;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("clickanalyst=info,tower_http=info")),
        )
        .init();

    // Load configuration
    let app_config = load_app_config()?;
    let initial_layout = app_config.layout.into_configuration()?;

    // Create repository (infrastructure layer)
    let repository = Arc::new(SimulatedAnalytics::new(app_config.simulation.seed));

    // Create services (application layer)
    let dashboard_service = DashboardService::new(repository);
    let session = DashboardSession::new(initial_layout);

    let state = Arc::new(AppState::new(dashboard_service, session));
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting clickanalyst dashboard service on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router).await?;

    Ok(())
}
