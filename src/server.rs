use anyhow::Result;
use arc_swap::ArcSwap;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::{
    config::Config,
    handlers::{self, AppState},
    rates::{RateService, RateUpdater},
    signals::setup_signal_handlers,
};

/// Start the estimator server
///
/// This function:
/// 1. Sets up signal handlers for graceful shutdown and config reload
/// 2. Spawns the background rate updater
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config, config_path: PathBuf) -> Result<()> {
    // Wrap config in ArcSwap for atomic reload support
    let config_swap = Arc::new(ArcSwap::from_pointee(config.clone()));

    // Setup signal handlers (SIGTERM, SIGINT for shutdown; SIGHUP for reload)
    let (shutdown_tx, signal_handle) = setup_signal_handlers(config_swap.clone(), config_path);
    let mut shutdown_rx = shutdown_tx.subscribe();

    // Spawn the rate updater; estimates decline until its first fetch lands
    let rate_service = Arc::new(RateService::new());
    let updater = Arc::new(RateUpdater::new(rate_service.clone(), config_swap.clone()));
    tokio::spawn({
        let updater = updater.clone();
        async move {
            updater.start_background_task().await;
        }
    });

    let app_state = AppState {
        config: config_swap.clone(),
        rates: rate_service,
    };

    // Build the Axum router
    let app = create_router(app_state);

    // Create socket address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting customs estimator on {}", addr);
    info!(
        "Rate feed: {} (refresh every {}s)",
        config.feed.url, config.feed.refresh_interval_secs
    );

    // Bind to address
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Serve with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            // Wait for shutdown signal
            let _ = shutdown_rx.recv().await;
            info!("Shutdown signal received, draining connections...");
        })
        .await?;

    // Wait for signal handler task to complete
    signal_handle.await?;
    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/v1/estimate", post(handlers::estimate::handle_estimate))
        .route("/v1/rates", get(handlers::rates::handle_rates))
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        .with_state(app_state)
        // Estimate payloads are a handful of fields; anything larger is noise
        .layer(DefaultBodyLimit::max(64 * 1024))
        // The estimate API is called from the public website
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
