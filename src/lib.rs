pub mod config;
pub mod error;
pub mod estimator;
pub mod handlers;
pub mod rates;
pub mod server;
pub mod signals;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
