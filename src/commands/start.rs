use anyhow::Result;
use colored::Colorize;
use customs_estimator::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads the configuration and runs the server until shutdown.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting estimator in foreground mode...".green());

    // Load configuration
    let cfg = config::load_config(config_path)?;

    info!("Starting customs estimator");

    // Start the server (blocks until shutdown)
    server::start_server(cfg, config_path.to_path_buf()).await?;

    Ok(())
}
