use anyhow::Result;
use colored::Colorize;
use customs_estimator::config;
use std::path::Path;
use tracing::info;

/// Execute the test command
///
/// This validates the configuration file without starting the server
pub fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Testing configuration...".yellow());
    info!("Loading and validating configuration");

    // Load configuration (this will validate it)
    let cfg = config::load_config(config_path)?;

    // Print success message
    println!("{}", "✓ Configuration test successful".green());
    println!();

    // Print summary
    println!("{}", "Configuration Summary:".bold());
    println!("  {}: {}:{}", "Server".cyan(), cfg.server.host, cfg.server.port);
    println!("  {}: {}", "Log Level".cyan(), cfg.server.log_level);
    println!("  {}: {}", "Log Format".cyan(), cfg.server.log_format);
    println!();

    println!("  {}: {}", "Rate Feed".cyan(), cfg.feed.url);
    println!(
        "  {}: every {}s (timeout {}s)",
        "Refresh".cyan(),
        cfg.feed.refresh_interval_secs,
        cfg.feed.timeout_secs
    );

    Ok(())
}
