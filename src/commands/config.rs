use anyhow::Result;
use colored::Colorize;
use customs_estimator::config;
use std::path::Path;

/// Display the current configuration as TOML
pub fn show(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!("{}", "Current configuration:".bold());
    println!();
    println!("{}", toml::to_string_pretty(&cfg)?);

    Ok(())
}

/// Validate the configuration file
pub fn validate(config_path: &Path) -> Result<()> {
    match config::load_config(config_path) {
        Ok(_) => {
            println!("{}", "✓ Configuration is valid".green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "✗ Configuration is invalid:".red(), e);
            Err(e)
        }
    }
}
