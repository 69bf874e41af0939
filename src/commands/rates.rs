use anyhow::Result;
use colored::Colorize;
use customs_estimator::config;
use customs_estimator::rates::feed;
use customs_estimator::rates::table::Currency;
use std::path::Path;
use std::time::Duration;

/// Execute the rates command
///
/// Fetches the daily feed once and prints the currency board with the
/// movement against the previous trading day.
pub async fn execute(config_path: &Path) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!("{}", "Fetching exchange rates...".yellow());
    let body = feed::download_daily_json(
        &cfg.feed.url,
        Duration::from_secs(cfg.feed.timeout_secs),
    )
    .await?;
    let rates = feed::parse_daily_json(&body)?;

    println!();
    println!("{} (as of {})", "Central bank exchange rates".bold(), rates.as_of);
    println!();

    for currency in Currency::ALL {
        // parse_daily_json guarantees every supported currency is present
        let Some(quote) = rates.quote(currency) else {
            continue;
        };

        let delta = quote.value - quote.previous;
        let movement = if delta > 0.0 {
            format!("↑ {:+.2}", delta).green()
        } else if delta < 0.0 {
            format!("↓ {:+.2}", delta).red()
        } else {
            "=".dimmed()
        };

        let lot = if quote.nominal == 1 {
            currency.code().to_string()
        } else {
            format!("{} {}", quote.nominal, currency.code())
        };

        println!(
            "  {:<10} {:>10.2} RUB  {}   ({:.4} RUB per unit)",
            lot,
            quote.value,
            movement,
            quote.per_unit()
        );
    }

    Ok(())
}
