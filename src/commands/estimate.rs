use anyhow::Result;
use colored::Colorize;
use customs_estimator::config;
use customs_estimator::estimator::{
    self, AgeBracket, Country, EngineType, EstimateRequest, Selection,
};
use customs_estimator::rates::feed;
use std::path::Path;
use std::time::Duration;

/// Execute the estimate command
///
/// Fetches the exchange rates once, runs the reclassification rule and the
/// full breakdown, and prints the result. Rounding here is presentation
/// only; the breakdown itself carries raw values.
pub async fn execute(
    config_path: &Path,
    country: Country,
    price: f64,
    displacement: u32,
    engine: EngineType,
    age: AgeBracket,
) -> Result<()> {
    let cfg = config::load_config(config_path)?;

    println!("{}", "Fetching exchange rates...".yellow());
    let body = feed::download_daily_json(
        &cfg.feed.url,
        Duration::from_secs(cfg.feed.timeout_secs),
    )
    .await?;
    let rates = feed::parse_daily_json(&body)?;

    let selection = estimator::reclassify(Selection::new(country), displacement, engine);
    if selection.warning {
        println!(
            "{}",
            "Note: this vehicle falls under sanction restrictions; the estimate \
             uses the sanctioned tariff schedule."
                .yellow()
        );
    }

    let request = EstimateRequest {
        country: selection.country,
        price,
        displacement_cc: displacement,
        engine,
        age,
    };
    let breakdown = estimator::estimate(&request, &rates)?;

    println!();
    println!("{}", "Cost breakdown:".bold());
    println!(
        "  {}: {} ({} {})",
        "Vehicle".cyan(),
        format_rub(breakdown.vehicle_cost_rub),
        format_amount(breakdown.vehicle_cost_original.amount),
        breakdown.vehicle_cost_original.currency
    );
    println!(
        "  {}: {} ({} {})",
        "Shipping".cyan(),
        format_rub(breakdown.shipping_cost_rub),
        format_amount(breakdown.shipping_cost_original.amount),
        breakdown.shipping_cost_original.currency
    );
    println!("  {}: {}", "Customs duty".cyan(), format_rub(breakdown.customs_duty_rub));
    println!("  {}: {}", "Clearance fee".cyan(), format_rub(breakdown.clearance_fee_rub));
    println!("  {}: {}", "Broker services".cyan(), format_rub(breakdown.broker_fee_rub));
    println!("  {}: {}", "Commission".cyan(), format_rub(breakdown.commission_rub));
    println!(
        "  {}: {}",
        "Recycling fee".cyan(),
        format_rub(breakdown.recycling_fee_rub)
    );
    println!(
        "  {}: {}",
        "Recycling fee (resale)".cyan(),
        format_rub(breakdown.commercial_recycling_fee_rub)
    );
    println!();
    println!(
        "  {}: {}",
        "Total".bold(),
        format_rub(breakdown.total_rub).green().bold()
    );
    println!(
        "  {}: {}",
        "Total (resale)".bold(),
        format_rub(breakdown.total_commercial_rub).dimmed()
    );
    println!();
    println!(
        "  Profile: {} | {} | {} | rates as of {}",
        selection.country.display_name(),
        engine.label(),
        age.label(),
        rates.as_of
    );

    Ok(())
}

/// Format a RUB amount with thousands separators, rounded to whole rubles.
fn format_rub(amount: f64) -> String {
    format!("{} RUB", group_thousands(amount))
}

fn format_amount(amount: f64) -> String {
    group_thousands(amount)
}

fn group_thousands(amount: f64) -> String {
    let rounded = amount.round() as i64;
    let digits = rounded.abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
