use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;

use customs_estimator::init_tracing;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let args = cli::Cli::parse();

    // Initialize tracing/logging early
    init_tracing();

    // Dispatch to appropriate command handler
    match args.get_command() {
        cli::Commands::Start => {
            commands::start::execute(&args.config).await?;
        }
        cli::Commands::Test => {
            commands::test::execute(&args.config)?;
        }
        cli::Commands::Config { action } => match action {
            cli::ConfigCommands::Show => commands::config::show(&args.config)?,
            cli::ConfigCommands::Validate => commands::config::validate(&args.config)?,
        },
        cli::Commands::Estimate {
            country,
            price,
            displacement,
            engine,
            age,
        } => {
            commands::estimate::execute(&args.config, country, price, displacement, engine, age)
                .await?;
        }
        cli::Commands::Rates => {
            commands::rates::execute(&args.config).await?;
        }
        cli::Commands::Version => {
            println!("Customs Estimator v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
