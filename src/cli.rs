use clap::{Parser, Subcommand};
use std::path::PathBuf;

use customs_estimator::estimator::{AgeBracket, Country, EngineType};

#[derive(Parser, Debug)]
#[command(name = "estimator", version, about = "Vehicle import cost estimator")]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, default_value = "config.toml", global = true)]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start the estimator server (default)
    Start,

    /// Test configuration file validity
    Test,

    /// Configuration management commands
    Config {
        #[command(subcommand)]
        action: ConfigCommands,
    },

    /// Compute a one-shot cost estimate (fetches rates once)
    Estimate {
        /// Origin country
        #[arg(long, value_enum)]
        country: Country,

        /// Purchase price in the origin country's currency
        #[arg(long)]
        price: f64,

        /// Engine displacement in cc
        #[arg(long)]
        displacement: u32,

        /// Engine type
        #[arg(long, value_enum)]
        engine: EngineType,

        /// Vehicle age bracket
        #[arg(long, value_enum)]
        age: AgeBracket,
    },

    /// Fetch and display the current exchange rates
    Rates,

    /// Show version information
    Version,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Validate configuration file
    Validate,
}

impl Cli {
    /// Get the command to execute, defaulting to Start if none provided
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Start)
    }
}
