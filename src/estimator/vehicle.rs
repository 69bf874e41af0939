use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Engine/powertrain classification.
///
/// Electrified powertrains are restricted regardless of displacement and
/// force the sanctioned tariff regime (see `sanctions`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Petrol,
    Diesel,
    HybridPetrol,
    HybridDiesel,
    Electric,
}

impl EngineType {
    /// Whether this powertrain alone forces the sanctioned regime.
    pub fn forces_sanctioned(&self) -> bool {
        matches!(
            self,
            EngineType::HybridPetrol | EngineType::HybridDiesel | EngineType::Electric
        )
    }

    pub fn label(&self) -> &'static str {
        match self {
            EngineType::Petrol => "petrol",
            EngineType::Diesel => "diesel",
            EngineType::HybridPetrol => "petrol hybrid",
            EngineType::HybridDiesel => "diesel hybrid",
            EngineType::Electric => "electric",
        }
    }
}

/// Vehicle age bracket; selects the duty formula and recycling-fee row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AgeBracket {
    /// Under 3 years.
    New,
    /// 3 to 5 years.
    Medium,
    /// Over 5 years.
    Old,
}

impl AgeBracket {
    pub fn label(&self) -> &'static str {
        match self {
            AgeBracket::New => "under 3 years",
            AgeBracket::Medium => "3-5 years",
            AgeBracket::Old => "over 5 years",
        }
    }
}
