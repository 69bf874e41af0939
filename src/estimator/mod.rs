pub mod breakdown;
pub mod country;
pub mod duty;
pub mod fees;
pub mod sanctions;
pub mod shipping;
pub mod vehicle;

pub use breakdown::{estimate, CostBreakdown, EstimateRequest, OriginalAmount};
pub use country::{Country, ShippingPolicy};
pub use fees::ImportPurpose;
pub use sanctions::{reclassify, Selection};
pub use vehicle::{AgeBracket, EngineType};

use crate::rates::table::Currency;
use thiserror::Error;

/// Errors from the pure calculation core.
///
/// All of these are recoverable from the caller's point of view: a missing
/// or unready rate table means "try again after the next refresh", invalid
/// input means "fix the request". Conversion to HTTP status codes happens
/// in `crate::error`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    #[error("exchange rates have not been loaded yet")]
    RatesNotReady,

    #[error("no exchange rate available for {0}")]
    MissingRate(Currency),

    #[error("price must be a positive finite amount, got {0}")]
    InvalidPrice(f64),

    #[error("engine displacement must be a positive number of cc")]
    InvalidDisplacement,
}
