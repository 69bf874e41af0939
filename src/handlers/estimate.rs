use arc_swap::ArcSwap;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

use crate::config::Config;
use crate::error::AppError;
use crate::estimator::{self, CostBreakdown, Country, EstimateError, EstimateRequest, Selection};
use crate::rates::RateService;

/// Shared state for all handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ArcSwap<Config>>,
    pub rates: Arc<RateService>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateResponse {
    /// Country profile the estimate was actually computed under; may
    /// differ from the requested one after reclassification.
    pub country: Country,
    /// True when the vehicle was reclassified into the sanctioned regime.
    pub sanctioned_warning: bool,
    /// Quotation date of the rate snapshot used.
    pub rates_as_of: String,
    pub breakdown: CostBreakdown,
}

/// Handle `POST /v1/estimate`.
///
/// Runs the sanctioned-regime reclassification first, then the full cost
/// breakdown against the latest rate snapshot. Declines with 503 while no
/// snapshot is loaded.
pub async fn handle_estimate(
    State(state): State<AppState>,
    Json(request): Json<EstimateRequest>,
) -> Result<Json<EstimateResponse>, AppError> {
    let rates = state
        .rates
        .snapshot()
        .ok_or(EstimateError::RatesNotReady)?;

    let selection = estimator::reclassify(
        Selection::new(request.country),
        request.displacement_cc,
        request.engine,
    );

    let effective = EstimateRequest {
        country: selection.country,
        ..request
    };
    let breakdown = estimator::estimate(&effective, &rates)?;

    info!(
        country = effective.country.display_name(),
        reclassified = selection.warning,
        "Estimate computed"
    );

    Ok(Json(EstimateResponse {
        country: selection.country,
        sanctioned_warning: selection.warning,
        rates_as_of: rates.as_of.clone(),
        breakdown,
    }))
}
