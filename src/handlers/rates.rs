use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::estimator::EstimateError;
use crate::handlers::estimate::AppState;
use crate::rates::table::Currency;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatesResponse {
    pub as_of: String,
    pub fetched_at: DateTime<Utc>,
    /// Feed the quotes were taken from.
    pub source: String,
    pub rates: Vec<RateView>,
}

/// One currency row: the feed's lot quotation plus the per-unit rate the
/// estimator actually uses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateView {
    pub code: Currency,
    pub value: f64,
    pub previous: f64,
    pub nominal: u32,
    pub per_unit: f64,
    pub movement: Movement,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Movement {
    Up,
    Down,
    Flat,
}

impl Movement {
    fn between(previous: f64, value: f64) -> Self {
        if value > previous {
            Movement::Up
        } else if value < previous {
            Movement::Down
        } else {
            Movement::Flat
        }
    }
}

/// Handle `GET /v1/rates`: the current snapshot in feed order.
pub async fn handle_rates(State(state): State<AppState>) -> Result<Json<RatesResponse>, AppError> {
    let snapshot = state
        .rates
        .snapshot()
        .ok_or(EstimateError::RatesNotReady)?;

    let rates = Currency::ALL
        .iter()
        .filter_map(|&code| {
            snapshot.quote(code).map(|quote| RateView {
                code,
                value: quote.value,
                previous: quote.previous,
                nominal: quote.nominal,
                per_unit: quote.per_unit(),
                movement: Movement::between(quote.previous, quote.value),
            })
        })
        .collect();

    Ok(Json(RatesResponse {
        as_of: snapshot.as_of.clone(),
        fetched_at: snapshot.fetched_at,
        source: state.config.load().feed.url.clone(),
        rates,
    }))
}
