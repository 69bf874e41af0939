use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::AppError;
use crate::rates::table::{Currency, Quote, RateTable};

/// Daily quotation document as published by the central bank feed.
/// Only the fields the estimator needs are kept; the `Valute` map carries
/// many more currencies than we track.
#[derive(Debug, Deserialize)]
pub struct DailyQuotes {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Valute")]
    pub valute: HashMap<String, ValuteEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ValuteEntry {
    #[serde(rename = "CharCode")]
    pub char_code: String,
    #[serde(rename = "Nominal")]
    pub nominal: u32,
    #[serde(rename = "Value")]
    pub value: f64,
    #[serde(rename = "Previous")]
    pub previous: f64,
}

/// Download the daily quotation JSON from the feed URL.
pub async fn download_daily_json(url: &str, timeout: Duration) -> Result<String, AppError> {
    info!("Downloading exchange rates from: {}", url);

    let client = reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AppError::FeedError(format!("Failed to build HTTP client: {}", e)))?;

    let response = client.get(url).send().await.map_err(AppError::HttpRequest)?;

    if !response.status().is_success() {
        return Err(AppError::FeedError(format!(
            "Failed to download rates: HTTP {}",
            response.status()
        )));
    }

    let content = response
        .text()
        .await
        .map_err(|e| AppError::FeedError(format!("Failed to read response: {}", e)))?;

    debug!("Downloaded {} bytes of rate data", content.len());
    Ok(content)
}

/// Parse the daily JSON into a rate snapshot.
///
/// Every supported currency must be present; a feed document missing one
/// is rejected whole rather than producing a partial table.
pub fn parse_daily_json(json: &str) -> Result<RateTable, AppError> {
    let data: DailyQuotes = serde_json::from_str(json)
        .map_err(|e| AppError::FeedError(format!("Failed to parse rate JSON: {}", e)))?;

    let mut quotes = HashMap::new();
    for currency in Currency::ALL {
        let entry = data.valute.get(currency.code()).ok_or_else(|| {
            AppError::FeedError(format!("Feed is missing currency {}", currency))
        })?;

        if entry.nominal == 0 || !entry.value.is_finite() || entry.value <= 0.0 {
            return Err(AppError::FeedError(format!(
                "Feed has an unusable quote for {}: value {}, nominal {}",
                currency, entry.value, entry.nominal
            )));
        }

        quotes.insert(
            currency,
            Quote {
                value: entry.value,
                previous: entry.previous,
                nominal: entry.nominal,
            },
        );
    }

    info!("Parsed {} currency quotes as of {}", quotes.len(), data.date);
    Ok(RateTable::new(quotes, data.date))
}
