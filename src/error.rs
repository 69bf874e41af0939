use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::estimator::EstimateError;

/// Application error types
#[derive(Debug)]
pub enum AppError {
    /// Configuration error
    ConfigError(String),
    /// Exchange-rate feed returned an unusable document
    FeedError(String),
    /// The calculation core declined or rejected the request
    Estimate(EstimateError),
    /// HTTP request error (preserves reqwest::Error for diagnostics)
    HttpRequest(reqwest::Error),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            Self::FeedError(msg) => write!(f, "Rate feed error: {}", msg),
            Self::Estimate(err) => write!(f, "Estimate error: {}", err),
            Self::HttpRequest(err) => write!(f, "HTTP request error: {}", err),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            Self::ConfigError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
            Self::FeedError(msg) => (StatusCode::BAD_GATEWAY, msg.clone()),
            Self::Estimate(err) => (estimate_status(err), err.to_string()),
            Self::HttpRequest(err) => (StatusCode::BAD_GATEWAY, err.to_string()),
            Self::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        let body = Json(json!({
            "error": {
                "message": error_message,
                "type": error_type_name(&self),
            }
        }));

        (status, body).into_response()
    }
}

/// Rates being unavailable is a recoverable "try later" state; bad input
/// is the caller's to fix.
fn estimate_status(error: &EstimateError) -> StatusCode {
    match error {
        EstimateError::RatesNotReady | EstimateError::MissingRate(_) => {
            StatusCode::SERVICE_UNAVAILABLE
        }
        EstimateError::InvalidPrice(_) | EstimateError::InvalidDisplacement => {
            StatusCode::BAD_REQUEST
        }
    }
}

fn error_type_name(error: &AppError) -> &'static str {
    match error {
        AppError::ConfigError(_) => "config_error",
        AppError::FeedError(_) => "feed_error",
        AppError::Estimate(
            EstimateError::RatesNotReady | EstimateError::MissingRate(_),
        ) => "estimate_unavailable",
        AppError::Estimate(_) => "invalid_input",
        AppError::HttpRequest(_) => "http_request_error",
        AppError::InternalError(_) => "internal_error",
    }
}

// Implement conversions from common error types
impl From<EstimateError> for AppError {
    fn from(err: EstimateError) -> Self {
        Self::Estimate(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::InternalError(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::HttpRequest(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::FeedError(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rates::table::Currency;

    #[test]
    fn test_error_display() {
        let error = AppError::FeedError("timed out".to_string());
        assert_eq!(error.to_string(), "Rate feed error: timed out");
    }

    #[test]
    fn test_error_type_name() {
        assert_eq!(
            error_type_name(&AppError::Estimate(EstimateError::RatesNotReady)),
            "estimate_unavailable"
        );
        assert_eq!(
            error_type_name(&AppError::Estimate(EstimateError::InvalidPrice(-1.0))),
            "invalid_input"
        );
        assert_eq!(
            error_type_name(&AppError::ConfigError("test".to_string())),
            "config_error"
        );
    }

    #[tokio::test]
    async fn test_rates_not_ready_is_service_unavailable() {
        let error = AppError::Estimate(EstimateError::RatesNotReady);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_missing_rate_is_service_unavailable() {
        let error = AppError::Estimate(EstimateError::MissingRate(Currency::Krw));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_invalid_input_is_bad_request() {
        let error = AppError::Estimate(EstimateError::InvalidDisplacement);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
