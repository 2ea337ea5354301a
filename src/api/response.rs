//! Request and response types for the Trip Ledger API.
//!
//! This module defines the success bodies that are not plain engine models,
//! the error response structure and the mapping from engine errors.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{FuelEstimate, HoursBreakdown, LifetimeFuelStats};

/// Response body for `POST /hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursResponse {
    /// Average speed the estimate used.
    pub avg_speed: f64,
    /// The hours-away breakdown.
    pub hours: HoursBreakdown,
}

/// Response body for `POST /fuel/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelEstimateResponse {
    /// The display fuel estimate.
    #[serde(flatten)]
    pub estimate: FuelEstimate,
    /// The lifetime counters the mpg was derived from.
    pub lifetime: LifetimeFuelStats,
    /// True when the counters were empty and the fallback mpg was shown.
    pub fallback_mpg_used: bool,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }

    /// A calculation was requested before any cost settings were saved.
    pub fn settings_required() -> Self {
        Self::with_details(
            "SETTINGS_REQUIRED",
            "Cost settings must be saved before evaluating a trip",
            "Save settings with PUT /settings or POST /settings/reset",
        )
    }

    /// No cost settings have been saved.
    pub fn settings_not_found() -> Self {
        Self::new("SETTINGS_NOT_FOUND", "Cost settings have not been saved yet")
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Pairs an error body with a status code.
    pub fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::SettingsNotFound => {
                ApiErrorResponse::new(StatusCode::PRECONDITION_FAILED, ApiError::settings_required())
            }
            EngineError::InvalidTrip { field, message } => ApiErrorResponse::new(
                StatusCode::BAD_REQUEST,
                ApiError::with_details(
                    "INVALID_TRIP",
                    format!("Invalid trip field '{}': {}", field, message),
                    "The trip data contains invalid information",
                ),
            ),
            EngineError::ConfigNotFound { path } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            ),
            EngineError::ConfigParseError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            ),
            EngineError::StoreReadError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "STORE_ERROR",
                    "Failed to read persisted data",
                    format!("{}: {}", path, message),
                ),
            ),
            EngineError::StoreWriteError { path, message } => ApiErrorResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::with_details(
                    "STORE_ERROR",
                    "Failed to write persisted data",
                    format!("{}: {}", path, message),
                ),
            ),
        }
    }
}
