//! HTTP request handlers for the Trip Ledger API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    estimate_fuel, estimate_hours, evaluate_logged_trip, evaluate_scenario, resolve_mpg,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{CostSettings, ScenarioResult};

use super::request::{FuelEstimateRequest, HoursRequest, LoggedTripRequest, TripRequest};
use super::response::{ApiError, ApiErrorResponse, FuelEstimateResponse, HoursResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/scenario", post(scenario_handler))
        .route("/trips/logged", post(logged_trip_handler))
        .route("/hours", post(hours_handler))
        .route("/fuel/estimate", post(fuel_estimate_handler))
        .route("/settings", get(get_settings_handler).put(put_settings_handler))
        .route("/settings/reset", post(reset_settings_handler))
        .with_state(state)
}

/// Handler for POST /scenario.
///
/// Evaluates an estimate-only trip against the saved cost settings.
async fn scenario_handler(
    State(state): State<AppState>,
    payload: Result<Json<TripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing scenario request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let outcome = request.validate().and_then(|inputs| {
        let settings = state.settings().require()?;
        let lifetime = state.lifetime().lifetime_stats()?;
        Ok(evaluate_scenario(
            &inputs,
            &settings,
            &lifetime,
            state.config().display_fallback_mpg(),
        ))
    });

    evaluation_response(outcome, correlation_id)
}

/// Handler for POST /trips/logged.
///
/// Like `/scenario`, but the fuel cost is charged from the gallons actually
/// purchased.
async fn logged_trip_handler(
    State(state): State<AppState>,
    payload: Result<Json<LoggedTripRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing logged trip request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let outcome = request.validate().and_then(|(inputs, gallons)| {
        let settings = state.settings().require()?;
        let lifetime = state.lifetime().lifetime_stats()?;
        Ok(evaluate_logged_trip(
            &inputs,
            &settings,
            &lifetime,
            state.config().display_fallback_mpg(),
            gallons,
        ))
    });

    evaluation_response(outcome, correlation_id)
}

/// Handler for POST /hours.
///
/// Works without saved settings; the average speed comes from the request,
/// then the settings when present, then the default.
async fn hours_handler(
    State(state): State<AppState>,
    payload: Result<Json<HoursRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing hours request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let outcome = request.validate().and_then(|()| {
        let avg_speed = match request.avg_speed {
            Some(speed) => speed,
            None => resolve_settings_speed(&state)?,
        };
        Ok(HoursResponse {
            avg_speed,
            hours: estimate_hours(request.total_miles, request.wait_hours, avg_speed),
        })
    });

    match outcome {
        Ok(body) => {
            info!(
                correlation_id = %correlation_id,
                total_miles = request.total_miles,
                total_hours_away = body.hours.total_hours_away,
                "Hours estimated"
            );
            json_response(StatusCode::OK, body)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for POST /fuel/estimate.
///
/// Display-only estimate from lifetime fuel economy.
async fn fuel_estimate_handler(
    State(state): State<AppState>,
    payload: Result<Json<FuelEstimateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing fuel estimate request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let outcome = request.validate().and_then(|()| {
        let lifetime = state.lifetime().lifetime_stats()?;
        let fallback = state.config().display_fallback_mpg();
        let mpg = resolve_mpg(lifetime.lifetime_miles, lifetime.lifetime_gallons, fallback);
        Ok(FuelEstimateResponse {
            estimate: estimate_fuel(request.total_miles, request.fuel_price, mpg),
            lifetime,
            fallback_mpg_used: !(lifetime.lifetime_miles > 0.0 && lifetime.lifetime_gallons > 0.0),
        })
    });

    match outcome {
        Ok(body) => json_response(StatusCode::OK, body),
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for GET /settings.
async fn get_settings_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.settings().load() {
        Ok(Some(settings)) => json_response(StatusCode::OK, settings),
        Ok(None) => {
            ApiErrorResponse::new(StatusCode::NOT_FOUND, ApiError::settings_not_found())
                .into_response()
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

/// Handler for PUT /settings.
///
/// Out-of-range values are clamped or replaced by defaults before saving;
/// the response carries what was actually stored.
async fn put_settings_handler(
    State(state): State<AppState>,
    payload: Result<Json<CostSettings>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Saving cost settings");

    let settings = match payload {
        Ok(Json(settings)) => settings.sanitized(),
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    save_settings(&state, settings, correlation_id)
}

/// Handler for POST /settings/reset.
async fn reset_settings_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Resetting cost settings to defaults");

    save_settings(&state, CostSettings::defaults(), correlation_id)
}

fn save_settings(state: &AppState, settings: CostSettings, correlation_id: Uuid) -> Response {
    match state.settings().save(&settings) {
        Ok(()) => {
            info!(
                correlation_id = %correlation_id,
                monthly_fixed = settings.monthly_fixed(),
                reserves_pct = settings.reserves.total(),
                "Cost settings saved"
            );
            json_response(StatusCode::OK, settings)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn resolve_settings_speed(state: &AppState) -> EngineResult<f64> {
    Ok(state
        .settings()
        .load()?
        .unwrap_or_else(CostSettings::defaults)
        .resolved_avg_speed())
}

fn evaluation_response(outcome: EngineResult<ScenarioResult>, correlation_id: Uuid) -> Response {
    match outcome {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                calculation_id = %result.calculation_id,
                total_miles = result.report.total_miles,
                net = %result.totals.net,
                otr_per_hour = %result.totals.otr_per_hour,
                warnings = result.audit_trace.warnings.len(),
                duration_us = result.audit_trace.duration_us,
                "Trip evaluated successfully"
            );
            json_response(StatusCode::OK, result)
        }
        Err(err) => failure_response(err, correlation_id),
    }
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn failure_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Maps a JSON extraction failure to a 400 response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // The body text carries serde's detailed message
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::new(StatusCode::BAD_REQUEST, error).into_response()
}
