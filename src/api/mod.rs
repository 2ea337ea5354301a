//! HTTP API module for the Trip Ledger engine.
//!
//! This module exposes trip evaluation, the duty-hours and fuel estimates,
//! and cost-settings management as JSON endpoints.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{FuelEstimateRequest, HoursRequest, LoggedTripRequest, TripRequest};
pub use response::{ApiError, ApiErrorResponse, FuelEstimateResponse, HoursResponse};
pub use state::AppState;
