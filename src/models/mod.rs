//! Core data models for the Trip Ledger engine.
//!
//! This module contains the settings, trip inputs and computed outputs used
//! throughout the engine.

mod report;
mod scenario_result;
mod settings;
mod trip;

pub use report::{FuelEstimate, HoursBreakdown, ReportTotals, TripReport};
pub use scenario_result::{AuditStep, AuditTrace, AuditWarning, ScenarioResult, TripMode};
pub use settings::{
    CostSettings, DEFAULT_FUEL_STOP_MINUTES, DEFAULT_LEDGER_MPG, DEFAULT_TANK_GALLONS,
    MIN_SETTINGS_MPG, ReserveRates,
};
pub use trip::{LifetimeFuelStats, TripInputs};
