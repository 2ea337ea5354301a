//! Calculation logic for the Trip Ledger engine.
//!
//! This module contains the pure derivations (the duty-hours estimate, fuel
//! economy resolution and the trip ledger), the numeric fallback helpers they
//! share, and the orchestration that composes them into a scenario result.

mod duty_hours;
mod fuel_economy;
mod numeric;
mod scenario;
mod trip_ledger;

pub use duty_hours::{
    DEFAULT_AVG_SPEED_MPH, DOT_BREAK_HOURS, DOT_BREAK_INTERVAL_HOURS, FUEL_STOP_HOURS,
    FUEL_STOP_INTERVAL_MILES, SLEEPER_HOURS, SLEEPER_INTERVAL_HOURS, estimate_hours,
};
pub use fuel_economy::{LIFETIME_FALLBACK_MPG, estimate_fuel, resolve_mpg};
pub use numeric::{finite_or, rounded};
pub(crate) use numeric::lenient_number;
pub use scenario::{
    MPG_FALLBACK_WARNING, RETURN_MILES_WARNING, evaluate_logged_trip, evaluate_scenario,
    scenario_warnings,
};
pub use trip_ledger::{
    DAYS_PER_MONTH, DEFAULT_OTR_HOURS, HOURS_PER_DAY, MIN_TRIP_DAYS, calculate_trip,
    total_trip_miles,
};
