//! Fuel economy resolution for the display fuel estimate.
//!
//! The figure shown to the operator reflects real history: lifetime miles
//! over lifetime gallons. The ledger deliberately does not use it; it charges
//! fuel at the operator's budgeted `defaultMpg` instead, so the two can
//! disagree.

use crate::models::FuelEstimate;

use super::numeric::{finite_or, safe_div};

/// Fuel economy shown when no lifetime history exists.
pub const LIFETIME_FALLBACK_MPG: f64 = 6.8;

/// Resolves the empirical fuel economy from lifetime counters.
///
/// Returns `lifetime_miles / lifetime_gallons` when both are strictly
/// positive, otherwise `fallback`.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::{resolve_mpg, LIFETIME_FALLBACK_MPG};
///
/// assert_eq!(resolve_mpg(68000.0, 10000.0, LIFETIME_FALLBACK_MPG), 6.8);
/// assert_eq!(resolve_mpg(0.0, 10000.0, LIFETIME_FALLBACK_MPG), 6.8);
/// assert_eq!(resolve_mpg(12000.0, 2000.0, LIFETIME_FALLBACK_MPG), 6.0);
/// ```
pub fn resolve_mpg(lifetime_miles: f64, lifetime_gallons: f64, fallback: f64) -> f64 {
    let miles = finite_or(lifetime_miles, 0.0);
    let gallons = finite_or(lifetime_gallons, 0.0);

    if miles > 0.0 && gallons > 0.0 {
        finite_or(miles / gallons, fallback)
    } else {
        fallback
    }
}

/// Builds the display fuel estimate for a trip.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::estimate_fuel;
///
/// let estimate = estimate_fuel(680.0, 4.0, 6.8);
/// assert_eq!(estimate.est_gallons, 100.0);
/// assert_eq!(estimate.est_fuel_cost, 400.0);
/// ```
pub fn estimate_fuel(total_miles: f64, fuel_price: f64, mpg: f64) -> FuelEstimate {
    let total_miles = finite_or(total_miles, 0.0);
    let fuel_price = finite_or(fuel_price, 0.0);
    let mpg = finite_or(mpg, 0.0);

    let est_gallons = if mpg > 0.0 {
        safe_div(total_miles, mpg)
    } else {
        0.0
    };

    FuelEstimate {
        mpg_used: mpg,
        est_gallons,
        est_fuel_cost: finite_or(est_gallons * fuel_price, 0.0),
    }
}
