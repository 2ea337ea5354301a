//! Duty-hours estimation.
//!
//! This module converts trip miles, an average road speed and wait time into
//! the hours a trip keeps the driver away from home, broken down by the
//! regulatory and operational policies that add time beyond driving:
//!
//! - a 30-minute break for every 8 hours of driving,
//! - a 15-minute fuel stop for every 500 miles,
//! - a 10-hour rest block for every 11 hours of driving.
//!
//! Each policy is a floor-based step function. Nothing is rounded before the
//! floor, so a trip at exactly 8.0 driving hours earns a break and one at
//! 7.99 does not.

use crate::models::HoursBreakdown;

use super::numeric::{finite_or, safe_div};

/// Average road speed used when the operator has not set one.
pub const DEFAULT_AVG_SPEED_MPH: f64 = 47.0;

/// Driving hours accumulated per mandatory short break.
pub const DOT_BREAK_INTERVAL_HOURS: f64 = 8.0;

/// Length of a mandatory short break in hours.
pub const DOT_BREAK_HOURS: f64 = 0.5;

/// Total miles per fuel stop.
pub const FUEL_STOP_INTERVAL_MILES: f64 = 500.0;

/// Length of a fuel stop in hours.
pub const FUEL_STOP_HOURS: f64 = 0.25;

/// Driving hours accumulated per long rest block.
pub const SLEEPER_INTERVAL_HOURS: f64 = 11.0;

/// Length of a long rest block in hours.
pub const SLEEPER_HOURS: f64 = 10.0;

/// Estimates the hours away for a trip.
///
/// # Arguments
///
/// * `total_miles` - Total trip miles (deadhead, loaded and any return leg)
/// * `wait_hours` - Waiting/loading/unloading time, added to hours away only
/// * `avg_speed` - Average road speed in mph; zero or less yields no driving hours
///
/// Non-finite arguments are treated as zero, and every field of the result
/// is finite.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::estimate_hours;
///
/// let hours = estimate_hours(550.0, 2.0, 47.0);
///
/// assert_eq!(hours.dot_breaks, 1.0);
/// assert_eq!(hours.fuel_stops, 1.0);
/// assert_eq!(hours.sleeper_breaks, 1.0);
/// assert!((hours.total_hours_away - 24.452).abs() < 0.001);
/// ```
pub fn estimate_hours(total_miles: f64, wait_hours: f64, avg_speed: f64) -> HoursBreakdown {
    let total_miles = finite_or(total_miles, 0.0);
    let wait_hours = finite_or(wait_hours, 0.0);
    let avg_speed = finite_or(avg_speed, 0.0);

    let drive_hours = if avg_speed > 0.0 {
        safe_div(total_miles, avg_speed)
    } else {
        0.0
    };

    let dot_breaks = (drive_hours / DOT_BREAK_INTERVAL_HOURS).floor();
    let dot_break_hours = dot_breaks * DOT_BREAK_HOURS;

    let fuel_stops = (total_miles / FUEL_STOP_INTERVAL_MILES).floor().max(0.0);
    let fuel_stop_hours = fuel_stops * FUEL_STOP_HOURS;

    let sleeper_breaks = (drive_hours / SLEEPER_INTERVAL_HOURS).floor();
    let sleeper_hours = sleeper_breaks * SLEEPER_HOURS;

    let total_hours_away =
        drive_hours + wait_hours + dot_break_hours + fuel_stop_hours + sleeper_hours;

    HoursBreakdown {
        drive_hours,
        wait_hours,
        dot_breaks: finite_or(dot_breaks, 0.0),
        dot_break_hours: finite_or(dot_break_hours, 0.0),
        fuel_stops: finite_or(fuel_stops, 0.0),
        fuel_stop_hours: finite_or(fuel_stop_hours, 0.0),
        sleeper_breaks: finite_or(sleeper_breaks, 0.0),
        sleeper_hours: finite_or(sleeper_hours, 0.0),
        total_hours_away: finite_or(total_hours_away, 0.0),
    }
}
