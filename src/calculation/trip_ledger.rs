//! Trip ledger calculation.
//!
//! This module turns trip inputs, the operator's cost settings and the
//! hours-away estimate into the trip's monetary report: fuel cost, the share
//! of monthly fixed cost the trip consumes, reserve set-asides, net income
//! and net income per hour away.

use crate::models::{CostSettings, TripInputs, TripReport};

use super::numeric::{finite_or, safe_div};

/// Fixed month length used to turn monthly fixed cost into a daily figure.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Shortest duration a trip is charged fixed cost for, in days.
pub const MIN_TRIP_DAYS: f64 = 0.25;

/// Hours in a day.
pub const HOURS_PER_DAY: f64 = 24.0;

/// Hours away assumed for the hourly rate when no estimate is available.
pub const DEFAULT_OTR_HOURS: f64 = 24.0;

/// Total trip miles: deadhead plus loaded, plus return miles when returning.
///
/// Non-finite mile counts are treated as zero.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::total_trip_miles;
/// use trip_ledger::models::TripInputs;
///
/// let mut inputs = TripInputs {
///     deadhead: 50.0,
///     loaded: 500.0,
///     returning: false,
///     return_miles: 300.0,
///     ..TripInputs::default()
/// };
/// assert_eq!(total_trip_miles(&inputs), 550.0);
///
/// inputs.returning = true;
/// assert_eq!(total_trip_miles(&inputs), 850.0);
/// ```
pub fn total_trip_miles(inputs: &TripInputs) -> f64 {
    let return_miles = if inputs.returning {
        finite_or(inputs.return_miles, 0.0)
    } else {
        0.0
    };
    finite_or(inputs.deadhead, 0.0) + finite_or(inputs.loaded, 0.0) + return_miles
}

/// Days of fixed cost a trip is charged for.
///
/// Hours away convert at 24 per day; an unknown duration counts as one day.
/// Never less than a quarter day.
pub(crate) fn trip_days(hours_away: f64) -> f64 {
    let hours_away = finite_or(hours_away, 0.0);
    if hours_away > 0.0 {
        hours_away / HOURS_PER_DAY
    } else {
        1.0
    }
    .max(MIN_TRIP_DAYS)
}

/// Hours the net income is spread over for the hourly rate.
pub(crate) fn otr_hours(hours_away: f64) -> f64 {
    let hours_away = finite_or(hours_away, 0.0);
    if hours_away > 0.0 {
        hours_away
    } else {
        DEFAULT_OTR_HOURS
    }
}

/// Calculates the monetary report for a trip.
///
/// # Arguments
///
/// * `inputs` - The trip parameters (miles, return flag, gross)
/// * `settings` - The operator's cost settings
/// * `fuel_price` - Price per gallon
/// * `gallons_override` - Gallons actually purchased; when positive it replaces
///   the miles/mpg estimate. Scenario evaluations pass 0.
/// * `hours_away` - Total hours away from [`estimate_hours`](super::estimate_hours);
///   0 when unknown
///
/// # Returns
///
/// A [`TripReport`] whose fields are all finite.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::calculate_trip;
/// use trip_ledger::models::{CostSettings, TripInputs};
///
/// let inputs = TripInputs {
///     deadhead: 50.0,
///     loaded: 500.0,
///     gross: 2000.0,
///     ..TripInputs::default()
/// };
/// let report = calculate_trip(&inputs, &CostSettings::defaults(), 4.0, 0.0, 0.0);
///
/// assert_eq!(report.total_miles, 550.0);
/// assert!((report.net - 148.37).abs() < 0.01);
/// assert!((report.otr - 6.18).abs() < 0.01);
/// ```
pub fn calculate_trip(
    inputs: &TripInputs,
    settings: &CostSettings,
    fuel_price: f64,
    gallons_override: f64,
    hours_away: f64,
) -> TripReport {
    let fuel_price = finite_or(fuel_price, 0.0);
    let gallons_override = finite_or(gallons_override, 0.0);
    let hours_away = finite_or(hours_away, 0.0);
    let gross = finite_or(inputs.gross, 0.0);

    let total_miles = total_trip_miles(inputs);

    // Ledger fuel uses the budgeted mpg, not lifetime history
    let mpg = settings.ledger_mpg();
    let est_gallons = if mpg > 0.0 {
        safe_div(total_miles, mpg)
    } else {
        0.0
    };

    let fuel_cost = if gallons_override > 0.0 {
        gallons_override * fuel_price
    } else {
        est_gallons * fuel_price
    };

    let daily_fixed = settings.monthly_fixed() / DAYS_PER_MONTH;
    let fixed_trip_cost = daily_fixed * trip_days(hours_away);

    let reserves_pct = settings.reserves.total();
    let reserves = gross * reserves_pct;

    let net = gross - fuel_cost - fixed_trip_cost - reserves;

    let otr_hours = otr_hours(hours_away);
    let otr = if otr_hours > 0.0 {
        safe_div(net, otr_hours)
    } else {
        0.0
    };

    TripReport {
        total_miles: finite_or(total_miles, 0.0),
        fuel_cost: finite_or(fuel_cost, 0.0),
        fixed_trip_cost: finite_or(fixed_trip_cost, 0.0),
        reserves_pct: finite_or(reserves_pct, 0.0),
        reserves: finite_or(reserves, 0.0),
        net: finite_or(net, 0.0),
        otr: finite_or(otr, 0.0),
    }
}
