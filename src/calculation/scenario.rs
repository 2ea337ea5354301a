//! Trip evaluation orchestration.
//!
//! This module composes the derivations in the order the host needs them:
//! total miles, the duty-hours estimate, the display fuel estimate and
//! finally the trip ledger. Each derivation is recorded as an audit step and
//! soft warnings are raised for inputs that deserve a second look.
//!
//! Settings must already be present; checking for them is the caller's job.

use std::time::Instant;

use chrono::Utc;
use serde_json::json;
use tracing::debug;
use uuid::Uuid;

use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CostSettings, FuelEstimate, HoursBreakdown,
    LifetimeFuelStats, ReportTotals, ScenarioResult, TripInputs, TripMode, TripReport,
};

use super::duty_hours::estimate_hours;
use super::fuel_economy::{estimate_fuel, resolve_mpg};
use super::numeric::rounded;
use super::trip_ledger::{DAYS_PER_MONTH, calculate_trip, otr_hours, total_trip_miles, trip_days};

/// Warning code for a return leg at least as long as the loaded leg.
pub const RETURN_MILES_WARNING: &str = "RETURN_MILES_GTE_LOADED";

/// Warning code for a display estimate that had no lifetime history.
pub const MPG_FALLBACK_WARNING: &str = "LIFETIME_MPG_FALLBACK";

/// Evaluates an estimate-only scenario.
///
/// Fuel is charged from miles and the budgeted mpg; no gallons figure is
/// used. The return-miles lock is applied to `inputs` first.
///
/// # Arguments
///
/// * `inputs` - The trip parameters
/// * `settings` - The operator's saved cost settings
/// * `lifetime` - Lifetime fuel counters, for the display estimate only
/// * `display_fallback_mpg` - Display mpg when lifetime counters are empty
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::{evaluate_scenario, LIFETIME_FALLBACK_MPG};
/// use trip_ledger::models::{CostSettings, LifetimeFuelStats, TripInputs, TripMode};
///
/// let inputs = TripInputs {
///     deadhead: 50.0,
///     loaded: 500.0,
///     gross: 2000.0,
///     fuel_price: 4.0,
///     wait_hours: 2.0,
///     ..TripInputs::default()
/// };
/// let result = evaluate_scenario(
///     &inputs,
///     &CostSettings::defaults(),
///     &LifetimeFuelStats::default(),
///     LIFETIME_FALLBACK_MPG,
/// );
///
/// assert_eq!(result.mode, TripMode::Scenario);
/// assert_eq!(result.hours.sleeper_breaks, 1.0);
/// assert_eq!(result.audit_trace.steps.len(), 8);
/// ```
pub fn evaluate_scenario(
    inputs: &TripInputs,
    settings: &CostSettings,
    lifetime: &LifetimeFuelStats,
    display_fallback_mpg: f64,
) -> ScenarioResult {
    evaluate(
        TripMode::Scenario,
        inputs,
        settings,
        lifetime,
        display_fallback_mpg,
        0.0,
    )
}

/// Evaluates a logged trip whose fuel purchase is known.
///
/// Identical to [`evaluate_scenario`] except that `gallons`, when positive,
/// replaces the miles/mpg fuel estimate in the ledger.
pub fn evaluate_logged_trip(
    inputs: &TripInputs,
    settings: &CostSettings,
    lifetime: &LifetimeFuelStats,
    display_fallback_mpg: f64,
    gallons: f64,
) -> ScenarioResult {
    evaluate(
        TripMode::Logged,
        inputs,
        settings,
        lifetime,
        display_fallback_mpg,
        gallons,
    )
}

/// Soft warnings for a set of trip inputs.
///
/// # Examples
///
/// ```
/// use trip_ledger::calculation::scenario_warnings;
/// use trip_ledger::models::{LifetimeFuelStats, TripInputs};
///
/// let inputs = TripInputs {
///     loaded: 300.0,
///     returning: true,
///     return_miles: 300.0,
///     ..TripInputs::default()
/// };
/// let lifetime = LifetimeFuelStats { lifetime_miles: 1000.0, lifetime_gallons: 150.0 };
///
/// let warnings = scenario_warnings(&inputs, &lifetime);
/// assert_eq!(warnings.len(), 1);
/// assert_eq!(warnings[0].code, "RETURN_MILES_GTE_LOADED");
/// ```
pub fn scenario_warnings(inputs: &TripInputs, lifetime: &LifetimeFuelStats) -> Vec<AuditWarning> {
    let mut warnings = Vec::new();

    if inputs.returning && inputs.loaded > 0.0 && inputs.return_miles >= inputs.loaded {
        warnings.push(AuditWarning {
            code: RETURN_MILES_WARNING.to_string(),
            message: format!(
                "Return miles ({}) are equal to or greater than loaded miles ({}). \
                 Confirm this reposition back home/yard is real.",
                inputs.return_miles, inputs.loaded
            ),
            severity: "medium".to_string(),
        });
    }

    if !(lifetime.lifetime_miles > 0.0 && lifetime.lifetime_gallons > 0.0) {
        warnings.push(AuditWarning {
            code: MPG_FALLBACK_WARNING.to_string(),
            message: "No lifetime fuel history yet; the fuel estimate uses the fallback mpg"
                .to_string(),
            severity: "low".to_string(),
        });
    }

    warnings
}

fn evaluate(
    mode: TripMode,
    inputs: &TripInputs,
    settings: &CostSettings,
    lifetime: &LifetimeFuelStats,
    display_fallback_mpg: f64,
    gallons_override: f64,
) -> ScenarioResult {
    let start_time = Instant::now();
    let inputs = inputs.with_return_lock();
    let mut steps: Vec<AuditStep> = Vec::new();

    let total_miles = total_trip_miles(&inputs);
    steps.push(miles_step(1, &inputs, total_miles));

    let avg_speed = settings.resolved_avg_speed();
    let hours = estimate_hours(total_miles, inputs.wait_hours, avg_speed);
    steps.push(hours_step(2, total_miles, avg_speed, &hours));

    let mpg_used = resolve_mpg(
        lifetime.lifetime_miles,
        lifetime.lifetime_gallons,
        display_fallback_mpg,
    );
    let fuel_estimate = estimate_fuel(total_miles, inputs.fuel_price, mpg_used);
    steps.push(fuel_estimate_step(3, lifetime, &fuel_estimate));

    let report = calculate_trip(
        &inputs,
        settings,
        inputs.fuel_price,
        gallons_override,
        hours.total_hours_away,
    );
    steps.extend(ledger_steps(
        4,
        &inputs,
        settings,
        gallons_override,
        hours.total_hours_away,
        &report,
    ));

    let warnings = scenario_warnings(&inputs, lifetime);
    let totals = ReportTotals::new(&report, &hours);
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        mode = ?mode,
        total_miles = report.total_miles,
        hours_away = hours.total_hours_away,
        net = report.net,
        otr = report.otr,
        warnings = warnings.len(),
        duration_us,
        "Trip evaluated"
    );

    ScenarioResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        mode,
        inputs,
        hours,
        fuel_estimate,
        report,
        totals,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    }
}

fn money(value: f64) -> String {
    rounded(value, 2).to_string()
}

fn tenths(value: f64) -> String {
    rounded(value, 1).to_string()
}

fn miles_step(step_number: u32, inputs: &TripInputs, total_miles: f64) -> AuditStep {
    let reasoning = if inputs.returning {
        format!(
            "{} deadhead + {} loaded + {} return = {} miles",
            inputs.deadhead,
            inputs.loaded,
            inputs.return_miles,
            tenths(total_miles)
        )
    } else {
        format!(
            "{} deadhead + {} loaded = {} miles (not returning)",
            inputs.deadhead,
            inputs.loaded,
            tenths(total_miles)
        )
    };

    AuditStep {
        step_number,
        rule_id: "trip_miles".to_string(),
        rule_name: "Trip Miles".to_string(),
        policy: "deadhead + loaded + return miles when returning".to_string(),
        input: json!({
            "deadhead": inputs.deadhead,
            "loaded": inputs.loaded,
            "returning": inputs.returning,
            "return_miles": inputs.return_miles
        }),
        output: json!({ "total_miles": total_miles }),
        reasoning,
    }
}

fn hours_step(
    step_number: u32,
    total_miles: f64,
    avg_speed: f64,
    hours: &HoursBreakdown,
) -> AuditStep {
    AuditStep {
        step_number,
        rule_id: "duty_hours_estimate".to_string(),
        rule_name: "Duty Hours Estimate".to_string(),
        policy: "30 min break per 8 driving hours, 15 min fuel stop per 500 miles, \
                 10 h rest per 11 driving hours"
            .to_string(),
        input: json!({
            "total_miles": total_miles,
            "avg_speed": avg_speed,
            "wait_hours": hours.wait_hours
        }),
        output: serde_json::to_value(hours).unwrap_or_default(),
        reasoning: format!(
            "{} drive + {} wait + {} breaks ({}) + {} fuel stops ({}) + {} sleeper ({}) = {} hours away",
            tenths(hours.drive_hours),
            tenths(hours.wait_hours),
            tenths(hours.dot_break_hours),
            hours.dot_breaks,
            rounded(hours.fuel_stop_hours, 2),
            hours.fuel_stops,
            tenths(hours.sleeper_hours),
            hours.sleeper_breaks,
            tenths(hours.total_hours_away)
        ),
    }
}

fn fuel_estimate_step(
    step_number: u32,
    lifetime: &LifetimeFuelStats,
    estimate: &FuelEstimate,
) -> AuditStep {
    let source = if lifetime.lifetime_miles > 0.0 && lifetime.lifetime_gallons > 0.0 {
        "lifetime"
    } else {
        "fallback"
    };

    AuditStep {
        step_number,
        rule_id: "display_fuel_estimate".to_string(),
        rule_name: "Display Fuel Estimate".to_string(),
        policy: "lifetime miles / lifetime gallons, fallback when either is zero".to_string(),
        input: json!({
            "lifetime_miles": lifetime.lifetime_miles,
            "lifetime_gallons": lifetime.lifetime_gallons
        }),
        output: json!({
            "mpg_used": estimate.mpg_used,
            "mpg_source": source,
            "est_gallons": estimate.est_gallons,
            "est_fuel_cost": money(estimate.est_fuel_cost)
        }),
        reasoning: format!(
            "{} mpg ({}) gives {} gallons, ${} estimated fuel",
            rounded(estimate.mpg_used, 2),
            source,
            rounded(estimate.est_gallons, 2),
            money(estimate.est_fuel_cost)
        ),
    }
}

fn ledger_steps(
    first_step: u32,
    inputs: &TripInputs,
    settings: &CostSettings,
    gallons_override: f64,
    hours_away: f64,
    report: &TripReport,
) -> Vec<AuditStep> {
    let fuel_source = if gallons_override > 0.0 {
        "gallons_override"
    } else {
        "default_mpg"
    };
    let fuel_reasoning = if gallons_override > 0.0 {
        format!(
            "{} gallons x ${} = ${}",
            gallons_override,
            inputs.fuel_price,
            money(report.fuel_cost)
        )
    } else {
        format!(
            "{} miles / {} mpg x ${} = ${}",
            tenths(report.total_miles),
            settings.ledger_mpg(),
            inputs.fuel_price,
            money(report.fuel_cost)
        )
    };

    let trip_days = trip_days(hours_away);
    let otr_hours = otr_hours(hours_away);

    vec![
        AuditStep {
            step_number: first_step,
            rule_id: "ledger_fuel_cost".to_string(),
            rule_name: "Ledger Fuel Cost".to_string(),
            policy: "gallons x price when gallons known, else miles / default mpg x price"
                .to_string(),
            input: json!({
                "total_miles": report.total_miles,
                "default_mpg": settings.ledger_mpg(),
                "fuel_price": inputs.fuel_price,
                "gallons_override": gallons_override
            }),
            output: json!({
                "fuel_cost": money(report.fuel_cost),
                "source": fuel_source
            }),
            reasoning: fuel_reasoning,
        },
        AuditStep {
            step_number: first_step + 1,
            rule_id: "fixed_cost_allocation".to_string(),
            rule_name: "Fixed Cost Allocation".to_string(),
            policy: "monthly fixed / 30 per day, at least a quarter day".to_string(),
            input: json!({
                "household": settings.household,
                "business_fixed": settings.business_fixed,
                "hours_away": hours_away
            }),
            output: json!({
                "daily_fixed": money(settings.monthly_fixed() / DAYS_PER_MONTH),
                "trip_days": trip_days,
                "fixed_trip_cost": money(report.fixed_trip_cost)
            }),
            reasoning: format!(
                "${} / 30 days x {} days = ${}",
                money(settings.monthly_fixed()),
                rounded(trip_days, 3),
                money(report.fixed_trip_cost)
            ),
        },
        AuditStep {
            step_number: first_step + 2,
            rule_id: "reserves".to_string(),
            rule_name: "Reserves".to_string(),
            policy: "gross x sum of reserve rates".to_string(),
            input: json!({
                "gross": inputs.gross,
                "rates": serde_json::to_value(settings.reserves).unwrap_or_default()
            }),
            output: json!({
                "reserves_pct": report.reserves_pct,
                "reserves": money(report.reserves)
            }),
            reasoning: format!(
                "${} x {}% = ${}",
                money(inputs.gross),
                tenths(report.reserves_pct * 100.0),
                money(report.reserves)
            ),
        },
        AuditStep {
            step_number: first_step + 3,
            rule_id: "net_income".to_string(),
            rule_name: "Net Income".to_string(),
            policy: "gross - fuel - fixed - reserves".to_string(),
            input: json!({
                "gross": money(inputs.gross),
                "fuel_cost": money(report.fuel_cost),
                "fixed_trip_cost": money(report.fixed_trip_cost),
                "reserves": money(report.reserves)
            }),
            output: json!({ "net": money(report.net) }),
            reasoning: format!(
                "${} - ${} - ${} - ${} = ${}",
                money(inputs.gross),
                money(report.fuel_cost),
                money(report.fixed_trip_cost),
                money(report.reserves),
                money(report.net)
            ),
        },
        AuditStep {
            step_number: first_step + 4,
            rule_id: "hourly_rate".to_string(),
            rule_name: "O.T.R.A.F.F. Hourly Rate".to_string(),
            policy: "net / hours away, 24 hours when unknown".to_string(),
            input: json!({
                "net": money(report.net),
                "hours_away": hours_away
            }),
            output: json!({
                "otr_hours": otr_hours,
                "otr": money(report.otr)
            }),
            reasoning: format!(
                "${} / {} hours = ${}/hr",
                money(report.net),
                tenths(otr_hours),
                money(report.otr)
            ),
        },
    ]
}
