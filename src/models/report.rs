//! Computed outputs of a trip evaluation.
//!
//! All of these are ephemeral and display-only: an estimate is never written
//! to trip history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::rounded;

/// Regulatory and operational breakdown of the hours a trip keeps the driver away.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursBreakdown {
    /// Hours behind the wheel.
    pub drive_hours: f64,
    /// Hours waiting, loading and unloading.
    pub wait_hours: f64,
    /// Number of mandatory 30-minute breaks.
    pub dot_breaks: f64,
    /// Hours spent in mandatory 30-minute breaks.
    pub dot_break_hours: f64,
    /// Number of 15-minute fuel stops.
    pub fuel_stops: f64,
    /// Hours spent at fuel stops.
    pub fuel_stop_hours: f64,
    /// Number of 10-hour rest blocks.
    pub sleeper_breaks: f64,
    /// Hours spent in 10-hour rest blocks.
    pub sleeper_hours: f64,
    /// Sum of every component above.
    pub total_hours_away: f64,
}

/// The display fuel estimate, based on lifetime (empirical) fuel economy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FuelEstimate {
    /// Miles per gallon the estimate used.
    pub mpg_used: f64,
    /// Estimated gallons for the trip.
    pub est_gallons: f64,
    /// Estimated fuel spend for the trip.
    pub est_fuel_cost: f64,
}

/// The monetary result of the trip ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripReport {
    /// Deadhead plus loaded plus (when returning) return miles.
    pub total_miles: f64,
    /// Fuel spend charged against the trip.
    pub fuel_cost: f64,
    /// Share of monthly fixed cost allocated to the trip's duration.
    pub fixed_trip_cost: f64,
    /// Sum of reserve rates as a fraction.
    pub reserves_pct: f64,
    /// Reserve set-aside in currency.
    pub reserves: f64,
    /// Gross minus fuel, fixed cost and reserves.
    pub net: f64,
    /// Net income per hour away.
    pub otr: f64,
}

/// Report and hours figures rounded the way they are shown to the operator.
///
/// Money to cents, miles and hours to a tenth, fuel-stop hours to
/// hundredths and the reserve rate as a percentage to one decimal place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Total miles, one decimal place.
    pub total_miles: Decimal,
    /// Fuel cost in currency.
    pub fuel_cost: Decimal,
    /// Fixed trip cost in currency.
    pub fixed_trip_cost: Decimal,
    /// Reserve rate as a percentage.
    pub reserves_percent: Decimal,
    /// Reserves in currency.
    pub reserves: Decimal,
    /// Net income in currency.
    pub net: Decimal,
    /// Net income per hour away.
    pub otr_per_hour: Decimal,
    /// Drive hours, one decimal place.
    pub drive_hours: Decimal,
    /// Wait hours, one decimal place.
    pub wait_hours: Decimal,
    /// Break hours, one decimal place.
    pub dot_break_hours: Decimal,
    /// Fuel-stop hours, two decimal places.
    pub fuel_stop_hours: Decimal,
    /// Sleeper hours, one decimal place.
    pub sleeper_hours: Decimal,
    /// Total hours away, one decimal place.
    pub total_hours_away: Decimal,
}

impl ReportTotals {
    /// Rounds a report and its hours breakdown for display.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_ledger::models::{HoursBreakdown, ReportTotals, TripReport};
    /// use rust_decimal::Decimal;
    /// use std::str::FromStr;
    ///
    /// let report = TripReport {
    ///     total_miles: 550.0,
    ///     fuel_cost: 478.26086956521743,
    ///     reserves_pct: 0.5700000000000001,
    ///     ..TripReport::default()
    /// };
    /// let totals = ReportTotals::new(&report, &HoursBreakdown::default());
    /// assert_eq!(totals.fuel_cost, Decimal::from_str("478.26").unwrap());
    /// assert_eq!(totals.reserves_percent, Decimal::from_str("57.0").unwrap());
    /// ```
    pub fn new(report: &TripReport, hours: &HoursBreakdown) -> Self {
        Self {
            total_miles: rounded(report.total_miles, 1),
            fuel_cost: rounded(report.fuel_cost, 2),
            fixed_trip_cost: rounded(report.fixed_trip_cost, 2),
            reserves_percent: rounded(report.reserves_pct * 100.0, 1),
            reserves: rounded(report.reserves, 2),
            net: rounded(report.net, 2),
            otr_per_hour: rounded(report.otr, 2),
            drive_hours: rounded(hours.drive_hours, 1),
            wait_hours: rounded(hours.wait_hours, 1),
            dot_break_hours: rounded(hours.dot_break_hours, 1),
            fuel_stop_hours: rounded(hours.fuel_stop_hours, 2),
            sleeper_hours: rounded(hours.sleeper_hours, 1),
            total_hours_away: rounded(hours.total_hours_away, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sample_report() -> TripReport {
        TripReport {
            total_miles: 550.0,
            fuel_cost: 478.26086956521743,
            fixed_trip_cost: 233.36666666666667,
            reserves_pct: 0.5700000000000001,
            reserves: 1140.0000000000002,
            net: 148.3724637681155,
            otr: 6.182185990338145,
        }
    }

    fn sample_hours() -> HoursBreakdown {
        HoursBreakdown {
            drive_hours: 11.702127659574469,
            wait_hours: 2.0,
            dot_breaks: 1.0,
            dot_break_hours: 0.5,
            fuel_stops: 1.0,
            fuel_stop_hours: 0.25,
            sleeper_breaks: 1.0,
            sleeper_hours: 10.0,
            total_hours_away: 24.45212765957447,
        }
    }

    #[test]
    fn test_totals_round_money_to_cents() {
        let totals = ReportTotals::new(&sample_report(), &sample_hours());

        assert_eq!(totals.fuel_cost, dec("478.26"));
        assert_eq!(totals.fixed_trip_cost, dec("233.37"));
        assert_eq!(totals.reserves, dec("1140.00"));
        assert_eq!(totals.net, dec("148.37"));
        assert_eq!(totals.otr_per_hour, dec("6.18"));
    }

    #[test]
    fn test_totals_round_hours_to_display_precision() {
        let totals = ReportTotals::new(&sample_report(), &sample_hours());

        assert_eq!(totals.total_miles, dec("550.0"));
        assert_eq!(totals.drive_hours, dec("11.7"));
        assert_eq!(totals.fuel_stop_hours, dec("0.25"));
        assert_eq!(totals.total_hours_away, dec("24.5"));
        assert_eq!(totals.reserves_percent, dec("57.0"));
    }

    #[test]
    fn test_report_serializes_snake_case_fields() {
        let json = serde_json::to_value(sample_report()).unwrap();
        assert!(json.get("fixed_trip_cost").is_some());
        assert!(json.get("reserves_pct").is_some());
        assert!(json.get("otr").is_some());
    }

    #[test]
    fn test_totals_serialize_as_strings() {
        let totals = ReportTotals::new(&sample_report(), &sample_hours());
        let json = serde_json::to_string(&totals).unwrap();
        assert!(json.contains("\"net\":\"148.37\""));
    }
}
