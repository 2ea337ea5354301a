//! Operator cost settings.
//!
//! This module defines the [`CostSettings`] record an operator saves once and
//! reuses for every trip evaluation, along with its seven reserve rates. The
//! JSON shape (camelCase field names, nested `reserves` object) matches the
//! record persisted by earlier versions of the application and must not change.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::calculation::{DEFAULT_AVG_SPEED_MPH, finite_or, lenient_number};

/// Fuel economy assumed when the configured figure is missing or zero.
pub const DEFAULT_LEDGER_MPG: f64 = 4.6;

/// Lowest fuel economy the settings guardrail will store.
pub const MIN_SETTINGS_MPG: f64 = 1.0;

/// Tank capacity used when none is entered.
pub const DEFAULT_TANK_GALLONS: f64 = 280.0;

/// Minutes per fuel stop used when none is entered.
pub const DEFAULT_FUEL_STOP_MINUTES: f64 = 15.0;

/// Percentage-of-gross set-asides, each expressed as a fraction (0.02 = 2%).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ReserveRates {
    /// Factoring fees.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub factoring: f64,
    /// Income tax.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tax: f64,
    /// Plates and registration.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub plates: f64,
    /// IFTA fuel tax.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub ifta: f64,
    /// Maintenance.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub maint: f64,
    /// Highway use tax and tolls.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub highway: f64,
    /// Tires.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tires: f64,
}

impl ReserveRates {
    /// The reserve rates shipped as defaults.
    pub fn defaults() -> Self {
        Self {
            factoring: 0.02,
            tax: 0.28,
            plates: 0.05,
            ifta: 0.05,
            maint: 0.07,
            highway: 0.05,
            tires: 0.05,
        }
    }

    /// Returns the rates in their canonical order.
    pub fn as_array(&self) -> [f64; 7] {
        [
            self.factoring,
            self.tax,
            self.plates,
            self.ifta,
            self.maint,
            self.highway,
            self.tires,
        ]
    }

    /// Sum of all seven rates. Non-finite rates count as zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_ledger::models::ReserveRates;
    ///
    /// let total = ReserveRates::defaults().total();
    /// assert!((total - 0.57).abs() < 1e-12);
    /// ```
    pub fn total(&self) -> f64 {
        self.as_array()
            .into_iter()
            .map(|rate| finite_or(rate, 0.0))
            .sum()
    }

    fn sanitized(&self) -> Self {
        let guard = |rate: f64| guarded(rate, 0.0, 0.0);
        Self {
            factoring: guard(self.factoring),
            tax: guard(self.tax),
            plates: guard(self.plates),
            ifta: guard(self.ifta),
            maint: guard(self.maint),
            highway: guard(self.highway),
            tires: guard(self.tires),
        }
    }
}

/// Long-lived operator cost settings.
///
/// # Example
///
/// ```
/// use trip_ledger::models::CostSettings;
///
/// let json = r#"{
///     "household": 5259,
///     "businessFixed": 1742,
///     "defaultMpg": 4.6,
///     "tank": 280,
///     "fuelStopMin": 15,
///     "reserves": {"factoring": 0.02, "tax": 0.28, "plates": 0.05,
///                  "ifta": 0.05, "maint": 0.07, "highway": 0.05, "tires": 0.05}
/// }"#;
/// let settings: CostSettings = serde_json::from_str(json).unwrap();
/// assert_eq!(settings.business_fixed, 1742.0);
/// assert_eq!(settings.resolved_avg_speed(), 47.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostSettings {
    /// Monthly personal fixed cost.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub household: f64,
    /// Monthly business fixed cost.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub business_fixed: f64,
    /// Budgeted fuel economy in miles per gallon.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub default_mpg: f64,
    /// Tank capacity in gallons. Stored for future use.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub tank: f64,
    /// Minutes per fuel stop. Stored for future use.
    #[serde(default, deserialize_with = "lenient_f64")]
    pub fuel_stop_min: f64,
    /// Reserve rates as fractions of gross revenue.
    #[serde(default, deserialize_with = "lenient_reserves")]
    pub reserves: ReserveRates,
    /// Average road speed in miles per hour.
    #[serde(
        default,
        deserialize_with = "lenient_speed",
        skip_serializing_if = "Option::is_none"
    )]
    pub avg_speed: Option<f64>,
}

impl CostSettings {
    /// The settings shipped as defaults (also the "load test data" values).
    pub fn defaults() -> Self {
        Self {
            household: 5259.0,
            business_fixed: 1742.0,
            default_mpg: DEFAULT_LEDGER_MPG,
            tank: DEFAULT_TANK_GALLONS,
            fuel_stop_min: DEFAULT_FUEL_STOP_MINUTES,
            reserves: ReserveRates::defaults(),
            avg_speed: None,
        }
    }

    /// Applies the save-time guardrails.
    ///
    /// Zero or non-finite entries fall back to their default, then each field
    /// is clamped to its floor: 0 for money, tank, stop minutes and reserves,
    /// 1 for fuel economy. An average speed that is not a positive finite
    /// number is dropped so the 47 mph default applies.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_ledger::models::CostSettings;
    ///
    /// let mut raw = CostSettings::defaults();
    /// raw.household = -100.0;
    /// raw.default_mpg = 0.5;
    /// raw.tank = f64::NAN;
    ///
    /// let safe = raw.sanitized();
    /// assert_eq!(safe.household, 0.0);
    /// assert_eq!(safe.default_mpg, 1.0);
    /// assert_eq!(safe.tank, 280.0);
    /// ```
    pub fn sanitized(&self) -> Self {
        Self {
            household: guarded(self.household, 0.0, 0.0),
            business_fixed: guarded(self.business_fixed, 0.0, 0.0),
            default_mpg: guarded(self.default_mpg, DEFAULT_LEDGER_MPG, MIN_SETTINGS_MPG),
            tank: guarded(self.tank, DEFAULT_TANK_GALLONS, 0.0),
            fuel_stop_min: guarded(self.fuel_stop_min, DEFAULT_FUEL_STOP_MINUTES, 0.0),
            reserves: self.reserves.sanitized(),
            avg_speed: self.avg_speed.filter(|speed| speed.is_finite() && *speed > 0.0),
        }
    }

    /// Average speed used by the duty-hours estimate.
    pub fn resolved_avg_speed(&self) -> f64 {
        match self.avg_speed {
            Some(speed) if speed.is_finite() && speed > 0.0 => speed,
            _ => DEFAULT_AVG_SPEED_MPH,
        }
    }

    /// Fuel economy used by the ledger's fuel-cost estimate.
    pub fn ledger_mpg(&self) -> f64 {
        or_default(self.default_mpg, DEFAULT_LEDGER_MPG)
    }

    /// Household plus business fixed cost, with non-finite parts as zero.
    pub fn monthly_fixed(&self) -> f64 {
        finite_or(self.household, 0.0) + finite_or(self.business_fixed, 0.0)
    }
}

// Numeric fields are coerced one by one; a bad value never discards the record.

fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| lenient_number(&value))
}

fn lenient_speed<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| match value {
        Value::Null => None,
        other => Some(lenient_number(&other)),
    })
}

fn lenient_reserves<'de, D>(deserializer: D) -> Result<ReserveRates, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => ReserveRates::deserialize(value).map_err(serde::de::Error::custom),
        _ => Ok(ReserveRates::default()),
    }
}

/// Zero and non-finite values take the default.
fn or_default(value: f64, default: f64) -> f64 {
    if value.is_finite() && value != 0.0 {
        value
    } else {
        default
    }
}

fn guarded(value: f64, default: f64, floor: f64) -> f64 {
    or_default(value, default).max(floor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_shipped_test_data() {
        let settings = CostSettings::defaults();

        assert_eq!(settings.household, 5259.0);
        assert_eq!(settings.business_fixed, 1742.0);
        assert_eq!(settings.default_mpg, 4.6);
        assert_eq!(settings.tank, 280.0);
        assert_eq!(settings.fuel_stop_min, 15.0);
        assert_eq!(settings.reserves.factoring, 0.02);
        assert_eq!(settings.reserves.tax, 0.28);
        assert_eq!(settings.reserves.maint, 0.07);
        assert!(settings.avg_speed.is_none());
    }

    #[test]
    fn test_serializes_with_persisted_field_names() {
        let json = serde_json::to_value(CostSettings::defaults()).unwrap();

        for key in [
            "household",
            "businessFixed",
            "defaultMpg",
            "tank",
            "fuelStopMin",
            "reserves",
        ] {
            assert!(json.get(key).is_some(), "missing key {}", key);
        }
        for key in ["factoring", "tax", "plates", "ifta", "maint", "highway", "tires"] {
            assert!(json["reserves"].get(key).is_some(), "missing reserve {}", key);
        }
        assert!(json.get("avgSpeed").is_none());
    }

    #[test]
    fn test_missing_fields_deserialize_to_zero() {
        let settings: CostSettings = serde_json::from_str(r#"{"household": 1000}"#).unwrap();

        assert_eq!(settings.household, 1000.0);
        assert_eq!(settings.business_fixed, 0.0);
        assert_eq!(settings.reserves, ReserveRates::default());
        assert_eq!(settings.reserves.total(), 0.0);
    }

    #[test]
    fn test_avg_speed_round_trips_when_present() {
        let mut settings = CostSettings::defaults();
        settings.avg_speed = Some(55.0);

        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"avgSpeed\":55.0"));

        let back: CostSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(back.resolved_avg_speed(), 55.0);
    }

    #[test]
    fn test_resolved_avg_speed_defaults_when_not_positive() {
        let mut settings = CostSettings::defaults();
        assert_eq!(settings.resolved_avg_speed(), 47.0);

        settings.avg_speed = Some(0.0);
        assert_eq!(settings.resolved_avg_speed(), 47.0);

        settings.avg_speed = Some(-30.0);
        assert_eq!(settings.resolved_avg_speed(), 47.0);

        settings.avg_speed = Some(f64::INFINITY);
        assert_eq!(settings.resolved_avg_speed(), 47.0);
    }

    #[test]
    fn test_ledger_mpg_falls_back_for_zero_or_nan() {
        let mut settings = CostSettings::defaults();
        settings.default_mpg = 6.0;
        assert_eq!(settings.ledger_mpg(), 6.0);

        settings.default_mpg = 0.0;
        assert_eq!(settings.ledger_mpg(), DEFAULT_LEDGER_MPG);

        settings.default_mpg = f64::NAN;
        assert_eq!(settings.ledger_mpg(), DEFAULT_LEDGER_MPG);
    }

    #[test]
    fn test_sanitized_clamps_negative_money_and_reserves() {
        let mut raw = CostSettings::defaults();
        raw.business_fixed = -5.0;
        raw.reserves.tax = -0.1;
        raw.reserves.tires = f64::NAN;

        let safe = raw.sanitized();
        assert_eq!(safe.business_fixed, 0.0);
        assert_eq!(safe.reserves.tax, 0.0);
        assert_eq!(safe.reserves.tires, 0.0);
        assert_eq!(safe.reserves.factoring, 0.02);
    }

    #[test]
    fn test_sanitized_zero_mpg_restores_default_not_floor() {
        let mut raw = CostSettings::defaults();
        raw.default_mpg = 0.0;
        assert_eq!(raw.sanitized().default_mpg, DEFAULT_LEDGER_MPG);

        raw.default_mpg = 0.4;
        assert_eq!(raw.sanitized().default_mpg, MIN_SETTINGS_MPG);
    }

    #[test]
    fn test_sanitized_zero_tank_and_stop_minutes_restore_defaults() {
        let mut raw = CostSettings::defaults();
        raw.tank = 0.0;
        raw.fuel_stop_min = 0.0;

        let safe = raw.sanitized();
        assert_eq!(safe.tank, DEFAULT_TANK_GALLONS);
        assert_eq!(safe.fuel_stop_min, DEFAULT_FUEL_STOP_MINUTES);
    }

    #[test]
    fn test_sanitized_drops_invalid_avg_speed() {
        let mut raw = CostSettings::defaults();
        raw.avg_speed = Some(-1.0);
        assert_eq!(raw.sanitized().avg_speed, None);

        raw.avg_speed = Some(52.5);
        assert_eq!(raw.sanitized().avg_speed, Some(52.5));
    }

    #[test]
    fn test_reserve_total_ignores_non_finite_rates() {
        let mut reserves = ReserveRates::defaults();
        reserves.ifta = f64::NAN;
        assert!((reserves.total() - 0.52).abs() < 1e-12);
    }

    #[test]
    fn test_monthly_fixed_sums_household_and_business() {
        assert_eq!(CostSettings::defaults().monthly_fixed(), 7001.0);
    }

    #[test]
    fn test_null_field_reads_as_zero_without_losing_the_rest() {
        let json = r#"{"household": null, "businessFixed": 1742, "defaultMpg": 4.6,
            "reserves": {"factoring": 0.02, "tax": null, "tires": 0.05}}"#;
        let settings: CostSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.household, 0.0);
        assert_eq!(settings.business_fixed, 1742.0);
        assert_eq!(settings.default_mpg, 4.6);
        assert_eq!(settings.reserves.tax, 0.0);
        assert_eq!(settings.reserves.factoring, 0.02);
        assert_eq!(settings.reserves.tires, 0.05);
    }

    #[test]
    fn test_numeric_strings_are_read_as_numbers() {
        let json = r#"{"household": "5259", "tank": " 280 ", "fuelStopMin": "15",
            "reserves": {"maint": "0.07"}, "avgSpeed": "55"}"#;
        let settings: CostSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.household, 5259.0);
        assert_eq!(settings.tank, 280.0);
        assert_eq!(settings.fuel_stop_min, 15.0);
        assert_eq!(settings.reserves.maint, 0.07);
        assert_eq!(settings.resolved_avg_speed(), 55.0);
    }

    #[test]
    fn test_junk_values_read_as_zero() {
        let json = r#"{"household": "lots", "businessFixed": true, "defaultMpg": [4.6],
            "tank": {"gallons": 280}, "avgSpeed": "fast"}"#;
        let settings: CostSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.household, 0.0);
        assert_eq!(settings.business_fixed, 0.0);
        assert_eq!(settings.default_mpg, 0.0);
        assert_eq!(settings.ledger_mpg(), DEFAULT_LEDGER_MPG);
        assert_eq!(settings.tank, 0.0);
        assert_eq!(settings.resolved_avg_speed(), DEFAULT_AVG_SPEED_MPH);

        let safe = settings.sanitized();
        assert_eq!(safe.tank, DEFAULT_TANK_GALLONS);
        assert_eq!(safe.avg_speed, None);
    }

    #[test]
    fn test_non_object_reserves_read_as_zero_rates() {
        for reserves in ["null", "\"0.57\"", "[0.02, 0.28]"] {
            let json = format!(r#"{{"household": 5259, "reserves": {}}}"#, reserves);
            let settings: CostSettings = serde_json::from_str(&json).unwrap();

            assert_eq!(settings.household, 5259.0);
            assert_eq!(settings.reserves, ReserveRates::default());
        }
    }

    #[test]
    fn test_null_avg_speed_is_absent() {
        let settings: CostSettings = serde_json::from_str(r#"{"avgSpeed": null}"#).unwrap();
        assert_eq!(settings.avg_speed, None);
    }
}
