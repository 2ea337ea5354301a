//! Trip inputs and lifetime fuel counters.
//!
//! [`TripInputs`] describe a single scenario and are never persisted.
//! [`LifetimeFuelStats`] are the cumulative odometer and fuel totals kept by
//! the lifetime fuel store and only feed the display fuel estimate.

use serde::{Deserialize, Serialize};

/// The trip parameters of one scenario evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TripInputs {
    /// Miles driven empty to the pickup.
    pub deadhead: f64,
    /// Miles driven with cargo.
    pub loaded: f64,
    /// Whether the return leg counts toward the trip.
    #[serde(default)]
    pub returning: bool,
    /// Return-leg miles, only counted when `returning` is true.
    #[serde(default)]
    pub return_miles: f64,
    /// Expected revenue for the trip.
    pub gross: f64,
    /// Price per gallon of fuel.
    #[serde(default)]
    pub fuel_price: f64,
    /// Hours spent waiting, loading and unloading.
    #[serde(default)]
    pub wait_hours: f64,
}

impl TripInputs {
    /// Zeroes the return miles when the trip is not returning.
    ///
    /// # Examples
    ///
    /// ```
    /// use trip_ledger::models::TripInputs;
    ///
    /// let inputs = TripInputs {
    ///     deadhead: 50.0,
    ///     loaded: 500.0,
    ///     returning: false,
    ///     return_miles: 300.0,
    ///     gross: 2000.0,
    ///     ..TripInputs::default()
    /// };
    /// assert_eq!(inputs.with_return_lock().return_miles, 0.0);
    /// ```
    pub fn with_return_lock(self) -> Self {
        if self.returning {
            self
        } else {
            Self {
                return_miles: 0.0,
                ..self
            }
        }
    }
}

/// Cumulative miles and gallons across every logged fill-up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifetimeFuelStats {
    /// Lifetime miles driven.
    #[serde(default)]
    pub lifetime_miles: f64,
    /// Lifetime gallons purchased.
    #[serde(default)]
    pub lifetime_gallons: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_lock_keeps_miles_when_returning() {
        let inputs = TripInputs {
            returning: true,
            return_miles: 120.0,
            ..TripInputs::default()
        };
        assert_eq!(inputs.with_return_lock().return_miles, 120.0);
    }

    #[test]
    fn test_deserialize_with_optional_fields_missing() {
        let json = r#"{"deadhead": 50, "loaded": 500, "gross": 2000}"#;
        let inputs: TripInputs = serde_json::from_str(json).unwrap();

        assert_eq!(inputs.deadhead, 50.0);
        assert!(!inputs.returning);
        assert_eq!(inputs.return_miles, 0.0);
        assert_eq!(inputs.fuel_price, 0.0);
        assert_eq!(inputs.wait_hours, 0.0);
    }

    #[test]
    fn test_lifetime_stats_use_persisted_key_names() {
        let stats: LifetimeFuelStats =
            serde_json::from_str(r#"{"lifetimeMiles": 68000, "lifetimeGallons": 10000}"#)
                .unwrap();
        assert_eq!(stats.lifetime_miles, 68000.0);
        assert_eq!(stats.lifetime_gallons, 10000.0);

        let empty: LifetimeFuelStats = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, LifetimeFuelStats::default());
    }
}
