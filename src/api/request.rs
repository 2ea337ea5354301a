//! Request types for the Trip Ledger API.
//!
//! Deserialization only checks shape. Each request's `validate` method turns
//! it into engine inputs and rejects negative or non-finite numbers, which
//! the pure calculations would otherwise carry through unchanged.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::TripInputs;

/// Request body for `POST /scenario`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    /// Miles driven empty to the pickup.
    pub deadhead: f64,
    /// Miles driven with cargo.
    pub loaded: f64,
    /// Whether the return leg counts toward the trip.
    #[serde(default)]
    pub returning: bool,
    /// Return-leg miles. Ignored unless `returning` is true.
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

impl TripRequest {
    /// Validates the request and converts it to [`TripInputs`] with the
    /// return-miles lock applied.
    pub fn validate(&self) -> EngineResult<TripInputs> {
        non_negative("deadhead", self.deadhead)?;
        non_negative("loaded", self.loaded)?;
        non_negative("gross", self.gross)?;
        if self.returning {
            non_negative("return_miles", self.return_miles)?;
        }
        non_negative("fuel_price", self.fuel_price)?;
        non_negative("wait_hours", self.wait_hours)?;

        Ok(TripInputs::from(self.clone()).with_return_lock())
    }
}

impl From<TripRequest> for TripInputs {
    fn from(req: TripRequest) -> Self {
        TripInputs {
            deadhead: req.deadhead,
            loaded: req.loaded,
            returning: req.returning,
            return_miles: req.return_miles,
            gross: req.gross,
            fuel_price: req.fuel_price,
            wait_hours: req.wait_hours,
        }
    }
}

/// Request body for `POST /trips/logged`: a trip plus its fuel purchase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedTripRequest {
    /// The trip parameters.
    #[serde(flatten)]
    pub trip: TripRequest,
    /// Gallons actually purchased for the trip.
    pub gallons: f64,
}

impl LoggedTripRequest {
    /// Validates the trip and the gallons figure, which must be positive.
    pub fn validate(&self) -> EngineResult<(TripInputs, f64)> {
        let inputs = self.trip.validate()?;
        if !self.gallons.is_finite() || self.gallons <= 0.0 {
            return Err(invalid("gallons", "must be a finite number greater than 0"));
        }
        Ok((inputs, self.gallons))
    }
}

/// Request body for `POST /hours`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoursRequest {
    /// Total trip miles.
    pub total_miles: f64,
    /// Hours spent waiting, loading and unloading.
    #[serde(default)]
    pub wait_hours: f64,
    /// Average driving speed. Falls back to the saved settings, then 47 mph.
    #[serde(default)]
    pub avg_speed: Option<f64>,
}

impl HoursRequest {
    /// Validates the mileage and wait time.
    ///
    /// A non-positive `avg_speed` is not an error here; the estimate treats
    /// it as "unknown" and produces zero drive hours.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("total_miles", self.total_miles)?;
        non_negative("wait_hours", self.wait_hours)?;
        if let Some(speed) = self.avg_speed {
            if !speed.is_finite() {
                return Err(invalid("avg_speed", "must be a finite number"));
            }
        }
        Ok(())
    }
}

/// Request body for `POST /fuel/estimate`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FuelEstimateRequest {
    /// Total trip miles.
    pub total_miles: f64,
    /// Price per gallon of fuel.
    #[serde(default)]
    pub fuel_price: f64,
}

impl FuelEstimateRequest {
    /// Validates the mileage and fuel price.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("total_miles", self.total_miles)?;
        non_negative("fuel_price", self.fuel_price)
    }
}

fn non_negative(field: &str, value: f64) -> EngineResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, "must be a finite number greater than or equal to 0"))
    }
}

fn invalid(field: &str, message: &str) -> EngineError {
    EngineError::InvalidTrip {
        field: field.to_string(),
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trip() -> TripRequest {
        TripRequest {
            deadhead: 50.0,
            loaded: 500.0,
            returning: false,
            return_miles: 0.0,
            gross: 2000.0,
            fuel_price: 4.0,
            wait_hours: 2.0,
        }
    }

    fn invalid_field(result: EngineResult<impl std::fmt::Debug>) -> String {
        match result {
            Err(EngineError::InvalidTrip { field, .. }) => field,
            other => panic!("Expected InvalidTrip, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_trip_request_with_defaults() {
        let json = r#"{"deadhead": 50, "loaded": 500, "gross": 2000}"#;

        let request: TripRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.loaded, 500.0);
        assert!(!request.returning);
        assert_eq!(request.fuel_price, 0.0);
        assert_eq!(request.wait_hours, 0.0);
    }

    #[test]
    fn test_deserialize_missing_gross_fails() {
        let json = r#"{"deadhead": 50, "loaded": 500}"#;

        let err = serde_json::from_str::<TripRequest>(json).unwrap_err();
        assert!(err.to_string().contains("missing field `gross`"));
    }

    #[test]
    fn test_validate_applies_return_lock() {
        let request = TripRequest {
            return_miles: 300.0,
            ..trip()
        };

        let inputs = request.validate().unwrap();
        assert_eq!(inputs.return_miles, 0.0);
        assert_eq!(inputs.deadhead, 50.0);
    }

    #[test]
    fn test_validate_keeps_return_miles_when_returning() {
        let request = TripRequest {
            returning: true,
            return_miles: 300.0,
            ..trip()
        };

        assert_eq!(request.validate().unwrap().return_miles, 300.0);
    }

    #[test]
    fn test_validate_rejects_negative_loaded() {
        let request = TripRequest {
            loaded: -1.0,
            ..trip()
        };
        assert_eq!(invalid_field(request.validate()), "loaded");
    }

    #[test]
    fn test_validate_ignores_negative_return_miles_when_not_returning() {
        let request = TripRequest {
            return_miles: -10.0,
            ..trip()
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_return_miles_when_returning() {
        let request = TripRequest {
            returning: true,
            return_miles: -10.0,
            ..trip()
        };
        assert_eq!(invalid_field(request.validate()), "return_miles");
    }

    #[test]
    fn test_validate_rejects_non_finite_fuel_price() {
        let request = TripRequest {
            fuel_price: f64::NAN,
            ..trip()
        };
        assert_eq!(invalid_field(request.validate()), "fuel_price");
    }

    #[test]
    fn test_logged_trip_flattens_trip_fields() {
        let json = r#"{"deadhead": 50, "loaded": 500, "gross": 2000, "fuel_price": 4, "gallons": 90}"#;

        let request: LoggedTripRequest = serde_json::from_str(json).unwrap();
        let (inputs, gallons) = request.validate().unwrap();
        assert_eq!(inputs.loaded, 500.0);
        assert_eq!(gallons, 90.0);
    }

    #[test]
    fn test_logged_trip_requires_positive_gallons() {
        let request = LoggedTripRequest {
            trip: trip(),
            gallons: 0.0,
        };
        assert_eq!(invalid_field(request.validate()), "gallons");
    }

    #[test]
    fn test_hours_request_rejects_negative_wait() {
        let request = HoursRequest {
            total_miles: 100.0,
            wait_hours: -1.0,
            avg_speed: None,
        };
        assert_eq!(invalid_field(request.validate()), "wait_hours");
    }

    #[test]
    fn test_hours_request_accepts_zero_speed() {
        let request = HoursRequest {
            total_miles: 100.0,
            wait_hours: 0.0,
            avg_speed: Some(0.0),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_fuel_estimate_request_rejects_negative_miles() {
        let request = FuelEstimateRequest {
            total_miles: -5.0,
            fuel_price: 4.0,
        };
        assert_eq!(invalid_field(request.validate()), "total_miles");
    }
}
