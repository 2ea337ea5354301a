//! Scenario result models.
//!
//! This module contains the [`ScenarioResult`] type returned by the host
//! orchestration layer: the raw engine outputs, their display-rounded totals
//! and an audit trace recording every derivation that produced them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{FuelEstimate, HoursBreakdown, ReportTotals, TripInputs, TripReport};

/// How the ledger's fuel cost was obtained.
///
/// # Example
///
/// ```
/// use trip_ledger::models::TripMode;
///
/// let mode = TripMode::Scenario;
/// assert_eq!(serde_json::to_string(&mode).unwrap(), "\"scenario\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TripMode {
    /// Estimate-only: fuel cost comes from miles and the budgeted mpg.
    Scenario,
    /// A logged trip: fuel cost comes from the gallons actually purchased.
    Logged,
}

/// A single step in the audit trace recording one derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The policy the rule implements (e.g. "30 min per 8 driving hours").
    pub policy: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the result.
    pub reasoning: String,
}

/// A soft warning raised while evaluating a trip.
///
/// Warnings never block a result; they flag inputs worth a second look.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level ("low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for an evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during evaluation.
    pub warnings: Vec<AuditWarning>,
    /// The total evaluation duration in microseconds.
    pub duration_us: u64,
}

/// The complete, estimate-only result of evaluating a trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    /// Unique identifier for this evaluation.
    pub calculation_id: Uuid,
    /// When the evaluation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the evaluation.
    pub engine_version: String,
    /// Scenario or logged-trip mode.
    pub mode: TripMode,
    /// The inputs after the return-miles lock was applied.
    pub inputs: TripInputs,
    /// Hours-away breakdown.
    pub hours: HoursBreakdown,
    /// Display fuel estimate from lifetime fuel economy.
    pub fuel_estimate: FuelEstimate,
    /// The ledger report.
    pub report: TripReport,
    /// Display-rounded figures.
    pub totals: ReportTotals,
    /// Audit trace of every derivation.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_step() -> AuditStep {
        AuditStep {
            step_number: 1,
            rule_id: "trip_miles".to_string(),
            rule_name: "Trip Miles".to_string(),
            policy: "deadhead + loaded + return when returning".to_string(),
            input: serde_json::json!({"deadhead": 50.0, "loaded": 500.0}),
            output: serde_json::json!({"total_miles": 550.0}),
            reasoning: "50 + 500 = 550 miles".to_string(),
        }
    }

    #[test]
    fn test_trip_mode_serialization() {
        assert_eq!(
            serde_json::to_string(&TripMode::Logged).unwrap(),
            "\"logged\""
        );
        let mode: TripMode = serde_json::from_str("\"scenario\"").unwrap();
        assert_eq!(mode, TripMode::Scenario);
    }

    #[test]
    fn test_audit_step_serialization() {
        let json = serde_json::to_value(sample_step()).unwrap();

        assert_eq!(json["step_number"], 1);
        assert_eq!(json["rule_id"], "trip_miles");
        assert_eq!(json["output"]["total_miles"], 550.0);
    }

    #[test]
    fn test_audit_trace_default_is_empty() {
        let trace = AuditTrace::default();
        assert!(trace.steps.is_empty());
        assert!(trace.warnings.is_empty());
        assert_eq!(trace.duration_us, 0);
    }

    #[test]
    fn test_audit_warning_round_trip() {
        let warning = AuditWarning {
            code: "RETURN_MILES_GTE_LOADED".to_string(),
            message: "Return miles are equal to or greater than loaded miles".to_string(),
            severity: "medium".to_string(),
        };
        let json = serde_json::to_string(&warning).unwrap();
        let back: AuditWarning = serde_json::from_str(&json).unwrap();
        assert_eq!(back, warning);
    }
}
