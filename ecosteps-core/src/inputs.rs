//! Weekly lifestyle input readings
//!
//! The engine never validates UI-level semantics; callers are expected to
//! hand over non-negative finite numbers. `validate` is the single gate the
//! engine itself applies before computing.

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Caller-supplied weekly/monthly lifestyle readings
///
/// All fields must be finite and >= 0. `plastic_items_per_week` is a
/// discrete count; fractional values are truncated toward zero by the
/// engine rather than rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct WeeklyInputs {
    pub car_km_per_week: f64,
    pub electricity_kwh_per_month: f64,
    pub plastic_items_per_week: f64,
    pub public_km_per_week: f64,
}

impl WeeklyInputs {
    /// Check that every reading is finite and non-negative
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            self.car_km_per_week,
            self.electricity_kwh_per_month,
            self.plastic_items_per_week,
            self.public_km_per_week,
        ];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(EngineError::InvalidInput);
        }
        Ok(())
    }
}
