//! Emission factors and band thresholds
//!
//! Global invariants enforced:
//! - Factors are immutable for the life of a computation
//! - Deterministic classification thresholds

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Fixed emission factors (India-relevant, coarse estimates)
///
/// Each factor converts one unit of activity into kg of CO2-equivalent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmissionFactors {
    /// kg CO2 per km driven by private car
    pub car_per_km: f64,
    /// kg CO2 per kWh of electricity consumed
    pub electricity_per_kwh: f64,
    /// kg CO2 per single-use plastic item
    pub plastic_per_item: f64,
    /// kg CO2 avoided per km of public/active transport substituted for car travel
    pub public_transport_saving_per_km: f64,
}

impl Default for EmissionFactors {
    fn default() -> Self {
        EmissionFactors {
            car_per_km: 0.12,
            electricity_per_kwh: 0.82,
            plastic_per_item: 0.08,
            public_transport_saving_per_km: 0.10,
        }
    }
}

impl EmissionFactors {
    /// Validate that every factor is finite and non-negative
    pub fn validate(&self) -> Result<(), EngineError> {
        let fields = [
            self.car_per_km,
            self.electricity_per_kwh,
            self.plastic_per_item,
            self.public_transport_saving_per_km,
        ];
        if fields.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(EngineError::InvalidInput);
        }
        Ok(())
    }
}

/// Band classification thresholds on total weekly kg CO2
///
/// Boundaries are inclusive on the lower end of Moderate/High:
/// exactly `moderate` classifies as Moderate, exactly `high` as High.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandThresholds {
    pub moderate: f64,
    pub high: f64,
}

impl Default for BandThresholds {
    fn default() -> Self {
        BandThresholds {
            moderate: 20.0,
            high: 50.0,
        }
    }
}

impl BandThresholds {
    /// Validate that thresholds are finite, non-negative, and ordered
    pub fn validate(&self) -> Result<(), EngineError> {
        if !self.moderate.is_finite() || !self.high.is_finite() {
            return Err(EngineError::InvalidInput);
        }
        if self.moderate < 0.0 || self.high < 0.0 || self.moderate >= self.high {
            return Err(EngineError::InvalidInput);
        }
        Ok(())
    }
}
