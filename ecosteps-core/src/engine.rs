//! Weekly carbon footprint computation
//!
//! Global invariants enforced:
//! - No global mutable state
//! - No randomness, clocks, threads, or I/O
//! - Identical input yields bit-identical output

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::band::{classify_with_thresholds, Band};
use crate::factors::{BandThresholds, EmissionFactors};
use crate::inputs::WeeklyInputs;
use crate::suggestions::suggestions_for;

/// Fixed approximation of weeks per month (not calendar-accurate)
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Illustrative weekly CO2 absorption of one young tree, in kg.
/// Kept exactly as the reference value; not a scientific constant.
pub const TREE_KG_PER_WEEK: f64 = 0.7;

/// Errors produced by the engine
///
/// A single kind: the engine refuses out-of-domain input rather than
/// producing a nonsensical result. Field-level attribution is the
/// caller's job before invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid input: readings must be finite and non-negative")]
    InvalidInput,
}

/// Computed footprint estimate for one set of readings
///
/// Freshly constructed per compute call; no shared state between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FootprintResult {
    pub car_emission_kg: f64,
    pub electricity_emission_kg: f64,
    pub plastic_emission_kg: f64,
    pub savings_kg: f64,
    pub total_kg: f64,
    pub band: Band,
    pub tree_equivalent: u64,
    pub suggestions: Vec<String>,
}

/// Compute a footprint estimate with default factors and thresholds
pub fn compute(inputs: &WeeklyInputs) -> Result<FootprintResult, EngineError> {
    compute_with_config(
        inputs,
        &EmissionFactors::default(),
        &BandThresholds::default(),
    )
}

/// Compute a footprint estimate with custom factors and thresholds
///
/// Steps:
/// 1. electricity is normalized to a weekly basis (monthly reading / 4.0)
/// 2. plastic item counts are truncated toward zero before weighting
/// 3. total = max(0, car + electricity + plastic - savings); savings can
///    never push the total below zero
/// 4. band classification and suggestion selection follow from the total
pub fn compute_with_config(
    inputs: &WeeklyInputs,
    factors: &EmissionFactors,
    thresholds: &BandThresholds,
) -> Result<FootprintResult, EngineError> {
    inputs.validate()?;
    factors.validate()?;
    thresholds.validate()?;

    let weekly_electricity = inputs.electricity_kwh_per_month / WEEKS_PER_MONTH;
    let car_emission_kg = inputs.car_km_per_week * factors.car_per_km;
    let electricity_emission_kg = weekly_electricity * factors.electricity_per_kwh;
    // Discrete per-item unit: fractional counts truncate rather than reject
    let plastic_emission_kg = inputs.plastic_items_per_week.trunc() * factors.plastic_per_item;
    let savings_kg = inputs.public_km_per_week * factors.public_transport_saving_per_km;

    let raw_total = car_emission_kg + electricity_emission_kg + plastic_emission_kg - savings_kg;
    let total_kg = raw_total.max(0.0);

    let band = classify_with_thresholds(total_kg, thresholds);
    let tree_equivalent = (total_kg / TREE_KG_PER_WEEK).floor() as u64;

    Ok(FootprintResult {
        car_emission_kg,
        electricity_emission_kg,
        plastic_emission_kg,
        savings_kg,
        total_kg,
        band,
        tree_equivalent,
        suggestions: suggestions_for(band),
    })
}
