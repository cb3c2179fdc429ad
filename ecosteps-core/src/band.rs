//! Footprint severity band classification
//!
//! Global invariants enforced:
//! - Band is a deterministic pure function of the total
//! - Monotonic classification: a larger total never maps to a lower band

use serde::{Deserialize, Serialize};

use crate::factors::BandThresholds;

/// Qualitative severity band derived from total weekly emissions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Band {
    Low,      // < 20
    Moderate, // 20-50
    High,     // >= 50
}

impl Band {
    pub fn as_str(&self) -> &'static str {
        match self {
            Band::Low => "Low",
            Band::Moderate => "Moderate",
            Band::High => "High",
        }
    }
}

/// Assign a band with default thresholds
pub fn classify(total_kg: f64) -> Band {
    classify_with_thresholds(total_kg, &BandThresholds::default())
}

/// Assign a band with custom thresholds
///
/// Lower boundaries are inclusive: exactly `moderate` is Moderate,
/// exactly `high` is High.
pub fn classify_with_thresholds(total_kg: f64, thresholds: &BandThresholds) -> Band {
    if total_kg < thresholds.moderate {
        Band::Low
    } else if total_kg < thresholds.high {
        Band::Moderate
    } else {
        Band::High
    }
}
