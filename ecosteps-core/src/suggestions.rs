//! Per-band advice text
//!
//! The literal strings are part of the output contract; downstream
//! output-equivalence tests compare them byte for byte.

use crate::band::Band;

const LOW_MESSAGE: &str =
    "Great job! Your footprint is low. Keep these habits and encourage others.";

const MODERATE_INTRO: &str =
    "Good effort — small changes can reduce your footprint further:";

const MODERATE_ITEMS: &[&str] = &[
    "Use energy-efficient appliances (LED lights, inverter AC settings)",
    "Replace single-use plastics with reusables",
    "Try a few car-free days or carpool",
];

const HIGH_INTRO: &str = "High footprint — recommended actions:";

const HIGH_ITEMS: &[&str] = &[
    "Reduce private car kilometers (use public transport or carpool)",
    "Use AC efficiently; switch to energy-efficient appliances",
    "Avoid single-use plastics; carry reusable bottle & bags",
    "Consider green energy plans or rooftop solar if possible",
];

/// Fixed ordered suggestion list for a band
///
/// Low is a single congratulatory message; Moderate and High carry an
/// intro line followed by their action items, in a fixed order.
pub fn suggestions_for(band: Band) -> Vec<String> {
    match band {
        Band::Low => vec![LOW_MESSAGE.to_string()],
        Band::Moderate => {
            let mut lines = vec![MODERATE_INTRO.to_string()];
            lines.extend(MODERATE_ITEMS.iter().map(|s| s.to_string()));
            lines
        }
        Band::High => {
            let mut lines = vec![HIGH_INTRO.to_string()];
            lines.extend(HIGH_ITEMS.iter().map(|s| s.to_string()));
            lines
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_is_single_message() {
        let lines = suggestions_for(Band::Low);
        assert_eq!(
            lines,
            vec!["Great job! Your footprint is low. Keep these habits and encourage others."]
        );
    }

    #[test]
    fn test_moderate_has_intro_and_three_items() {
        let lines = suggestions_for(Band::Moderate);
        assert_eq!(lines.len(), 4);
        assert_eq!(
            lines[0],
            "Good effort — small changes can reduce your footprint further:"
        );
        assert_eq!(lines[3], "Try a few car-free days or carpool");
    }

    #[test]
    fn test_high_has_intro_and_four_items() {
        let lines = suggestions_for(Band::High);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "High footprint — recommended actions:");
        assert_eq!(
            lines[4],
            "Consider green energy plans or rooftop solar if possible"
        );
    }
}
