//! Result rendering
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use crate::engine::FootprintResult;

/// Relative-scale progress indicator for a total, as a whole percent.
///
/// The scale stretches with the total (max(100, total * 2)) so the bar
/// stays meaningful for both small and very large footprints.
pub fn progress_percent(total_kg: f64) -> u32 {
    let max_scale = (total_kg * 2.0).max(100.0);
    let percent = (total_kg / max_scale * 100.0) as u32;
    percent.min(100)
}

/// Round a value to 3 decimal places for display
fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Render a result as text output
pub fn render_text(result: &FootprintResult, name: Option<&str>) -> String {
    let mut output = String::new();
    let display_name = match name {
        Some(n) if !n.is_empty() => n,
        _ => "User",
    };

    output.push_str(&format!(
        "{}: {:.2} kg CO2/week [{}]\n",
        display_name,
        result.total_kg,
        result.band.as_str()
    ));
    output.push('\n');

    // Breakdown (savings shown as a negative row, like the source table)
    output.push_str("Breakdown\n");
    output.push_str(&format!("{:<28} {}\n", "Category", "kg CO2/week"));
    let rows = [
        ("Car (weekly)", round3(result.car_emission_kg)),
        ("Electricity (weekly)", round3(result.electricity_emission_kg)),
        ("Plastic (weekly)", round3(result.plastic_emission_kg)),
        ("Savings (public/active)", round3(-result.savings_kg)),
    ];
    for (category, value) in rows {
        output.push_str(&format!("{:<28} {}\n", category, value));
    }
    output.push('\n');

    output.push_str(&format!(
        "Scale: {}% of relative range\n",
        progress_percent(result.total_kg)
    ));
    output.push_str(&format!(
        "Equivalence: ~{} young trees planted for a week (illustrative)\n",
        result.tree_equivalent
    ));
    output.push('\n');

    output.push_str("Suggestions\n");
    for line in &result.suggestions {
        output.push_str(&format!("- {}\n", line));
    }

    output
}

/// Render a result as JSON output
pub fn render_json(result: &FootprintResult) -> String {
    serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
}
