//! CSV export of a single estimate
//!
//! One record per export: the raw readings, the rounded total, and a UTC
//! timestamp attached at the boundary by the caller. The engine itself
//! never reads a clock.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::engine::FootprintResult;
use crate::inputs::WeeklyInputs;

/// Flat tabular record for CSV export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ExportRecord {
    pub name: String,
    pub car_km_per_week: f64,
    pub electricity_kwh_per_month: f64,
    pub plastic_items_per_week: u64,
    pub public_km_saved_per_week: f64,
    /// Total rounded to 3 decimal places
    pub estimated_weekly_co2_kg: f64,
    /// ISO-8601 UTC timestamp
    pub timestamp: String,
}

impl ExportRecord {
    /// Build an export record from inputs and a computed result
    ///
    /// The timestamp is caller-supplied so the record stays reproducible
    /// under test.
    pub fn new(
        name: Option<&str>,
        inputs: &WeeklyInputs,
        result: &FootprintResult,
        timestamp: DateTime<Utc>,
    ) -> Self {
        ExportRecord {
            name: name.unwrap_or("").to_string(),
            car_km_per_week: inputs.car_km_per_week,
            electricity_kwh_per_month: inputs.electricity_kwh_per_month,
            plastic_items_per_week: inputs.plastic_items_per_week.trunc() as u64,
            public_km_saved_per_week: inputs.public_km_per_week,
            estimated_weekly_co2_kg: (result.total_kg * 1000.0).round() / 1000.0,
            timestamp: timestamp.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

const CSV_HEADER: &str = "name,car_km_per_week,electricity_kwh_per_month,\
plastic_items_per_week,public_km_saved_per_week,estimated_weekly_co2_kg,timestamp";

/// Render one record as CSV with a header row
pub fn render_csv(record: &ExportRecord) -> String {
    let fields = [
        escape_csv_field(&record.name),
        record.car_km_per_week.to_string(),
        record.electricity_kwh_per_month.to_string(),
        record.plastic_items_per_week.to_string(),
        record.public_km_saved_per_week.to_string(),
        record.estimated_weekly_co2_kg.to_string(),
        escape_csv_field(&record.timestamp),
    ];
    format!("{}\n{}\n", CSV_HEADER, fields.join(","))
}

/// Quote a field only when it contains a comma, quote, or newline
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
