//! EcoSteps core library - weekly carbon footprint estimation

#![deny(warnings)]

// Global invariants enforced in this crate:
// - The engine is a pure, synchronous function
// - No global mutable state
// - No randomness, clocks, threads, or async inside the engine
// - Identical input yields bit-identical output
// - Savings never push the total below zero

pub mod band;
pub mod config;
pub mod engine;
pub mod export;
pub mod factors;
pub mod inputs;
pub mod report;
pub mod suggestions;

pub use band::Band;
pub use config::ResolvedConfig;
pub use engine::{compute, compute_with_config, EngineError, FootprintResult};
pub use export::{render_csv, ExportRecord};
pub use factors::{BandThresholds, EmissionFactors};
pub use inputs::WeeklyInputs;
pub use report::{render_json, render_text};
