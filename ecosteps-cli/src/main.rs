//! EcoSteps CLI - weekly carbon footprint estimator

#![deny(warnings)]

// Global invariants enforced:
// - Deterministic output for identical inputs (timestamps attached only at
//   the export boundary)
// - All input validation happens here, before the engine is invoked

use anyhow::Context;
use chrono::Utc;
use clap::{Parser, Subcommand};
use ecosteps_core::config;
use ecosteps_core::{
    compute_with_config, render_csv, render_json, render_text, ExportRecord, WeeklyInputs,
};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "ecosteps")]
#[command(about = "Estimate your weekly CO2 footprint from lifestyle inputs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the weekly footprint from lifestyle readings
    Estimate {
        /// Car kilometres per week
        #[arg(long)]
        car_km: f64,

        /// Electricity (kWh) per month
        #[arg(long)]
        electricity_kwh: f64,

        /// Single-use plastic items per week (fractional values are truncated)
        #[arg(long)]
        plastic_items: f64,

        /// Kilometres by public/active transport instead of car per week
        #[arg(long)]
        public_km: f64,

        /// Display name (optional; anonymous when omitted)
        #[arg(long)]
        name: Option<String>,

        /// Output format
        #[arg(long, default_value = "text")]
        format: OutputFormat,

        /// Output file path (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Path to config file (default: auto-discover)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate or inspect a configuration file
    #[command(name = "config")]
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Validate a config file without running an estimate
    Validate {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
    /// Show the resolved configuration (merged defaults + config file)
    Show {
        /// Path to config file (default: auto-discover from current directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Csv,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            car_km,
            electricity_kwh,
            plastic_items,
            public_km,
            name,
            format,
            output,
            config: config_path,
        } => {
            // Field-level validation is the caller's responsibility; the
            // engine only knows a single InvalidInput kind.
            validate_reading("--car-km", car_km)?;
            validate_reading("--electricity-kwh", electricity_kwh)?;
            validate_reading("--plastic-items", plastic_items)?;
            validate_reading("--public-km", public_km)?;

            // Load configuration
            let cwd = std::env::current_dir()?;
            let resolved = config::load_and_resolve(&cwd, config_path.as_deref())
                .context("failed to load configuration")?;

            if let Some(ref path) = resolved.config_path {
                eprintln!("Using config: {}", path.display());
            }

            // CLI flag overrides the config default name
            let display_name = name.or(resolved.name.clone());

            let inputs = WeeklyInputs {
                car_km_per_week: car_km,
                electricity_kwh_per_month: electricity_kwh,
                plastic_items_per_week: plastic_items,
                public_km_per_week: public_km,
            };

            let result = compute_with_config(&inputs, &resolved.factors, &resolved.thresholds)
                .context("failed to compute footprint")?;

            let rendered = match format {
                OutputFormat::Text => render_text(&result, display_name.as_deref()),
                OutputFormat::Json => format!("{}\n", render_json(&result)),
                OutputFormat::Csv => {
                    // Timestamp attaches at the export boundary, never
                    // inside the engine
                    let record =
                        ExportRecord::new(display_name.as_deref(), &inputs, &result, Utc::now());
                    render_csv(&record)
                }
            };

            match output {
                Some(path) => {
                    write_output(&path, &rendered)?;
                    eprintln!("Results written to: {}", path.display());
                }
                None => print!("{}", rendered),
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Validate { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref());

                match resolved {
                    Ok(config) => {
                        if let Some(ref p) = config.config_path {
                            println!("Config valid: {}", p.display());
                        } else {
                            println!("No config file found. Using defaults.");
                        }
                    }
                    Err(e) => {
                        eprintln!("Config validation failed: {:#}", e);
                        std::process::exit(1);
                    }
                }
            }
            ConfigAction::Show { path } => {
                let cwd = std::env::current_dir()?;
                let resolved = config::load_and_resolve(&cwd, path.as_deref())
                    .context("failed to load configuration")?;

                println!("Configuration:");
                if let Some(ref p) = resolved.config_path {
                    println!("  Source: {}", p.display());
                } else {
                    println!("  Source: defaults (no config file found)");
                }
                println!();
                println!("Emission factors (kg CO2 per unit):");
                println!("  car_per_km: {}", resolved.factors.car_per_km);
                println!(
                    "  electricity_per_kwh: {}",
                    resolved.factors.electricity_per_kwh
                );
                println!("  plastic_per_item: {}", resolved.factors.plastic_per_item);
                println!(
                    "  public_transport_saving_per_km: {}",
                    resolved.factors.public_transport_saving_per_km
                );
                println!();
                println!("Band thresholds (total kg/week):");
                println!("  moderate: {}", resolved.thresholds.moderate);
                println!("  high: {}", resolved.thresholds.high);
                println!();
                println!(
                    "Default name: {}",
                    resolved.name.as_deref().unwrap_or("none")
                );
            }
        },
    }

    Ok(())
}

/// Reject a reading that is negative or non-finite, naming the flag
fn validate_reading(flag: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() {
        anyhow::bail!("{} must be a finite number (got {})", flag, value);
    }
    if value < 0.0 {
        anyhow::bail!("{} must be non-negative (got {})", flag, value);
    }
    Ok(())
}

/// Write rendered output to a file with the atomic temp + rename pattern
fn write_output(path: &Path, contents: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, contents)
        .with_context(|| format!("failed to write temporary file: {}", temp_path.display()))?;
    std::fs::rename(&temp_path, path)
        .with_context(|| format!("failed to rename temporary file to: {}", path.display()))?;

    Ok(())
}
