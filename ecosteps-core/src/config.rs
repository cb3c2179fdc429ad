//! Configuration file support for EcoSteps
//!
//! Loads optional overrides from JSON files.
//!
//! Search order:
//! 1. Explicit path (--config CLI flag)
//! 2. `.ecostepsrc.json` in the working directory
//! 3. `ecosteps.config.json` in the working directory
//!
//! All fields are optional. CLI flags take precedence over config file
//! values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::factors::{BandThresholds, EmissionFactors};

/// EcoSteps configuration loaded from a JSON config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EcostepsConfig {
    /// Partial emission factor overrides
    #[serde(default)]
    pub factors: Option<FactorConfig>,

    /// Custom band thresholds
    #[serde(default)]
    pub thresholds: Option<ThresholdConfig>,

    /// Default display name for rendered results
    #[serde(default)]
    pub name: Option<String>,
}

/// Partial emission factor overrides
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FactorConfig {
    /// kg CO2 per car km (default: 0.12)
    pub car_per_km: Option<f64>,
    /// kg CO2 per kWh (default: 0.82)
    pub electricity_per_kwh: Option<f64>,
    /// kg CO2 per plastic item (default: 0.08)
    pub plastic_per_item: Option<f64>,
    /// kg CO2 avoided per public/active km (default: 0.10)
    pub public_transport_saving_per_km: Option<f64>,
}

/// Custom band thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdConfig {
    /// Total kg threshold for Moderate (default: 20.0)
    pub moderate: Option<f64>,
    /// Total kg threshold for High (default: 50.0)
    pub high: Option<f64>,
}

/// Resolved configuration with defaults filled in
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub factors: EmissionFactors,
    pub thresholds: BandThresholds,
    pub name: Option<String>,
    /// Path the config was loaded from (None if defaults)
    pub config_path: Option<PathBuf>,
}

impl EcostepsConfig {
    /// Validate the configuration for logical errors
    pub fn validate(&self) -> Result<()> {
        if let Some(ref f) = self.factors {
            let fields = [
                ("car_per_km", f.car_per_km),
                ("electricity_per_kwh", f.electricity_per_kwh),
                ("plastic_per_item", f.plastic_per_item),
                (
                    "public_transport_saving_per_km",
                    f.public_transport_saving_per_km,
                ),
            ];
            for (name, val) in fields {
                if let Some(v) = val {
                    if !v.is_finite() {
                        anyhow::bail!("factors.{} must be finite", name);
                    }
                    if v < 0.0 {
                        anyhow::bail!("factors.{} must be non-negative (got {})", name, v);
                    }
                }
            }
        }

        if let Some(ref t) = self.thresholds {
            let defaults = BandThresholds::default();
            let moderate = t.moderate.unwrap_or(defaults.moderate);
            let high = t.high.unwrap_or(defaults.high);

            if moderate <= 0.0 {
                anyhow::bail!("thresholds.moderate must be positive (got {})", moderate);
            }
            if high <= 0.0 {
                anyhow::bail!("thresholds.high must be positive (got {})", high);
            }
            if moderate >= high {
                anyhow::bail!(
                    "thresholds.moderate ({}) must be less than thresholds.high ({})",
                    moderate,
                    high
                );
            }
        }

        Ok(())
    }

    /// Resolve config into a ready-to-use form
    pub fn resolve(&self) -> Result<ResolvedConfig> {
        self.validate()?;

        let default_factors = EmissionFactors::default();
        let factors = match &self.factors {
            Some(f) => EmissionFactors {
                car_per_km: f.car_per_km.unwrap_or(default_factors.car_per_km),
                electricity_per_kwh: f
                    .electricity_per_kwh
                    .unwrap_or(default_factors.electricity_per_kwh),
                plastic_per_item: f.plastic_per_item.unwrap_or(default_factors.plastic_per_item),
                public_transport_saving_per_km: f
                    .public_transport_saving_per_km
                    .unwrap_or(default_factors.public_transport_saving_per_km),
            },
            None => default_factors,
        };

        let default_thresholds = BandThresholds::default();
        let thresholds = match &self.thresholds {
            Some(t) => BandThresholds {
                moderate: t.moderate.unwrap_or(default_thresholds.moderate),
                high: t.high.unwrap_or(default_thresholds.high),
            },
            None => default_thresholds,
        };

        Ok(ResolvedConfig {
            factors,
            thresholds,
            name: self.name.clone(),
            config_path: None,
        })
    }
}

impl ResolvedConfig {
    /// Build a ResolvedConfig with all defaults (no config file)
    pub fn defaults() -> Result<Self> {
        EcostepsConfig::default().resolve()
    }
}

/// Discover and load a config file from a directory
///
/// Search order:
/// 1. `.ecostepsrc.json`
/// 2. `ecosteps.config.json`
///
/// Returns `None` if no config file is found (use defaults).
pub fn discover_config(dir: &Path) -> Result<Option<(EcostepsConfig, PathBuf)>> {
    let rc_path = dir.join(".ecostepsrc.json");
    if rc_path.exists() {
        let config = load_config_file(&rc_path)?;
        return Ok(Some((config, rc_path)));
    }

    let config_path = dir.join("ecosteps.config.json");
    if config_path.exists() {
        let config = load_config_file(&config_path)?;
        return Ok(Some((config, config_path)));
    }

    Ok(None)
}

/// Load config from an explicit file path
pub fn load_config_file(path: &Path) -> Result<EcostepsConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;

    let config: EcostepsConfig = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;

    config
        .validate()
        .with_context(|| format!("invalid config in: {}", path.display()))?;

    Ok(config)
}

/// Load and resolve config
///
/// If `config_path` is provided, loads from that file. Otherwise,
/// discovers config from `dir`. Returns default config if nothing is
/// found.
pub fn load_and_resolve(dir: &Path, config_path: Option<&Path>) -> Result<ResolvedConfig> {
    let (config, source_path) = if let Some(path) = config_path {
        let config = load_config_file(path)?;
        (config, Some(path.to_path_buf()))
    } else {
        match discover_config(dir)? {
            Some((config, path)) => (config, Some(path)),
            None => (EcostepsConfig::default(), None),
        }
    };

    let mut resolved = config.resolve()?;
    resolved.config_path = source_path;
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_default_config_is_valid() {
        let config = EcostepsConfig::default();
        config.validate().expect("default config should be valid");
        let resolved = config.resolve().expect("default config should resolve");
        assert_eq!(resolved.factors, EmissionFactors::default());
        assert_eq!(resolved.thresholds, BandThresholds::default());
        assert!(resolved.name.is_none());
    }

    #[test]
    fn test_parse_minimal_config() {
        let json = r#"{}"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
    }

    #[test]
    fn test_parse_full_config() {
        let json = r#"{
            "factors": {
                "car_per_km": 0.15,
                "electricity_per_kwh": 0.7,
                "plastic_per_item": 0.1,
                "public_transport_saving_per_km": 0.12
            },
            "thresholds": {
                "moderate": 25.0,
                "high": 60.0
            },
            "name": "Asha"
        }"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        config.validate().unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.factors.car_per_km, 0.15);
        assert_eq!(resolved.thresholds.moderate, 25.0);
        assert_eq!(resolved.thresholds.high, 60.0);
        assert_eq!(resolved.name.as_deref(), Some("Asha"));
    }

    #[test]
    fn test_partial_factors_use_defaults_for_rest() {
        let json = r#"{"factors": {"car_per_km": 0.2}}"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        let resolved = config.resolve().unwrap();
        assert_eq!(resolved.factors.car_per_km, 0.2);
        assert_eq!(resolved.factors.electricity_per_kwh, 0.82); // default
        assert_eq!(resolved.factors.plastic_per_item, 0.08); // default
        assert_eq!(resolved.factors.public_transport_saving_per_km, 0.10); // default
    }

    #[test]
    fn test_reject_unknown_fields() {
        let json = r#"{"unknown_field": true}"#;
        let result: Result<EcostepsConfig, _> = serde_json::from_str(json);
        assert!(result.is_err(), "unknown fields should be rejected");
    }

    #[test]
    fn test_reject_negative_factor() {
        let json = r#"{"factors": {"car_per_km": -0.1}}"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_unordered_thresholds() {
        let json = r#"{"thresholds": {"moderate": 60.0, "high": 25.0}}"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_reject_negative_threshold() {
        let json = r#"{"thresholds": {"moderate": -5.0}}"#;
        let config: EcostepsConfig = serde_json::from_str(json).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_discover_ecostepsrc() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join(".ecostepsrc.json");
        fs::write(&config_path, r#"{"name": "Asha"}"#).unwrap();

        let result = discover_config(dir.path()).unwrap();
        assert!(result.is_some());
        let (config, path) = result.unwrap();
        assert_eq!(config.name.as_deref(), Some("Asha"));
        assert_eq!(path, config_path);
    }

    #[test]
    fn test_discover_priority_order() {
        let dir = tempfile::tempdir().unwrap();

        // Create both config files - .ecostepsrc.json should win
        fs::write(dir.path().join(".ecostepsrc.json"), r#"{"name": "rc"}"#).unwrap();
        fs::write(
            dir.path().join("ecosteps.config.json"),
            r#"{"name": "config"}"#,
        )
        .unwrap();

        let result = discover_config(dir.path()).unwrap();
        let (config, _) = result.unwrap();
        assert_eq!(
            config.name.as_deref(),
            Some("rc"),
            ".ecostepsrc.json should take priority"
        );
    }

    #[test]
    fn test_no_config_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let result = discover_config(dir.path()).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_and_resolve_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = load_and_resolve(dir.path(), None).unwrap();
        assert!(resolved.config_path.is_none());
        assert_eq!(resolved.factors.car_per_km, 0.12);
    }

    #[test]
    fn test_load_and_resolve_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.json");
        fs::write(&config_path, r#"{"thresholds": {"moderate": 15.0}}"#).unwrap();

        let resolved = load_and_resolve(dir.path(), Some(&config_path)).unwrap();
        assert_eq!(resolved.thresholds.moderate, 15.0);
        assert_eq!(resolved.thresholds.high, 50.0); // default
        assert_eq!(resolved.config_path, Some(config_path));
    }
}
