use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::pricing::{Variable, DEFAULT_SAMPLES, SCHOOL_RATE_PER_GB};

/// Default configuration file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "netcost.toml";

/// Prefix for environment overrides, e.g. `NETCOST__PRICING__CURRENCY`
pub const ENV_PREFIX: &str = "NETCOST";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    pub defaults: DefaultsConfig,
    pub pricing: PricingConfig,
    pub logging: LoggingConfig,
}

/// Initial form values and sweep settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DefaultsConfig {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub range_start: f64,
    pub range_end: f64,
    pub variable: Variable,
    pub samples: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            x: 1000.0,
            y: 1.0,
            z: 5000.0,
            range_start: 500.0,
            range_end: 2000.0,
            variable: Variable::X,
            samples: DEFAULT_SAMPLES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PricingConfig {
    pub school_rate_per_gb: f64,
    pub currency: String,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            school_rate_per_gb: SCHOOL_RATE_PER_GB,
            currency: "CNY".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// "text" or "json"
    pub format: String,
    /// Log file used while the interactive analyzer owns the terminal
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
            file: None,
        }
    }
}

/// Load configuration from built-in defaults, an optional TOML file at
/// `path`, and `NETCOST__*` environment variables, in that order.
pub fn load_config(path: &Path) -> anyhow::Result<Config> {
    let config = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
        .build()?;

    let cfg: Config = config.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> Result<(), AppError> {
    let defaults = &cfg.defaults;

    for (name, value) in [
        ("defaults.x", defaults.x),
        ("defaults.y", defaults.y),
        ("defaults.z", defaults.z),
        ("defaults.range_start", defaults.range_start),
        ("defaults.range_end", defaults.range_end),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::Config(format!(
                "{} must be a positive number, got {}",
                name, value
            )));
        }
    }

    if defaults.range_start >= defaults.range_end {
        return Err(AppError::Config(format!(
            "defaults.range_start ({}) must be less than defaults.range_end ({})",
            defaults.range_start,
            defaults.range_end
        )));
    }

    if defaults.samples < 2 {
        return Err(AppError::Config(format!(
            "defaults.samples must be at least 2, got {}",
            defaults.samples
        )));
    }

    let rate = cfg.pricing.school_rate_per_gb;
    if !rate.is_finite() || rate < 0.0 {
        return Err(AppError::Config(format!(
            "pricing.school_rate_per_gb must be non-negative, got {}",
            rate
        )));
    }

    if cfg.pricing.currency.trim().is_empty() {
        return Err(AppError::Config(
            "pricing.currency cannot be empty".to_string(),
        ));
    }

    match cfg.logging.format.as_str() {
        "text" | "json" => {}
        other => {
            return Err(AppError::Config(format!(
                "Invalid logging.format: '{}'. Must be one of: text, json",
                other
            )))
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let cfg = Config::default();
        assert!(validate_config(&cfg).is_ok());
        assert_eq!(cfg.pricing.school_rate_per_gb, 0.6);
        assert_eq!(cfg.defaults.samples, 100);
        assert_eq!(cfg.defaults.variable, Variable::X);
    }

    #[test]
    fn test_validate_config_rejects_reversed_range() {
        let mut cfg = Config::default();
        cfg.defaults.range_start = 3000.0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("must be less than"));
    }

    #[test]
    fn test_validate_config_rejects_non_positive_defaults() {
        let mut cfg = Config::default();
        cfg.defaults.y = 0.0;

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("defaults.y"));
    }

    #[test]
    fn test_validate_config_rejects_too_few_samples() {
        let mut cfg = Config::default();
        cfg.defaults.samples = 1;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_negative_rate() {
        let mut cfg = Config::default();
        cfg.pricing.school_rate_per_gb = -0.1;
        assert!(validate_config(&cfg).is_err());
    }

    #[test]
    fn test_validate_config_rejects_unknown_log_format() {
        let mut cfg = Config::default();
        cfg.logging.format = "xml".to_string();

        let result = validate_config(&cfg);
        assert!(result.unwrap_err().to_string().contains("logging.format"));
    }

    #[test]
    fn test_config_serializes_to_toml() {
        let toml_string = toml::to_string_pretty(&Config::default()).unwrap();
        assert!(toml_string.contains("[pricing]"));
        assert!(toml_string.contains("variable = \"x\""));
    }
}
