//! Configuration loading and typed config structures for the pharmacy
//! simulation.
//!
//! The configuration lives in `pharmacy-config.yaml`. This module defines
//! strongly-typed structs that mirror the YAML structure and a loader that
//! reads the file. Every field has a default, so an empty document is a
//! valid configuration describing the stock catalogue run for 30 days.

use std::path::{Path, PathBuf};

use pharmacy_types::DrugRecord;
use serde::Deserialize;

use crate::pharmacy::Pharmacy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationConfig {
    /// Run length and output location.
    #[serde(default)]
    pub simulation: SimulationBoundsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Starting catalogue, in order.
    #[serde(default = "default_drugs")]
    pub drugs: Vec<DrugRecord>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            simulation: SimulationBoundsConfig::default(),
            logging: LoggingConfig::default(),
            drugs: default_drugs(),
        }
    }
}

impl SimulationConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values:
    /// - `PHARMACY_DAYS` overrides `simulation.days`
    /// - `PHARMACY_OUTPUT` overrides `simulation.output_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.simulation.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.simulation.apply_env_overrides();
        Ok(config)
    }

    /// Build the starting pharmacy from the configured catalogue.
    pub fn build_pharmacy(&self) -> Pharmacy {
        Pharmacy::from(self.drugs.clone())
    }
}

/// Simulation run parameters.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SimulationBoundsConfig {
    /// Number of days to simulate.
    #[serde(default = "default_days")]
    pub days: u64,

    /// Where the JSON day log is written.
    #[serde(default = "default_output_path")]
    pub output_path: PathBuf,
}

impl Default for SimulationBoundsConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            output_path: default_output_path(),
        }
    }
}

impl SimulationBoundsConfig {
    /// Apply environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var("PHARMACY_DAYS").ok().as_deref(),
            std::env::var("PHARMACY_OUTPUT").ok().as_deref(),
        );
    }

    /// Apply overrides from raw strings. A `days` value that is not a valid
    /// `u64` is ignored.
    fn apply_overrides(&mut self, days: Option<&str>, output_path: Option<&str>) {
        if let Some(days) = days.and_then(|v| v.trim().parse::<u64>().ok()) {
            self.days = days;
        }
        if let Some(path) = output_path {
            self.output_path = PathBuf::from(path);
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

const fn default_days() -> u64 {
    30
}

fn default_output_path() -> PathBuf {
    PathBuf::from("output.json")
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_drugs() -> Vec<DrugRecord> {
    vec![
        DrugRecord::new("Doliprane", 20, 30),
        DrugRecord::new("Herbal Tea", 10, 5),
        DrugRecord::new("Fervex", 12, 35),
        DrugRecord::new("Magic Pill", 15, 40),
        DrugRecord::new("Dafalgan", 20, 30),
    ]
}
