//! Pharmacy engine binary.
//!
//! Drives the catalogue from configuration through the day loop and writes
//! every day's state to a JSON log.
//!
//! # Startup Sequence
//!
//! 1. Load configuration from `PHARMACY_CONFIG` or `pharmacy-config.yaml`
//! 2. Initialize structured logging (tracing)
//! 3. Build the pharmacy from the configured catalogue
//! 4. Run the configured number of days, recording each one
//! 5. Write `{"result": [...]}` to the configured output path

mod error;

use std::path::{Path, PathBuf};

use pharmacy_core::clock::DayClock;
use pharmacy_core::config::SimulationConfig;
use pharmacy_core::runner::{self, SnapshotLog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::error::EngineError;

/// Default configuration file, relative to the working directory.
const DEFAULT_CONFIG_PATH: &str = "pharmacy-config.yaml";

/// Application entry point for the pharmacy engine.
///
/// # Errors
///
/// Returns an error if configuration loading, the run, or writing the day
/// log fails.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Load configuration.
    let config = load_config()?;

    // 2. Initialize structured logging. RUST_LOG wins over the config level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
        )
        .with_target(true)
        .init();

    info!(
        days = config.simulation.days,
        drug_count = config.drugs.len(),
        output_path = %config.simulation.output_path.display(),
        "Configuration loaded"
    );

    // 3-5. Run and write the log.
    let log = simulate(&config)?;
    write_log(&config.simulation.output_path, &log)?;

    info!(
        days_recorded = log.days(),
        output_path = %config.simulation.output_path.display(),
        "pharmacy-engine finished"
    );

    Ok(())
}

/// Resolve the configuration file path.
///
/// `PHARMACY_CONFIG` wins; otherwise `pharmacy-config.yaml` is used when it
/// exists in the working directory.
fn config_path() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("PHARMACY_CONFIG") {
        return Some(PathBuf::from(path));
    }
    let default = Path::new(DEFAULT_CONFIG_PATH);
    default.exists().then(|| default.to_path_buf())
}

/// Load the simulation configuration, falling back to defaults when no file
/// is present.
fn load_config() -> Result<SimulationConfig, EngineError> {
    match config_path() {
        Some(path) => Ok(SimulationConfig::from_file(&path)?),
        None => {
            let mut config = SimulationConfig::default();
            config.simulation.apply_env_overrides();
            Ok(config)
        }
    }
}

/// Build the pharmacy and run it for the configured number of days.
fn simulate(config: &SimulationConfig) -> Result<SnapshotLog, EngineError> {
    let mut pharmacy = config.build_pharmacy();
    let mut clock = DayClock::new();
    let mut log = SnapshotLog::new();

    let result = runner::run_days(&mut pharmacy, &mut clock, config.simulation.days, &mut log)?;
    info!(
        total_days = result.total_days,
        expired = result.final_summary.as_ref().map_or(0, |s| s.expired),
        "Run complete"
    );

    Ok(log)
}

/// Write the day log as pretty-printed JSON.
fn write_log(path: &Path, log: &SnapshotLog) -> Result<(), EngineError> {
    let json = serde_json::to_string_pretty(log)?;
    std::fs::write(path, json).map_err(|source| EngineError::Output {
        path: path.display().to_string(),
        source,
    })
}
