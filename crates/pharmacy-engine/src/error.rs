//! Error types for the pharmacy engine binary.
//!
//! [`EngineError`] wraps every failure mode during startup, the run and
//! writing the day log, giving `main` a single type to propagate with `?`.

/// Top-level error for the pharmacy engine binary.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: pharmacy_core::config::ConfigError,
    },

    /// The day loop failed.
    #[error("runner error: {source}")]
    Runner {
        /// The underlying runner error.
        #[from]
        source: pharmacy_core::runner::RunnerError,
    },

    /// The day log could not be serialized.
    #[error("failed to serialize day log: {source}")]
    Serialize {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },

    /// The day log could not be written.
    #[error("failed to write {path}: {source}")]
    Output {
        /// Destination path.
        path: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
}
