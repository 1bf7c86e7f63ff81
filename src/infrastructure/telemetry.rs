//! # Telemetry
//!
//! Global `tracing` subscriber setup.
//!
//! `RUST_LOG` overrides the configured level when set.

use crate::infrastructure::config::{LogConfig, LogFormat};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Tracing initialisation failure.
#[derive(Debug, Error)]
#[error("failed to initialise tracing: {0}")]
pub struct TelemetryError(String);

/// Builds the filter: `RUST_LOG` if set, the configured level otherwise.
///
/// # Errors
///
/// Returns `TelemetryError` if the configured level is not a valid
/// filter directive.
pub fn env_filter(config: &LogConfig) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| TelemetryError(e.to_string())),
    }
}

/// Installs the global subscriber.
///
/// # Errors
///
/// Returns `TelemetryError` if the filter is invalid or a global
/// subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), TelemetryError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter(config)?)
        .with_target(true);

    let result = match config.format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    result.map_err(|e| TelemetryError(e.to_string()))
}
