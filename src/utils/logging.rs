//! Logging setup
//!
//! The library only emits `tracing` events; installing a subscriber is left to
//! binaries and tests through [`init_logger`].

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;

use crate::errors::{BlocksError, Result};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    /// Filter from `RUST_LOG`, falling back to the configured level
    pub fn env_filter(&self) -> Result<EnvFilter> {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => Ok(filter),
            Err(_) => EnvFilter::try_new(&self.level).map_err(|e| {
                BlocksError::Config(format!("Invalid log level {:?}: {}", self.level, e))
            }),
        }
    }
}

/// Install a global fmt subscriber writing to stderr
///
/// Returns `Ok(false)` when another subscriber was already installed.
pub fn init_logger(config: &LoggingConfig) -> Result<bool> {
    let filter = config.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.with_target)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Text => builder.try_init().is_ok(),
        LogFormat::Json => builder.json().try_init().is_ok(),
    };
    Ok(installed)
}
