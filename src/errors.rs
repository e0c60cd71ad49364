//! Error handling
//!
//! The adapter functions in [`crate::adapter`] never produce these errors: they
//! hand back whatever the wrapped builder or the configuration block returned.
//! `BlocksError` covers the crate's own work (markup rendering, configuration
//! loading and code generation).

use thiserror::Error;

/// Crate error
#[derive(Error, Debug)]
pub enum BlocksError {
    /// Markup could not be written
    #[error("Render error: {0}")]
    Render(String),

    /// Configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Code generation failed
    #[error("Codegen error: {0}")]
    Codegen(String),

    /// Constructor argument spec is not `name:Type`
    #[error("Invalid argument spec: {0}")]
    InvalidArgument(String),

    /// Error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BlocksError>;
