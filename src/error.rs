//! Engine errors.
//!
//! The cognitive core itself never fails; these cover the boundaries where
//! external text enters the crate (calibration payloads, config files).

use thiserror::Error;

/// Errors raised while parsing external input or loading configuration.
#[derive(Debug, Error)]
pub enum EngineError {
    /// JSON parsing failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration or payload validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A required numeric field was absent from a calibration payload.
    #[error("Missing or non-numeric field: {0}")]
    MissingField(String),
}
