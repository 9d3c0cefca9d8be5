//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Strategy name did not match any registered strategy.
    #[error("unknown matching strategy '{value}'")]
    UnknownStrategy { value: String },

    /// A threshold entry could not be parsed as a number.
    #[error("failed to parse distance threshold '{value}': {source}")]
    ThresholdParseError {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// Thresholds must be finite and non-negative.
    #[error("invalid distance threshold {value}: must be finite and >= 0")]
    InvalidThreshold { value: f32 },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },
}
