//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `KNN_MATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use tracing::warn;

use crate::matching::MatchStrategy;

/// Settings for the `knn-match` binary.
///
/// Use [`Config::from_env`] to read `KNN_MATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    /// Matching strategy. Default: `match_nearest`.
    pub strategy: MatchStrategy,

    /// Distance thresholds for match counting. Default: none.
    pub distance_thresholds: Vec<f32>,

    /// Lookup batch to read. Default: stdin.
    pub input_path: Option<PathBuf>,
}

impl Config {
    const ENV_STRATEGY: &'static str = "KNN_MATCH_STRATEGY";
    const ENV_DISTANCE_THRESHOLDS: &'static str = "KNN_MATCH_DISTANCE_THRESHOLDS";
    const ENV_INPUT_PATH: &'static str = "KNN_MATCH_INPUT_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let strategy = Self::parse_strategy_from_env(defaults.strategy)?;
        let distance_thresholds =
            Self::parse_thresholds_from_env(defaults.distance_thresholds)?;
        let input_path = Self::parse_optional_path_from_env(Self::ENV_INPUT_PATH);

        Ok(Self {
            strategy,
            distance_thresholds,
            input_path,
        })
    }

    /// Validates thresholds and the input path.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(&value) = self
            .distance_thresholds
            .iter()
            .find(|t| !t.is_finite() || **t < 0.0)
        {
            return Err(ConfigError::InvalidThreshold { value });
        }

        if let Some(ref path) = self.input_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        Ok(())
    }

    fn parse_strategy_from_env(default: MatchStrategy) -> Result<MatchStrategy, ConfigError> {
        match env::var(Self::ENV_STRATEGY) {
            Ok(value) if value.trim().is_empty() => Ok(default),
            Ok(value) => value.parse::<MatchStrategy>().map_err(|_| {
                warn!(value = %value, "Rejecting unknown matching strategy");
                ConfigError::UnknownStrategy { value }
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_thresholds_from_env(default: Vec<f32>) -> Result<Vec<f32>, ConfigError> {
        match env::var(Self::ENV_DISTANCE_THRESHOLDS) {
            Ok(value) => value
                .split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(|v| {
                    v.parse::<f32>()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: v.to_string(),
                            source: e,
                        })
                })
                .collect(),
            Err(_) => Ok(default),
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
