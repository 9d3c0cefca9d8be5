//! k-NN match strategies library crate (used by the `knn-match` binary and
//! integration tests).
//!
//! A nearest-neighbor search hands back, per query, the labels and distances
//! of its k closest neighbors sorted nearest-first. A matching strategy turns
//! each of those rows into one predicted label and distance.
//!
//! # Public API Surface
//!
//! ## Strategies
//! - [`ClassificationMatch`] - Shared strategy trait (`predict`, evaluation helpers)
//! - [`MatchNearest`] - Closest neighbor wins (`match_nearest`)
//! - [`MatchMajorityVote`] - Most frequent label wins (`match_majority_vote`)
//! - [`MatchStrategy`], [`make_classification_matcher`] - Lookup by name
//!
//! ## Evaluation
//! - [`MatchIndicators`], [`MatchCounts`] - Per-threshold confusion counts
//!
//! ## Input / Output
//! - [`LookupBatch`] - JSON lookup results, converted to tensors
//! - [`PredictionReport`], [`run_batch`] - Serializable predictions
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `KNN_MATCH_*` environment settings

pub mod config;
pub mod lookup;
pub mod matching;

pub use config::{Config, ConfigError};
pub use lookup::{LookupBatch, LookupError, LookupResult, PredictionReport, run_batch};
pub use matching::{
    ClassificationMatch, MAJORITY_VOTE_CANONICAL_NAME, MAJORITY_VOTE_NAME, MatchCounts,
    MatchError, MatchIndicators, MatchMajorityVote, MatchNearest, MatchResult, MatchStrategy,
    MatcherConfig, NEAREST_CANONICAL_NAME, NEAREST_NAME, indicators_from_predictions,
    make_classification_matcher,
};
