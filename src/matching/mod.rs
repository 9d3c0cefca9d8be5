//! Matching strategies over k-nearest-neighbor lookup results.
//!
//! A lookup batch is a pair of `[N, k]` tensors: neighbor labels and neighbor
//! distances, each row sorted nearest-first by the search that produced them.
//! A [`ClassificationMatch`] reduces every row to a single predicted label and
//! distance, giving two `[N, 1]` tensors.
//!
//! # Strategies
//!
//! - [`MatchNearest`] (`match_nearest`): column 0 of each row.
//! - [`MatchMajorityVote`] (`match_majority_vote`): most frequent label, mean
//!   distance.
//!
//! Strategies are looked up by name through [`MatchStrategy`] or
//! [`make_classification_matcher`] and used as `Box<dyn ClassificationMatch>`.
//!
//! # Evaluation
//!
//! Given ground-truth query labels and a set of distance thresholds,
//! [`ClassificationMatch::compute_count`] yields per-threshold confusion counts
//! ([`MatchCounts`]) for downstream precision/recall reporting.

pub mod classification;
pub mod error;
pub mod majority_vote;
pub mod nearest;
pub mod registry;
pub mod types;


pub use classification::{ClassificationMatch, indicators_from_predictions};
pub use error::{MatchError, MatchResult};
pub use majority_vote::{MAJORITY_VOTE_CANONICAL_NAME, MAJORITY_VOTE_NAME, MatchMajorityVote};
pub use nearest::{MatchNearest, NEAREST_CANONICAL_NAME, NEAREST_NAME};
pub use registry::{MatchStrategy, make_classification_matcher};
pub use types::{MatchCounts, MatchIndicators, MatcherConfig};
