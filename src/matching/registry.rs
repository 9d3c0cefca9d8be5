use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::classification::ClassificationMatch;
use super::error::{MatchError, MatchResult};
use super::majority_vote::{MAJORITY_VOTE_CANONICAL_NAME, MAJORITY_VOTE_NAME, MatchMajorityVote};
use super::nearest::{MatchNearest, NEAREST_CANONICAL_NAME, NEAREST_NAME};

/// The built-in matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MatchStrategy {
    /// Label of the closest neighbor.
    #[default]
    #[serde(rename = "match_nearest", alias = "nearest")]
    Nearest,
    /// Most frequent label among the k neighbors.
    #[serde(rename = "match_majority_vote", alias = "majority_vote")]
    MajorityVote,
}

impl MatchStrategy {
    pub const ALL: [MatchStrategy; 2] = [MatchStrategy::Nearest, MatchStrategy::MajorityVote];

    pub fn canonical_name(&self) -> &'static str {
        match self {
            MatchStrategy::Nearest => NEAREST_CANONICAL_NAME,
            MatchStrategy::MajorityVote => MAJORITY_VOTE_CANONICAL_NAME,
        }
    }

    pub fn short_name(&self) -> &'static str {
        match self {
            MatchStrategy::Nearest => NEAREST_NAME,
            MatchStrategy::MajorityVote => MAJORITY_VOTE_NAME,
        }
    }

    /// Builds the strategy with default names.
    pub fn build(&self) -> Box<dyn ClassificationMatch> {
        match self {
            MatchStrategy::Nearest => Box::new(MatchNearest::default()),
            MatchStrategy::MajorityVote => Box::new(MatchMajorityVote::default()),
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

impl FromStr for MatchStrategy {
    type Err = MatchError;

    /// Accepts canonical (`match_nearest`) or short (`nearest`) names,
    /// ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        MatchStrategy::ALL
            .into_iter()
            .find(|strategy| {
                wanted == strategy.canonical_name() || wanted == strategy.short_name()
            })
            .ok_or_else(|| MatchError::UnknownStrategy {
                name: s.to_string(),
            })
    }
}

/// Resolves a strategy by name, see [`MatchStrategy::from_str`].
pub fn make_classification_matcher(name: &str) -> MatchResult<Box<dyn ClassificationMatch>> {
    Ok(name.parse::<MatchStrategy>()?.build())
}
