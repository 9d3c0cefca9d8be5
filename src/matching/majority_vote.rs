use candle_core::{DType, Tensor};
use tracing::debug;

use super::classification::ClassificationMatch;
use super::error::{MatchError, MatchResult};
use super::types::MatcherConfig;

pub const MAJORITY_VOTE_NAME: &str = "majority_vote";
pub const MAJORITY_VOTE_CANONICAL_NAME: &str = "match_majority_vote";

/// Predicts the most frequent label among the k neighbors.
///
/// Ties resolve to the label seen first in the row, which for nearest-first
/// rows is the closest of the tied labels. The predicted distance is the mean
/// distance over all k neighbors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchMajorityVote {
    name: String,
    canonical_name: String,
}

impl MatchMajorityVote {
    pub fn new(config: MatcherConfig) -> Self {
        let (name, canonical_name) =
            config.resolve(MAJORITY_VOTE_NAME, MAJORITY_VOTE_CANONICAL_NAME);
        Self {
            name,
            canonical_name,
        }
    }
}

impl Default for MatchMajorityVote {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl ClassificationMatch for MatchMajorityVote {
    fn name(&self) -> &str {
        &self.name
    }

    fn canonical_name(&self) -> &str {
        &self.canonical_name
    }

    fn predict(
        &self,
        lookup_labels: &Tensor,
        lookup_distances: &Tensor,
    ) -> MatchResult<(Tensor, Tensor)> {
        let (num_queries, k) = lookup_labels.dims2()?;
        if k == 0 && num_queries > 0 {
            return Err(MatchError::InvalidInput {
                reason: "majority vote needs at least one neighbor per query".to_string(),
            });
        }

        debug!(
            strategy = %self.canonical_name,
            queries = num_queries,
            k,
            "Computing majority vote"
        );

        let rows = lookup_labels.to_dtype(DType::I64)?.to_vec2::<i64>()?;
        let votes: Vec<i64> = rows.iter().map(|row| majority_label(row)).collect();

        let labels = Tensor::from_vec(votes, (num_queries, 1), lookup_labels.device())?
            .to_dtype(lookup_labels.dtype())?;
        let distances = lookup_distances.mean_keepdim(1)?;

        Ok((labels, distances))
    }
}

/// Most frequent value in `row`, earliest first occurrence on ties.
///
/// `row` must be non-empty.
fn majority_label(row: &[i64]) -> i64 {
    // (label, count) in order of first appearance; k is small.
    let mut tally: Vec<(i64, usize)> = Vec::new();
    for &label in row {
        match tally.iter_mut().find(|(seen, _)| *seen == label) {
            Some((_, count)) => *count += 1,
            None => tally.push((label, 1)),
        }
    }

    let mut best = tally[0];
    for &(label, count) in &tally[1..] {
        if count > best.1 {
            best = (label, count);
        }
    }
    best.0
}
