use candle_core::Tensor;
use tracing::debug;

use super::classification::ClassificationMatch;
use super::error::MatchResult;
use super::types::MatcherConfig;

pub const NEAREST_NAME: &str = "nearest";
pub const NEAREST_CANONICAL_NAME: &str = "match_nearest";

/// Predicts the label and distance of the closest neighbor (k = 1).
///
/// Rows are assumed sorted nearest-first; nothing is re-sorted or validated.
/// An input with no neighbor column fails inside the tensor backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchNearest {
    name: String,
    canonical_name: String,
}

impl MatchNearest {
    pub fn new(config: MatcherConfig) -> Self {
        let (name, canonical_name) = config.resolve(NEAREST_NAME, NEAREST_CANONICAL_NAME);
        Self {
            name,
            canonical_name,
        }
    }
}

impl Default for MatchNearest {
    fn default() -> Self {
        Self::new(MatcherConfig::default())
    }
}

impl ClassificationMatch for MatchNearest {
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
        debug!(
            strategy = %self.canonical_name,
            shape = ?lookup_labels.dims(),
            "Selecting nearest neighbor"
        );

        Ok((
            lookup_labels.narrow(1, 0, 1)?,
            lookup_distances.narrow(1, 0, 1)?,
        ))
    }
}
