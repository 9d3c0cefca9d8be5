use serde::{Deserialize, Serialize};

/// Construction options shared by all matching strategies.
///
/// Unset fields fall back to the defaults of the strategy being built, so
/// `MatcherConfig::default()` yields e.g. `nearest` / `match_nearest`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatcherConfig {
    /// Human-readable name.
    #[serde(default)]
    pub name: Option<String>,
    /// Identifier used for registration and lookup.
    #[serde(default)]
    pub canonical_name: Option<String>,
}

impl MatcherConfig {
    pub fn with_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn canonical_name(mut self, canonical_name: impl Into<String>) -> Self {
        self.canonical_name = Some(canonical_name.into());
        self
    }

    /// Resolves both names against the strategy defaults.
    pub(crate) fn resolve(self, default_name: &str, default_canonical: &str) -> (String, String) {
        (
            self.name.unwrap_or_else(|| default_name.to_string()),
            self.canonical_name
                .unwrap_or_else(|| default_canonical.to_string()),
        )
    }
}

/// Per-query comparison of a prediction against ground truth.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchIndicators {
    /// `match_mask[j]`: predicted label of query `j` equals its query label.
    pub match_mask: Vec<bool>,
    /// `distance_mask[j][t]`: predicted distance of query `j` is `<=` threshold `t`.
    pub distance_mask: Vec<Vec<bool>>,
}

impl MatchIndicators {
    pub fn num_queries(&self) -> usize {
        self.match_mask.len()
    }
}

/// Confusion counts at each distance threshold.
///
/// A prediction is "positive" when its distance is within the threshold and
/// "true" when its label matches the query label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCounts {
    pub distance_thresholds: Vec<f32>,
    pub true_positives: Vec<u64>,
    pub false_positives: Vec<u64>,
    pub false_negatives: Vec<u64>,
    pub true_negatives: Vec<u64>,
    /// Number of queries counted.
    pub count: u64,
}

impl MatchCounts {
    pub fn from_indicators(indicators: &MatchIndicators, distance_thresholds: &[f32]) -> Self {
        let num_thresholds = distance_thresholds.len();
        let mut counts = Self {
            distance_thresholds: distance_thresholds.to_vec(),
            true_positives: vec![0; num_thresholds],
            false_positives: vec![0; num_thresholds],
            false_negatives: vec![0; num_thresholds],
            true_negatives: vec![0; num_thresholds],
            count: indicators.num_queries() as u64,
        };

        for (&is_match, within) in indicators
            .match_mask
            .iter()
            .zip(indicators.distance_mask.iter())
        {
            for (t, &is_within) in within.iter().enumerate() {
                match (is_match, is_within) {
                    (true, true) => counts.true_positives[t] += 1,
                    (false, true) => counts.false_positives[t] += 1,
                    (true, false) => counts.false_negatives[t] += 1,
                    (false, false) => counts.true_negatives[t] += 1,
                }
            }
        }

        counts
    }

    pub fn num_thresholds(&self) -> usize {
        self.distance_thresholds.len()
    }
}
