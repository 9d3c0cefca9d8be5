use candle_core::{DType, Device, Tensor};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::matching::{
    ClassificationMatch, MatchCounts, MatchIndicators, indicators_from_predictions,
};

use super::LookupBatch;
use super::error::LookupResult;

/// Predictions for one batch, flattened to one entry per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    /// Canonical name of the strategy that produced the predictions.
    pub strategy: String,
    pub labels: Vec<i64>,
    pub distances: Vec<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub counts: Option<MatchCounts>,
}

impl PredictionReport {
    /// Flattens `[N, 1]` prediction tensors.
    pub fn from_tensors(strategy: &str, labels: &Tensor, distances: &Tensor) -> LookupResult<Self> {
        Ok(Self {
            strategy: strategy.to_string(),
            labels: labels.flatten_all()?.to_dtype(DType::I64)?.to_vec1()?,
            distances: distances.flatten_all()?.to_dtype(DType::F32)?.to_vec1()?,
            counts: None,
        })
    }

    pub fn with_counts(mut self, counts: MatchCounts) -> Self {
        self.counts = Some(counts);
        self
    }
}

/// Runs `matcher` over `batch`.
///
/// Counts are attached when the batch carries query labels and at least one
/// distance threshold is given. An empty batch yields an empty report without
/// calling the strategy, so every strategy agrees on it.
pub fn run_batch(
    matcher: &dyn ClassificationMatch,
    batch: &LookupBatch,
    distance_thresholds: &[f32],
    device: &Device,
) -> LookupResult<PredictionReport> {
    let (lookup_labels, lookup_distances) = batch.to_tensors(device)?;
    let strategy = matcher.canonical_name();

    let predictions = if batch.num_queries() == 0 {
        debug!(strategy, "Empty lookup batch, nothing to predict");
        None
    } else {
        debug!(
            strategy,
            queries = batch.num_queries(),
            "Running lookup batch"
        );
        Some(matcher.derive_match(&lookup_labels, &lookup_distances)?)
    };

    let report = match &predictions {
        Some((labels, distances)) => PredictionReport::from_tensors(strategy, labels, distances)?,
        None => PredictionReport {
            strategy: strategy.to_string(),
            labels: Vec::new(),
            distances: Vec::new(),
            counts: None,
        },
    };

    let query_labels = batch.query_label_tensor(device)?;
    match (query_labels, distance_thresholds.is_empty()) {
        (Some(query_labels), false) => {
            let indicators = match &predictions {
                Some((labels, distances)) => indicators_from_predictions(
                    &query_labels,
                    labels,
                    distances,
                    distance_thresholds,
                )?,
                None => MatchIndicators {
                    match_mask: Vec::new(),
                    distance_mask: Vec::new(),
                },
            };
            let counts = MatchCounts::from_indicators(&indicators, distance_thresholds);
            Ok(report.with_counts(counts))
        }
        (Some(_), true) => {
            warn!("Query labels present but no distance thresholds configured; skipping counts");
            Ok(report)
        }
        (None, _) => Ok(report),
    }
}
