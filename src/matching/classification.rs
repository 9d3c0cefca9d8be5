use candle_core::{DType, Tensor};
use tracing::debug;

use super::error::{MatchError, MatchResult};
use super::types::{MatchCounts, MatchIndicators};

/// A policy that reduces k-neighbor lookup results to one prediction per query.
///
/// `lookup_labels` and `lookup_distances` are `[N, k]` tensors whose rows are
/// sorted nearest-first. Implementors return `[N, 1]` labels and distances.
/// The provided methods build evaluation on top of [`predict`](Self::predict)
/// and are shared by every strategy.
pub trait ClassificationMatch: Send + Sync + std::fmt::Debug {
    /// Human-readable name.
    fn name(&self) -> &str;

    /// Identifier the strategy is registered under.
    fn canonical_name(&self) -> &str;

    /// Returns `(predicted_labels, predicted_distances)`, each `[N, 1]`.
    fn predict(
        &self,
        lookup_labels: &Tensor,
        lookup_distances: &Tensor,
    ) -> MatchResult<(Tensor, Tensor)>;

    /// Runs [`predict`](Self::predict) and checks that both outputs are one
    /// column per query. Rank-1 outputs of the right length are reshaped.
    fn derive_match(
        &self,
        lookup_labels: &Tensor,
        lookup_distances: &Tensor,
    ) -> MatchResult<(Tensor, Tensor)> {
        let num_queries = leading_dim(lookup_labels);
        let (labels, distances) = self.predict(lookup_labels, lookup_distances)?;

        let labels = as_column(labels, num_queries, "predicted labels")?;
        let distances = as_column(distances, num_queries, "predicted distances")?;

        Ok((labels, distances))
    }

    /// Compares derived predictions against `query_labels` and each distance
    /// threshold.
    ///
    /// `query_labels` may be `[N]` or `[N, 1]`.
    fn compute_match_indicators(
        &self,
        query_labels: &Tensor,
        lookup_labels: &Tensor,
        lookup_distances: &Tensor,
        distance_thresholds: &[f32],
    ) -> MatchResult<MatchIndicators> {
        let num_queries = leading_dim(lookup_labels);
        let num_query_labels = query_labels.elem_count();
        if num_query_labels != num_queries {
            return Err(MatchError::ShapeMismatch {
                reason: format!(
                    "number of query labels ({}) must match the number of lookup label sets ({})",
                    num_query_labels, num_queries
                ),
            });
        }

        let (labels, distances) = self.derive_match(lookup_labels, lookup_distances)?;
        let indicators = indicators_from_predictions(
            query_labels,
            &labels,
            &distances,
            distance_thresholds,
        )?;

        debug!(
            strategy = self.canonical_name(),
            queries = num_queries,
            thresholds = distance_thresholds.len(),
            "Computed match indicators"
        );

        Ok(indicators)
    }

    /// Confusion counts at every threshold in `distance_thresholds`.
    fn compute_count(
        &self,
        query_labels: &Tensor,
        lookup_labels: &Tensor,
        lookup_distances: &Tensor,
        distance_thresholds: &[f32],
    ) -> MatchResult<MatchCounts> {
        let indicators = self.compute_match_indicators(
            query_labels,
            lookup_labels,
            lookup_distances,
            distance_thresholds,
        )?;

        Ok(MatchCounts::from_indicators(&indicators, distance_thresholds))
    }
}

/// Match indicators for predictions that were already derived.
///
/// `predicted_labels` and `predicted_distances` hold one entry per query, as
/// returned by [`ClassificationMatch::derive_match`]. A distance is within a
/// threshold when `distance <= threshold`, so a NaN distance never is.
pub fn indicators_from_predictions(
    query_labels: &Tensor,
    predicted_labels: &Tensor,
    predicted_distances: &Tensor,
    distance_thresholds: &[f32],
) -> MatchResult<MatchIndicators> {
    let query_labels = query_labels
        .flatten_all()?
        .to_dtype(DType::I64)?
        .to_vec1::<i64>()?;
    let labels = predicted_labels
        .flatten_all()?
        .to_dtype(DType::I64)?
        .to_vec1::<i64>()?;
    let distances = predicted_distances
        .flatten_all()?
        .to_dtype(DType::F32)?
        .to_vec1::<f32>()?;

    if query_labels.len() != labels.len() || labels.len() != distances.len() {
        return Err(MatchError::ShapeMismatch {
            reason: format!(
                "{} query labels, {} predicted labels and {} predicted distances must agree",
                query_labels.len(),
                labels.len(),
                distances.len()
            ),
        });
    }

    let match_mask: Vec<bool> = labels
        .iter()
        .zip(query_labels.iter())
        .map(|(predicted, expected)| predicted == expected)
        .collect();

    let distance_mask: Vec<Vec<bool>> = distances
        .iter()
        .map(|&d| distance_thresholds.iter().map(|&t| d <= t).collect())
        .collect();

    Ok(MatchIndicators {
        match_mask,
        distance_mask,
    })
}

fn leading_dim(tensor: &Tensor) -> usize {
    tensor.dims().first().copied().unwrap_or(0)
}

fn as_column(tensor: Tensor, num_queries: usize, what: &str) -> MatchResult<Tensor> {
    let dims = tensor.dims().to_vec();
    match dims.as_slice() {
        [rows, 1] if *rows == num_queries => Ok(tensor),
        [rows] if *rows == num_queries => Ok(tensor.reshape((num_queries, 1))?),
        other => Err(MatchError::ShapeMismatch {
            reason: format!("{what} should have shape [{num_queries}, 1], got {other:?}"),
        }),
    }
}
