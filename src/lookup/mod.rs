//! JSON lookup batches and prediction reports.
//!
//! A [`LookupBatch`] is what an external nearest-neighbor search hands over:
//! per query, neighbor labels and distances sorted nearest-first, optionally
//! with the query's ground-truth label. [`run_batch`] feeds it through a
//! matching strategy and produces a serializable [`PredictionReport`].

pub mod error;
pub mod report;


pub use error::{LookupError, LookupResult};
pub use report::{PredictionReport, run_batch};

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use candle_core::{Device, Tensor};
use serde::{Deserialize, Serialize};

/// Lookup results for a batch of queries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupBatch {
    /// `labels[j]`: neighbor labels of query `j`, nearest first.
    pub labels: Vec<Vec<i64>>,
    /// `distances[j]`: distances aligned with `labels[j]`.
    pub distances: Vec<Vec<f32>>,
    /// Ground-truth label per query, used for counting matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_labels: Option<Vec<i64>>,
}

impl LookupBatch {
    pub fn from_json_str(json: &str) -> LookupResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> LookupResult<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn from_path(path: &Path) -> LookupResult<Self> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn num_queries(&self) -> usize {
        self.labels.len()
    }

    /// Checks the batch is rectangular and returns `k`.
    ///
    /// Sort order within rows is the producer's responsibility and is not
    /// checked.
    pub fn neighbors_per_query(&self) -> LookupResult<usize> {
        if self.labels.len() != self.distances.len() {
            return Err(LookupError::RowCountMismatch {
                labels: self.labels.len(),
                distances: self.distances.len(),
            });
        }

        let k = self.labels.first().map(Vec::len).unwrap_or(0);
        check_rows("labels", &self.labels, k)?;
        check_rows("distances", &self.distances, k)?;

        if let Some(query_labels) = &self.query_labels
            && query_labels.len() != self.labels.len()
        {
            return Err(LookupError::QueryLabelCount {
                expected: self.labels.len(),
                actual: query_labels.len(),
            });
        }

        Ok(k)
    }

    /// Builds `[N, k]` label (`i64`) and distance (`f32`) tensors.
    pub fn to_tensors(&self, device: &Device) -> LookupResult<(Tensor, Tensor)> {
        let k = self.neighbors_per_query()?;
        let n = self.num_queries();

        let labels: Vec<i64> = self.labels.iter().flatten().copied().collect();
        let distances: Vec<f32> = self.distances.iter().flatten().copied().collect();

        Ok((
            Tensor::from_vec(labels, (n, k), device)?,
            Tensor::from_vec(distances, (n, k), device)?,
        ))
    }

    /// Query labels as an `[N]` tensor, if present.
    pub fn query_label_tensor(&self, device: &Device) -> LookupResult<Option<Tensor>> {
        match &self.query_labels {
            Some(query_labels) => Ok(Some(Tensor::from_vec(
                query_labels.clone(),
                query_labels.len(),
                device,
            )?)),
            None => Ok(None),
        }
    }
}

fn check_rows<T>(matrix: &'static str, rows: &[Vec<T>], expected: usize) -> LookupResult<()> {
    match rows.iter().position(|row| row.len() != expected) {
        Some(row) => Err(LookupError::RaggedRow {
            matrix,
            row,
            expected,
            actual: rows[row].len(),
        }),
        None => Ok(()),
    }
}
