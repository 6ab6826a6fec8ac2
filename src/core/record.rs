use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::Metric;
use crate::error::{ChartError, ChartResult};

/// One student's assessment scores, immutable for the session.
///
/// Scores are kept in insertion order so "all metrics" listings match
/// provider order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(flatten)]
    scores: IndexMap<Metric, f64>,
}

impl StudentRecord {
    /// Builds a validated record.
    ///
    /// Invariants:
    /// - id is non-empty
    /// - every score is finite and within `[0, 100]`
    pub fn new(
        id: impl Into<String>,
        scores: impl IntoIterator<Item = (Metric, f64)>,
    ) -> ChartResult<Self> {
        let record = Self {
            id: id.into(),
            scores: scores.into_iter().collect(),
        };
        record.check()?;
        Ok(record)
    }

    /// The invariants `new` promises, shared with the JSON boundary so a
    /// deserialized record cannot bypass them.
    fn check(&self) -> ChartResult<()> {
        if self.id.is_empty() {
            return Err(ChartError::InvalidData(
                "record id must not be empty".to_owned(),
            ));
        }
        for (metric, value) in &self.scores {
            if !value.is_finite() || !(0.0..=100.0).contains(value) {
                return Err(ChartError::InvalidData(format!(
                    "score for {metric} must be finite and in [0, 100], got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Score for `metric`, defaulting to 0.0 when the record lacks it.
    #[must_use]
    pub fn score(&self, metric: Metric) -> f64 {
        self.scores.get(&metric).copied().unwrap_or(0.0)
    }

    #[must_use]
    pub fn has_score(&self, metric: Metric) -> bool {
        self.scores.contains_key(&metric)
    }

    /// Metrics present on this record, in insertion order.
    pub fn metrics(&self) -> impl Iterator<Item = Metric> + '_ {
        self.scores.keys().copied()
    }
}

/// Filter applied by the bubble chart before projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub x_metric: Metric,
    pub y_metric: Metric,
    pub size_metric: Metric,
    pub min_score: f64,
}

impl FilterCriteria {
    pub fn new(
        x_metric: Metric,
        y_metric: Metric,
        size_metric: Metric,
        min_score: f64,
    ) -> ChartResult<Self> {
        if !min_score.is_finite() || !(0.0..=100.0).contains(&min_score) {
            return Err(ChartError::InvalidData(format!(
                "minimum score must be finite and in [0, 100], got {min_score}"
            )));
        }
        Ok(Self {
            x_metric,
            y_metric,
            size_metric,
            min_score,
        })
    }

    /// A record passes when both axis metrics meet the threshold.
    #[must_use]
    pub fn accepts(&self, record: &StudentRecord) -> bool {
        record.score(self.x_metric) >= self.min_score
            && record.score(self.y_metric) >= self.min_score
    }
}

/// Ordered, read-only record provider shared by all views.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordSet {
    records: Vec<StudentRecord>,
}

impl RecordSet {
    #[must_use]
    pub fn new(records: Vec<StudentRecord>) -> Self {
        Self { records }
    }

    /// Loads records from the provider's JSON format: an array of objects
    /// with an `ID` field plus metric-name keys. Unknown metric names fail
    /// deserialization rather than being silently carried along, and each
    /// record is held to the same invariants as `StudentRecord::new`.
    pub fn from_json(input: &str) -> ChartResult<Self> {
        let records: Vec<StudentRecord> = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidData(format!("record provider JSON: {e}")))?;
        for record in &records {
            record.check()?;
        }
        debug!(count = records.len(), "loaded record set");
        Ok(Self::new(records))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StudentRecord> {
        self.records.iter()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&StudentRecord> {
        self.records.get(index)
    }

    /// Exact-id lookup, linear scan in provider order.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&StudentRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records passing `criteria`, in provider order.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&StudentRecord> {
        self.records
            .iter()
            .filter(|record| criteria.accepts(record))
            .collect()
    }
}
