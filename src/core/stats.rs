use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use tracing::trace;

use crate::core::{FilterCriteria, Metric, RecordSet, StudentRecord};
use crate::error::ChartResult;

/// Id of the synthetic mean record overlaid by the radar chart.
pub const AVERAGE_RECORD_ID: &str = "Average";

/// Record achieving the maximum value for one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct TopRecord {
    pub id: String,
    pub value: f64,
}

/// Snapshot over the currently filtered record set, recomputed per draw.
#[derive(Debug, Clone, PartialEq)]
pub enum AggregateStats {
    /// Filter excluded every record; no averages, no top records.
    Empty,
    Populated {
        count: usize,
        average_x: f64,
        average_y: f64,
        top_x: TopRecord,
        top_y: TopRecord,
        top_size: TopRecord,
    },
}

impl AggregateStats {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, AggregateStats::Empty)
    }
}

/// Summarizes the filtered set for the bubble chart's side panel.
///
/// Top-record reductions run left to right with a strict comparison so the
/// first record in provider order wins exact ties.
#[must_use]
pub fn summarize(filtered: &[&StudentRecord], criteria: &FilterCriteria) -> AggregateStats {
    let Some(first) = filtered.first() else {
        return AggregateStats::Empty;
    };

    let count = filtered.len();
    let sum_x: f64 = filtered.iter().map(|r| r.score(criteria.x_metric)).sum();
    let sum_y: f64 = filtered.iter().map(|r| r.score(criteria.y_metric)).sum();

    let top_for = |metric: Metric| -> TopRecord {
        let best = filtered.iter().copied().fold(*first, |max, record| {
            if record.score(metric) > max.score(metric) {
                record
            } else {
                max
            }
        });
        TopRecord {
            id: best.id.clone(),
            value: best.score(metric),
        }
    };

    trace!(count, "summarized filtered record set");

    AggregateStats::Populated {
        count,
        average_x: sum_x / count as f64,
        average_y: sum_y / count as f64,
        top_x: top_for(criteria.x_metric),
        top_y: top_for(criteria.y_metric),
        top_size: top_for(criteria.size_metric),
    }
}

/// Per-category descriptive statistics over the whole population.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSummary {
    pub avg: f64,
    pub max: f64,
    pub min: f64,
}

/// Avg/max/min per metric for the rose chart's statistics mode.
///
/// Metrics absent from every record are skipped rather than reported
/// as zero.
#[must_use]
pub fn metric_summaries(records: &RecordSet, metrics: &[Metric]) -> IndexMap<Metric, MetricSummary> {
    let mut out = IndexMap::new();
    for &metric in metrics {
        let values: Vec<f64> = records
            .iter()
            .filter(|record| record.has_score(metric))
            .map(|record| record.score(metric))
            .collect();
        if values.is_empty() {
            continue;
        }

        let sum: f64 = values.iter().sum();
        let max = values
            .iter()
            .copied()
            .max_by_key(|v| OrderedFloat(*v))
            .unwrap_or(0.0);
        let min = values
            .iter()
            .copied()
            .min_by_key(|v| OrderedFloat(*v))
            .unwrap_or(0.0);

        out.insert(
            metric,
            MetricSummary {
                avg: sum / values.len() as f64,
                max,
                min,
            },
        );
    }
    out
}

/// Builds the radar chart's "average student": per-metric mean across the
/// entire unfiltered population.
pub fn average_pseudo_record(
    records: &RecordSet,
    metrics: &[Metric],
) -> ChartResult<StudentRecord> {
    let count = records.len().max(1) as f64;
    let scores = metrics.iter().map(|&metric| {
        let sum: f64 = records.iter().map(|record| record.score(metric)).sum();
        (metric, sum / count)
    });
    StudentRecord::new(AVERAGE_RECORD_ID, scores)
}
