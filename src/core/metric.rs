use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Assessment metric carried by every student record.
///
/// The set is closed: unknown metric names are rejected at the parse
/// boundary instead of being read as dynamic keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    #[serde(rename = "TBP")]
    Tbp,
    #[serde(rename = "TUGAS")]
    Tugas,
    #[serde(rename = "UTS")]
    Uts,
    #[serde(rename = "UAS")]
    Uas,
    #[serde(rename = "TOTAL")]
    Total,
    #[serde(rename = "CPMK012")]
    Cpmk012,
    #[serde(rename = "CPMK031")]
    Cpmk031,
    #[serde(rename = "CPMK071")]
    Cpmk071,
    #[serde(rename = "CPMK072")]
    Cpmk072,
}

impl Metric {
    pub const ALL: [Metric; 9] = [
        Metric::Tbp,
        Metric::Tugas,
        Metric::Uts,
        Metric::Uas,
        Metric::Total,
        Metric::Cpmk012,
        Metric::Cpmk031,
        Metric::Cpmk071,
        Metric::Cpmk072,
    ];

    pub const BASIC: [Metric; 5] = [
        Metric::Tbp,
        Metric::Tugas,
        Metric::Uts,
        Metric::Uas,
        Metric::Total,
    ];

    pub const CPMK: [Metric; 4] = [
        Metric::Cpmk012,
        Metric::Cpmk031,
        Metric::Cpmk071,
        Metric::Cpmk072,
    ];

    /// Canonical wire name, e.g. `TBP` or `CPMK012`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Metric::Tbp => "TBP",
            Metric::Tugas => "TUGAS",
            Metric::Uts => "UTS",
            Metric::Uas => "UAS",
            Metric::Total => "TOTAL",
            Metric::Cpmk012 => "CPMK012",
            Metric::Cpmk031 => "CPMK031",
            Metric::Cpmk071 => "CPMK071",
            Metric::Cpmk072 => "CPMK072",
        }
    }

    /// Human-readable axis label.
    #[must_use]
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Tbp => "TBP Score",
            Metric::Tugas => "Assignment Score",
            Metric::Uts => "Midterm Score",
            Metric::Uas => "Final Exam Score",
            Metric::Total => "Total Score",
            other => other.name(),
        }
    }

    #[must_use]
    pub fn is_cpmk(self) -> bool {
        matches!(
            self,
            Metric::Cpmk012 | Metric::Cpmk031 | Metric::Cpmk071 | Metric::Cpmk072
        )
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Metric {
    type Err = ChartError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.name() == input)
            .ok_or_else(|| ChartError::UnknownMetric(input.to_owned()))
    }
}

/// Category grouping used by the rose chart's data-view selector and the
/// radar chart's default checkbox set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricView {
    Basic,
    Cpmk,
    All,
}

impl MetricView {
    #[must_use]
    pub fn metrics(self) -> &'static [Metric] {
        match self {
            MetricView::Basic => &Metric::BASIC,
            MetricView::Cpmk => &Metric::CPMK,
            MetricView::All => &Metric::ALL,
        }
    }
}
