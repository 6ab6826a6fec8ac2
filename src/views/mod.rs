mod bubble;
mod radar;
mod rose;

pub use bubble::BubbleChartView;
pub use radar::RadarChartView;
pub use rose::{RoseChartView, RoseMode, StatsRow, TableRow};

use serde::{Deserialize, Serialize};

use crate::render::Color;

/// Render lifecycle shared by all three views.
///
/// Every control change runs filter → rebuild scene → update side panels to
/// completion on the calling thread; `Rendering` is never observable across
/// a handler boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViewPhase {
    Idle,
    Rendering,
}

/// One legend swatch with its display label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
}

impl LegendEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, color: Color) -> Self {
        Self {
            label: label.into(),
            color,
        }
    }
}
