use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{RecordSet, ViewBox, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, PolygonPrimitive, RenderFrame};

/// Fraction of the full view shown after click-to-zoom.
pub const ZOOM_FACTOR: f64 = 0.5;

/// Tooltip content positioned near the pointer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub lines: Vec<String>,
    pub x: f64,
    pub y: f64,
}

/// Per-view interaction state: hover tooltip, exclusive highlight, and the
/// bubble chart's zoom window. Explicitly owned by each view controller,
/// never ambient.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InteractionState {
    tooltip: Option<Tooltip>,
    highlighted_id: Option<String>,
    zoom: Option<ViewBox>,
}

impl InteractionState {
    #[must_use]
    pub fn tooltip(&self) -> Option<&Tooltip> {
        self.tooltip.as_ref()
    }

    #[must_use]
    pub fn highlighted_id(&self) -> Option<&str> {
        self.highlighted_id.as_deref()
    }

    #[must_use]
    pub fn zoom(&self) -> Option<ViewBox> {
        self.zoom
    }

    pub fn on_pointer_enter(&mut self, tooltip: Tooltip) {
        self.tooltip = Some(tooltip);
    }

    pub fn on_pointer_leave(&mut self) {
        self.tooltip = None;
    }

    /// Highlights exactly one record and centers the zoom window on its
    /// shape. Any previously highlighted record loses its styling on the
    /// next draw.
    pub fn highlight(&mut self, record_id: impl Into<String>, shape_x: f64, shape_y: f64, viewport: Viewport) {
        let record_id = record_id.into();
        debug!(id = %record_id, "highlight record");
        self.zoom = Some(zoom_window_around(viewport, shape_x, shape_y));
        self.highlighted_id = Some(record_id);
    }

    /// Restores the full view and clears highlight and tooltip.
    pub fn reset(&mut self) {
        self.highlighted_id = None;
        self.zoom = None;
        self.tooltip = None;
    }
}

/// Zoom window of `ZOOM_FACTOR` × the full view, centered on `(cx, cy)`
/// with the origin clamped so it never goes negative.
#[must_use]
pub fn zoom_window_around(viewport: Viewport, cx: f64, cy: f64) -> ViewBox {
    let width = f64::from(viewport.width) * ZOOM_FACTOR;
    let height = f64::from(viewport.height) * ZOOM_FACTOR;
    ViewBox {
        x: (cx - width / 2.0).max(0.0),
        y: (cy - height / 2.0).max(0.0),
        width,
        height,
    }
}

/// Topmost circle under the pointer, scanning in reverse draw order.
#[must_use]
pub fn hit_circle(frame: &RenderFrame, x: f64, y: f64) -> Option<&CirclePrimitive> {
    frame.circles.iter().rev().find(|circle| circle.contains(x, y))
}

/// Topmost polygon under the pointer, scanning in reverse draw order.
#[must_use]
pub fn hit_polygon(frame: &RenderFrame, x: f64, y: f64) -> Option<&PolygonPrimitive> {
    frame
        .polygons
        .iter()
        .rev()
        .find(|polygon| polygon.contains(x, y))
}

/// Live search dropdown state for the bubble chart's id search box.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// Empty query; the dropdown stays hidden.
    Inactive,
    /// Non-empty query with no matching ids; an explicit placeholder is
    /// shown instead of an empty list.
    NoMatches,
    /// Matching ids in provider order, each clickable to highlight.
    Matches(Vec<String>),
}

/// Case-insensitive substring match over record ids.
#[must_use]
pub fn search_records(records: &RecordSet, query: &str) -> SearchOutcome {
    if query.is_empty() {
        return SearchOutcome::Inactive;
    }

    let needle = query.to_lowercase();
    let matches: Vec<String> = records
        .iter()
        .filter(|record| record.id.to_lowercase().contains(&needle))
        .map(|record| record.id.clone())
        .collect();

    if matches.is_empty() {
        SearchOutcome::NoMatches
    } else {
        SearchOutcome::Matches(matches)
    }
}

/// Resolves a submitted search query to an exact record id.
///
/// The only user-facing error in the system: an unknown id surfaces
/// `RecordNotFound` and leaves all view state unchanged.
pub fn submit_search(records: &RecordSet, query: &str) -> ChartResult<String> {
    let id = query.trim();
    records
        .find(id)
        .map(|record| record.id.clone())
        .ok_or_else(|| ChartError::RecordNotFound(id.to_owned()))
}
