use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Content box inside a viewport, carved out by fixed margins.
///
/// Axis lines, tick labels, and legends live in the margins; projected
/// shapes live in the content box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub viewport: Viewport,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl PlotArea {
    #[must_use]
    pub fn new(
        viewport: Viewport,
        margin_top: f64,
        margin_right: f64,
        margin_bottom: f64,
        margin_left: f64,
    ) -> Self {
        Self {
            viewport,
            margin_top,
            margin_right,
            margin_bottom,
            margin_left,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.viewport.is_valid() && self.inner_width() > 0.0 && self.inner_height() > 0.0
    }

    #[must_use]
    pub fn inner_width(self) -> f64 {
        f64::from(self.viewport.width) - self.margin_left - self.margin_right
    }

    #[must_use]
    pub fn inner_height(self) -> f64 {
        f64::from(self.viewport.height) - self.margin_top - self.margin_bottom
    }

    /// Pixel y of the bottom edge of the content box (the x-axis baseline).
    #[must_use]
    pub fn baseline_y(self) -> f64 {
        f64::from(self.viewport.height) - self.margin_bottom
    }
}

/// Visible window onto a rendered scene, in scene pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewBox {
    #[must_use]
    pub fn full(viewport: Viewport) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: f64::from(viewport.width),
            height: f64::from(viewport.height),
        }
    }

    pub fn validate(self) -> ChartResult<()> {
        if !self.x.is_finite()
            || !self.y.is_finite()
            || !self.width.is_finite()
            || !self.height.is_finite()
            || self.width <= 0.0
            || self.height <= 0.0
            || self.x < 0.0
            || self.y < 0.0
        {
            return Err(ChartError::InvalidData(
                "view box must have finite, non-negative origin and positive size".to_owned(),
            ));
        }
        Ok(())
    }
}
