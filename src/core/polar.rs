use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};

use crate::core::scale::SCORE_DOMAIN_MAX;
use crate::error::{ChartError, ChartResult};

/// Concentric grid levels drawn by both polar charts.
pub const GRID_LEVELS: [f64; 5] = [20.0, 40.0, 60.0, 80.0, 100.0];

/// Point in pixel space produced by a polar projection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    pub x: f64,
    pub y: f64,
}

/// Polar layout shared by the radar and rose charts.
///
/// Angle 0 points up and angles grow clockwise, so category 0 always sits
/// at the top of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarGrid {
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
}

impl PolarGrid {
    pub fn new(center_x: f64, center_y: f64, radius: f64) -> ChartResult<Self> {
        if !center_x.is_finite() || !center_y.is_finite() {
            return Err(ChartError::InvalidData(
                "polar center must be finite".to_owned(),
            ));
        }
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "polar radius must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            center_x,
            center_y,
            radius,
        })
    }

    /// Layout used by the original charts: centered in a square viewport
    /// with a fixed label gutter.
    pub fn centered(width: u32, height: u32, gutter: f64) -> ChartResult<Self> {
        let radius = f64::from(width.min(height)) / 2.0 - gutter;
        Self::new(f64::from(width) / 2.0, f64::from(height) / 2.0, radius)
    }

    /// Angle for category `index` of `count` categories.
    #[must_use]
    pub fn angle_for(self, index: usize, count: usize) -> f64 {
        debug_assert!(count > 0);
        index as f64 * TAU / count as f64
    }

    /// Angular step between adjacent categories.
    #[must_use]
    pub fn angle_step(self, count: usize) -> f64 {
        debug_assert!(count > 0);
        TAU / count as f64
    }

    /// Projects a score at `angle` onto the grid. Score 100 lands on the
    /// outer radius, score 0 on the center.
    pub fn project(self, angle: f64, value: f64) -> ChartResult<PolarPoint> {
        if !value.is_finite() || !angle.is_finite() {
            return Err(ChartError::InvalidData(
                "polar angle and value must be finite".to_owned(),
            ));
        }
        let scaled = (value / SCORE_DOMAIN_MAX) * self.radius;
        Ok(self.point_at(angle, scaled))
    }

    /// Pixel point at a raw distance from the center, e.g. for axis label
    /// placement outside the outer ring.
    #[must_use]
    pub fn point_at(self, angle: f64, distance: f64) -> PolarPoint {
        PolarPoint {
            x: self.center_x + angle.sin() * distance,
            y: self.center_y - angle.cos() * distance,
        }
    }
}
