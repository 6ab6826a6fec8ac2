use crate::core::PlotArea;
use crate::error::{ChartError, ChartResult};

/// Score domain shared by every axis and radial scale.
pub const SCORE_DOMAIN_MAX: f64 = 100.0;

/// Maps scores in `[0, 100]` onto the content box of a plot area.
///
/// X grows left to right; Y is inverted so higher scores sit higher on
/// screen (smaller pixel y).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreScale {
    area: PlotArea,
}

impl ScoreScale {
    pub fn new(area: PlotArea) -> ChartResult<Self> {
        if !area.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: area.viewport.width,
                height: area.viewport.height,
            });
        }
        Ok(Self { area })
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    pub fn x_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok(self.area.margin_left + (value / SCORE_DOMAIN_MAX) * self.area.inner_width())
    }

    pub fn y_to_pixel(self, value: f64) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }
        Ok(self.area.baseline_y() - (value / SCORE_DOMAIN_MAX) * self.area.inner_height())
    }
}

/// Bubble radius from a score, floored so small values stay visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    min_radius: f64,
    divisor: f64,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            min_radius: 5.0,
            divisor: 5.0,
        }
    }
}

impl RadiusScale {
    pub fn new(min_radius: f64, divisor: f64) -> ChartResult<Self> {
        if !min_radius.is_finite() || min_radius <= 0.0 {
            return Err(ChartError::InvalidData(
                "minimum radius must be finite and > 0".to_owned(),
            ));
        }
        if !divisor.is_finite() || divisor <= 0.0 {
            return Err(ChartError::InvalidData(
                "radius divisor must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self {
            min_radius,
            divisor,
        })
    }

    #[must_use]
    pub fn radius_for(self, value: f64) -> f64 {
        (value / self.divisor).max(self.min_radius)
    }
}
