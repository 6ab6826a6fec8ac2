use serde::{Deserialize, Serialize};

use crate::core::types::ViewBox;
use crate::core::Viewport;
use crate::error::{ChartError, ChartResult};
use crate::render::{CirclePrimitive, LinePrimitive, PolygonPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Every draw fully replaces the previous frame; there is no incremental
/// diffing, so identical inputs always produce identical frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    /// Visible window onto the scene; `None` shows the full viewport.
    /// Set by the bubble chart's click-to-zoom.
    pub view_box: Option<ViewBox>,
    pub lines: Vec<LinePrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            view_box: None,
            lines: Vec::new(),
            circles: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_view_box(mut self, view_box: Option<ViewBox>) -> Self {
        self.view_box = view_box;
        self
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    #[must_use]
    pub fn with_polygon(mut self, polygon: PolygonPrimitive) -> Self {
        self.polygons.push(polygon);
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        self.texts.push(text);
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        if !self.viewport.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }

        if let Some(view_box) = self.view_box {
            view_box.validate()?;
        }

        for line in &self.lines {
            line.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.circles.is_empty()
            && self.polygons.is_empty()
            && self.texts.is_empty()
    }

    /// Shape carrying `record_id`, if any. Linear scan; the record count
    /// is small and bounded.
    #[must_use]
    pub fn shape_for_record(&self, record_id: &str) -> Option<&CirclePrimitive> {
        self.circles
            .iter()
            .find(|circle| circle.record_id.as_deref() == Some(record_id))
    }
}
