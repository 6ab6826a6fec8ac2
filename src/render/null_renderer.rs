use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that draws nothing but remembers how much it was asked to draw.
///
/// Frames are still validated, so tests exercising a view through this
/// backend catch invalid geometry without producing any output.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_circle_count: usize,
    pub last_polygon_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines.len();
        self.last_circle_count = frame.circles.len();
        self.last_polygon_count = frame.polygons.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
