use std::fmt::Write as _;

use crate::error::ChartResult;
use crate::render::{Color, RenderFrame, Renderer, TextHAlign};

/// Renders a frame into an SVG document string.
///
/// Draw order is lines, polygons, circles, texts, matching how the charts
/// layer grids under shapes under labels.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// SVG produced by the most recent `render` call.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;

        let mut out = String::new();
        let (vb_x, vb_y, vb_w, vb_h) = match frame.view_box {
            Some(vb) => (vb.x, vb.y, vb.width, vb.height),
            None => (
                0.0,
                0.0,
                f64::from(frame.viewport.width),
                f64::from(frame.viewport.height),
            ),
        };
        let _ = writeln!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\" viewBox=\"{vb_x} {vb_y} {vb_w} {vb_h}\">",
            frame.viewport.width, frame.viewport.height
        );

        for line in &frame.lines {
            let _ = writeln!(
                out,
                "  <line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{}\"/>",
                line.x1,
                line.y1,
                line.x2,
                line.y2,
                css_color(line.color),
                line.stroke_width
            );
        }

        for polygon in &frame.polygons {
            let mut points = String::new();
            for &(x, y) in &polygon.points {
                let _ = write!(points, "{x:.2},{y:.2} ");
            }
            let _ = writeln!(
                out,
                "  <polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                points.trim_end(),
                css_color(polygon.fill),
                css_color(polygon.stroke),
                polygon.stroke_width,
                data_id_attr(polygon.record_id.as_deref())
            );
        }

        for circle in &frame.circles {
            let _ = writeln!(
                out,
                "  <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\"{}/>",
                circle.cx,
                circle.cy,
                circle.radius,
                css_color(circle.fill),
                css_color(circle.stroke),
                circle.stroke_width,
                data_id_attr(circle.record_id.as_deref())
            );
        }

        for text in &frame.texts {
            let anchor = match text.h_align {
                TextHAlign::Left => "start",
                TextHAlign::Center => "middle",
                TextHAlign::Right => "end",
            };
            let _ = writeln!(
                out,
                "  <text x=\"{:.2}\" y=\"{:.2}\" font-size=\"{}\" fill=\"{}\" text-anchor=\"{anchor}\">{}</text>",
                text.x,
                text.y,
                text.font_size_px,
                css_color(text.color),
                escape_text(&text.text)
            );
        }

        out.push_str("</svg>\n");
        self.document = out;
        Ok(())
    }
}

fn css_color(color: Color) -> String {
    let to_byte = |channel: f64| (channel * 255.0).round() as u8;
    format!(
        "rgba({},{},{},{})",
        to_byte(color.red),
        to_byte(color.green),
        to_byte(color.blue),
        color.alpha
    )
}

fn data_id_attr(record_id: Option<&str>) -> String {
    match record_id {
        Some(id) => format!(" data-id=\"{}\"", escape_text(id)),
        None => String::new(),
    }
}

fn escape_text(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
