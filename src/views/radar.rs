use tracing::debug;

use crate::core::stats;
use crate::core::{GRID_LEVELS, Metric, PolarGrid, RecordSet, StudentRecord, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{self, InteractionState, Tooltip};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, palette,
};
use crate::views::{LegendEntry, ViewPhase};

const GRID_STROKE: Color = Color::rgb(0.8, 0.8, 0.8);
const LABEL_COLOR: Color = Color::rgb(0.2, 0.2, 0.2);
const VERTEX_RADIUS: f64 = 4.0;

/// At least this many metrics must stay selected for the chart to remain
/// readable as a polygon.
pub const MIN_SELECTED_METRICS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
struct SeriesMeta {
    id: String,
    values: Vec<(Metric, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
struct VertexDot {
    record_id: String,
    metric: Metric,
    value: f64,
    x: f64,
    y: f64,
}

/// Polar overlay of up to three series polygons (student 1, optional
/// student 2, optional population average) over the selected metric spokes.
pub struct RadarChartView<'a> {
    records: &'a RecordSet,
    grid: PolarGrid,
    viewport: Viewport,
    primary_id: String,
    secondary_id: Option<String>,
    show_average: bool,
    selected: Vec<Metric>,
    interaction: InteractionState,
    phase: ViewPhase,
    frame: RenderFrame,
    series: Vec<SeriesMeta>,
    vertices: Vec<VertexDot>,
}

impl<'a> RadarChartView<'a> {
    /// Builds the view with the first record selected and all metrics
    /// checked, then performs the initial draw.
    pub fn new(records: &'a RecordSet) -> ChartResult<Self> {
        let first = records
            .get(0)
            .ok_or_else(|| ChartError::InvalidData("record set must not be empty".to_owned()))?;

        let viewport = Viewport::new(500, 500);
        let mut view = Self {
            records,
            grid: PolarGrid::centered(viewport.width, viewport.height, 50.0)?,
            viewport,
            primary_id: first.id.clone(),
            secondary_id: None,
            show_average: false,
            selected: Metric::ALL.to_vec(),
            interaction: InteractionState::default(),
            phase: ViewPhase::Idle,
            frame: RenderFrame::new(viewport),
            series: Vec::new(),
            vertices: Vec::new(),
        };
        view.draw()?;
        Ok(view)
    }

    #[must_use]
    pub fn phase(&self) -> ViewPhase {
        self.phase
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    #[must_use]
    pub fn selected_metrics(&self) -> &[Metric] {
        &self.selected
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn set_primary(&mut self, record_id: &str) -> ChartResult<()> {
        let record = self
            .records
            .find(record_id)
            .ok_or_else(|| ChartError::RecordNotFound(record_id.to_owned()))?;
        self.primary_id = record.id.clone();
        self.draw()
    }

    pub fn set_secondary(&mut self, record_id: Option<&str>) -> ChartResult<()> {
        self.secondary_id = match record_id {
            Some(id) => {
                let record = self
                    .records
                    .find(id)
                    .ok_or_else(|| ChartError::RecordNotFound(id.to_owned()))?;
                Some(record.id.clone())
            }
            None => None,
        };
        self.draw()
    }

    pub fn set_show_average(&mut self, show: bool) -> ChartResult<()> {
        self.show_average = show;
        self.draw()
    }

    /// Replaces the checked metric set.
    ///
    /// A selection of fewer than `MIN_SELECTED_METRICS` is rejected with a
    /// blocking notice and the prior valid selection and render are kept.
    pub fn set_metrics(&mut self, metrics: Vec<Metric>) -> ChartResult<()> {
        if metrics.len() < MIN_SELECTED_METRICS {
            return Err(ChartError::InvalidSelection {
                selected: metrics.len(),
                minimum: MIN_SELECTED_METRICS,
            });
        }
        self.selected = metrics;
        self.draw()
    }

    /// Full synchronous redraw of grid, spokes, and series polygons.
    pub fn draw(&mut self) -> ChartResult<()> {
        self.phase = ViewPhase::Rendering;
        let result = self.rebuild();
        self.phase = ViewPhase::Idle;
        result
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        debug!(
            metrics = self.selected.len(),
            primary = %self.primary_id,
            "draw radar chart"
        );

        let mut frame = RenderFrame::new(self.viewport);
        self.series.clear();
        self.vertices.clear();

        self.push_grid(&mut frame)?;

        let primary = self
            .records
            .find(&self.primary_id)
            .ok_or_else(|| ChartError::RecordNotFound(self.primary_id.clone()))?
            .clone();
        self.push_series(&mut frame, &primary, 0)?;

        if let Some(secondary_id) = self.secondary_id.clone() {
            let secondary = self
                .records
                .find(&secondary_id)
                .ok_or_else(|| ChartError::RecordNotFound(secondary_id.clone()))?
                .clone();
            self.push_series(&mut frame, &secondary, 1)?;
        }

        if self.show_average {
            let average = stats::average_pseudo_record(self.records, &self.selected)?;
            self.push_series(&mut frame, &average, 2)?;
        }

        frame.validate()?;
        self.frame = frame;
        Ok(())
    }

    fn push_grid(&self, frame: &mut RenderFrame) -> ChartResult<()> {
        let grid = self.grid;
        for level in GRID_LEVELS {
            frame.circles.push(
                CirclePrimitive::new(
                    grid.center_x,
                    grid.center_y,
                    (level / 100.0) * grid.radius,
                    Color::rgba(0.0, 0.0, 0.0, 0.0),
                )
                .with_stroke(GRID_STROKE, 1.0),
            );
        }

        let count = self.selected.len();
        for (i, metric) in self.selected.iter().enumerate() {
            let angle = grid.angle_for(i, count);
            let outer = grid.point_at(angle, grid.radius);
            frame.lines.push(LinePrimitive::new(
                grid.center_x,
                grid.center_y,
                outer.x,
                outer.y,
                1.0,
                GRID_STROKE,
            ));

            let label_at = grid.point_at(angle, grid.radius + 20.0);
            frame.texts.push(TextPrimitive::new(
                metric.name(),
                label_at.x,
                label_at.y,
                12.0,
                LABEL_COLOR,
                TextHAlign::Center,
            ));
        }
        Ok(())
    }

    fn push_series(
        &mut self,
        frame: &mut RenderFrame,
        record: &StudentRecord,
        series_index: usize,
    ) -> ChartResult<()> {
        let grid = self.grid;
        let color = palette::series_color(series_index);
        let fill = Color::rgba(color.red, color.green, color.blue, 0.2);
        let count = self.selected.len();

        let mut points = Vec::with_capacity(count);
        let mut values = Vec::with_capacity(count);
        let mut dots = Vec::with_capacity(count);
        for (i, &metric) in self.selected.iter().enumerate() {
            let angle = grid.angle_for(i, count);
            let value = record.score(metric);
            let point = grid.project(angle, value)?;
            points.push((point.x, point.y));
            values.push((metric, value));
            dots.push(VertexDot {
                record_id: record.id.clone(),
                metric,
                value,
                x: point.x,
                y: point.y,
            });
        }

        frame
            .polygons
            .push(PolygonPrimitive::new(points, fill, color, 2.0).with_record_id(&record.id));

        for dot in &dots {
            frame.circles.push(
                CirclePrimitive::new(dot.x, dot.y, VERTEX_RADIUS, color)
                    .with_stroke(Color::rgb(1.0, 1.0, 1.0), 1.0)
                    .with_record_id(&dot.record_id),
            );
        }
        self.vertices.extend(dots);

        self.series.push(SeriesMeta {
            id: record.id.clone(),
            values,
        });
        Ok(())
    }

    /// Pointer hover: vertex dots report one metric, series polygons
    /// report every selected metric.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let vertex_hit = self
            .vertices
            .iter()
            .rev()
            .find(|dot| {
                let dx = x - dot.x;
                let dy = y - dot.y;
                dx * dx + dy * dy <= VERTEX_RADIUS * VERTEX_RADIUS
            })
            .map(|dot| {
                vec![
                    format!("Student ID: {}", dot.record_id),
                    format!("{}: {:.1}", dot.metric, dot.value),
                ]
            });
        if let Some(lines) = vertex_hit {
            self.interaction.on_pointer_enter(Tooltip {
                lines,
                x: x + 10.0,
                y: y + 10.0,
            });
            return;
        }

        let polygon_hit = interaction::hit_polygon(&self.frame, x, y)
            .and_then(|polygon| polygon.record_id.as_deref())
            .and_then(|id| self.series.iter().find(|series| series.id == id))
            .map(|series| {
                let mut lines = vec![format!("Student ID: {}", series.id)];
                lines.extend(
                    series
                        .values
                        .iter()
                        .map(|(metric, value)| format!("{metric}: {value:.1}")),
                );
                lines
            });
        match polygon_hit {
            Some(lines) => self.interaction.on_pointer_enter(Tooltip {
                lines,
                x: x + 10.0,
                y: y + 10.0,
            }),
            None => self.interaction.on_pointer_leave(),
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// One legend entry per rendered series, in draw order.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .enumerate()
            .map(|(i, series)| LegendEntry::new(series.id.clone(), palette::series_color(i)))
            .collect()
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.frame)
    }
}
