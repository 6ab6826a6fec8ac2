use smallvec::SmallVec;
use tracing::debug;

use crate::core::stats::{self, MetricSummary};
use crate::core::{GRID_LEVELS, Grade, Metric, MetricView, PolarGrid, RecordSet, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{InteractionState, Tooltip};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PolygonPrimitive, RenderFrame, Renderer, TextHAlign,
    TextPrimitive, palette,
};
use crate::views::{LegendEntry, ViewPhase};

const SPOKE_STROKE: Color = Color::rgb(0.88, 0.88, 0.88);
const RING_STROKE: Color = Color::rgb(0.87, 0.87, 0.87);
const LEVEL_LABEL_COLOR: Color = Color::rgb(0.4, 0.4, 0.4);
const CENTER_FILL: Color = Color::rgb(0.17, 0.24, 0.31);
/// Each petal spans this fraction of its category's angular slot.
const PETAL_WIDTH_FACTOR: f64 = 0.7;
/// Wedge arcs are sampled at a tenth of the category slot.
const PETAL_SAMPLE_DIVISOR: f64 = 10.0;

/// What the rose chart is presenting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoseMode {
    /// One petal per metric for a single selected student.
    Student,
    /// One petal per metric showing the population average.
    Statistics,
}

/// Performance-table row for student mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    pub metric: Metric,
    pub value: f64,
    pub grade: Grade,
}

/// Statistics-table row for statistics mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatsRow {
    pub metric: Metric,
    pub summary: MetricSummary,
}

#[derive(Debug, Clone, PartialEq)]
struct PetalMeta {
    metric: Metric,
    value: f64,
}

/// Polar wedge chart: one heat-colored petal per metric, with a center
/// disk naming the subject and a side table of values.
pub struct RoseChartView<'a> {
    records: &'a RecordSet,
    grid: PolarGrid,
    viewport: Viewport,
    mode: RoseMode,
    data_view: MetricView,
    selected_id: String,
    interaction: InteractionState,
    phase: ViewPhase,
    frame: RenderFrame,
    petals: Vec<PetalMeta>,
    performance_rows: Vec<TableRow>,
    stats_rows: Vec<StatsRow>,
}

impl<'a> RoseChartView<'a> {
    /// Builds the view in student mode on the first record, basic metrics,
    /// and performs the initial draw.
    pub fn new(records: &'a RecordSet) -> ChartResult<Self> {
        let first = records
            .get(0)
            .ok_or_else(|| ChartError::InvalidData("record set must not be empty".to_owned()))?;

        let viewport = Viewport::new(650, 650);
        let mut view = Self {
            records,
            grid: PolarGrid::centered(viewport.width, viewport.height, 70.0)?,
            viewport,
            mode: RoseMode::Student,
            data_view: MetricView::Basic,
            selected_id: first.id.clone(),
            interaction: InteractionState::default(),
            phase: ViewPhase::Idle,
            frame: RenderFrame::new(viewport),
            petals: Vec::new(),
            performance_rows: Vec::new(),
            stats_rows: Vec::new(),
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
    pub fn mode(&self) -> RoseMode {
        self.mode
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Rows for the performance table; empty outside student mode.
    #[must_use]
    pub fn performance_rows(&self) -> &[TableRow] {
        &self.performance_rows
    }

    /// Rows for the statistics table; empty outside statistics mode.
    #[must_use]
    pub fn stats_rows(&self) -> &[StatsRow] {
        &self.stats_rows
    }

    pub fn set_mode(&mut self, mode: RoseMode) -> ChartResult<()> {
        self.mode = mode;
        self.draw()
    }

    pub fn set_data_view(&mut self, data_view: MetricView) -> ChartResult<()> {
        self.data_view = data_view;
        self.draw()
    }

    pub fn set_student(&mut self, record_id: &str) -> ChartResult<()> {
        let record = self
            .records
            .find(record_id)
            .ok_or_else(|| ChartError::RecordNotFound(record_id.to_owned()))?;
        self.selected_id = record.id.clone();
        self.draw()
    }

    /// Full synchronous redraw of grid, petals, center disk, and tables.
    pub fn draw(&mut self) -> ChartResult<()> {
        self.phase = ViewPhase::Rendering;
        let result = self.rebuild();
        self.phase = ViewPhase::Idle;
        result
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        let categories = self.data_view.metrics();
        debug!(
            mode = ?self.mode,
            categories = categories.len(),
            "draw rose chart"
        );

        let mut frame = RenderFrame::new(self.viewport);
        self.petals.clear();
        self.performance_rows.clear();
        self.stats_rows.clear();

        self.push_base(&mut frame, categories);

        let center_label = match self.mode {
            RoseMode::Student => {
                self.push_student_petals(&mut frame, categories)?;
                self.selected_id.clone()
            }
            RoseMode::Statistics => {
                self.push_statistics_petals(&mut frame, categories)?;
                "STATS".to_owned()
            }
        };

        frame.circles.push(CirclePrimitive::new(
            self.grid.center_x,
            self.grid.center_y,
            15.0,
            CENTER_FILL,
        ));
        frame.texts.push(TextPrimitive::new(
            center_label,
            self.grid.center_x,
            self.grid.center_y + 6.0,
            14.0,
            Color::rgb(1.0, 1.0, 1.0),
            TextHAlign::Center,
        ));

        frame.validate()?;
        self.frame = frame;
        Ok(())
    }

    fn push_base(&self, frame: &mut RenderFrame, categories: &[Metric]) {
        let grid = self.grid;
        let count = categories.len();

        for (i, metric) in categories.iter().enumerate() {
            let angle = grid.angle_for(i, count);
            let outer = grid.point_at(angle, grid.radius);
            frame.lines.push(LinePrimitive::new(
                grid.center_x,
                grid.center_y,
                outer.x,
                outer.y,
                1.5,
                SPOKE_STROKE,
            ));

            let label_at = grid.point_at(angle, grid.radius + 50.0);
            // CPMK names are longer; shrink them so labels stay clear of
            // their neighbors.
            let font_size = if metric.is_cpmk() { 11.0 } else { 13.0 };
            frame.texts.push(TextPrimitive::new(
                metric.name(),
                label_at.x,
                label_at.y,
                font_size,
                LEVEL_LABEL_COLOR,
                TextHAlign::Center,
            ));
        }

        for level in GRID_LEVELS {
            let ring_radius = (level / 100.0) * grid.radius;
            frame.circles.push(
                CirclePrimitive::new(
                    grid.center_x,
                    grid.center_y,
                    ring_radius,
                    Color::rgba(0.0, 0.0, 0.0, 0.0),
                )
                .with_stroke(RING_STROKE, 1.5),
            );
            frame.texts.push(TextPrimitive::new(
                format!("{level:.0}"),
                grid.center_x + 8.0,
                grid.center_y - ring_radius + 5.0,
                12.0,
                LEVEL_LABEL_COLOR,
                TextHAlign::Left,
            ));
        }
    }

    fn push_student_petals(
        &mut self,
        frame: &mut RenderFrame,
        categories: &[Metric],
    ) -> ChartResult<()> {
        let record = self
            .records
            .find(&self.selected_id)
            .ok_or_else(|| ChartError::RecordNotFound(self.selected_id.clone()))?
            .clone();

        let count = categories.len();
        for (i, &metric) in categories.iter().enumerate() {
            if !record.has_score(metric) {
                continue;
            }
            let value = record.score(metric);
            let petal = self.petal_polygon(i, count, value).with_record_id(&record.id);
            frame.polygons.push(petal);
            self.petals.push(PetalMeta { metric, value });
            self.performance_rows.push(TableRow {
                metric,
                value,
                grade: Grade::from_score(value),
            });
        }
        Ok(())
    }

    fn push_statistics_petals(
        &mut self,
        frame: &mut RenderFrame,
        categories: &[Metric],
    ) -> ChartResult<()> {
        let summaries = stats::metric_summaries(self.records, categories);

        let count = categories.len();
        for (i, &metric) in categories.iter().enumerate() {
            let Some(&summary) = summaries.get(&metric) else {
                continue;
            };
            let petal = self.petal_polygon(i, count, summary.avg);
            frame.polygons.push(petal);
            self.petals.push(PetalMeta {
                metric,
                value: summary.avg,
            });
            self.stats_rows.push(StatsRow { metric, summary });
        }
        Ok(())
    }

    /// Wedge polygon for category `index`: the outer arc is sampled at a
    /// fixed fine angular step across the petal width, then closed back
    /// through the center point.
    fn petal_polygon(&self, index: usize, count: usize, value: f64) -> PolygonPrimitive {
        let grid = self.grid;
        let step = grid.angle_step(count);
        let angle = grid.angle_for(index, count);
        let sample_step = step / PETAL_SAMPLE_DIVISOR;
        let half_width = step * PETAL_WIDTH_FACTOR / 2.0;
        let scaled = (value / 100.0) * grid.radius;

        let mut points: SmallVec<[(f64, f64); 12]> = SmallVec::new();
        let mut a = angle - half_width;
        while a <= angle + half_width + 1e-9 {
            let point = grid.point_at(a, scaled);
            points.push((point.x, point.y));
            a += sample_step;
        }
        points.push((grid.center_x, grid.center_y));

        PolygonPrimitive::new(
            points.into_vec(),
            palette::heat_color(value),
            Color::rgb(1.0, 1.0, 1.0),
            2.0,
        )
    }

    /// Pointer hover over a petal fills the tooltip with its category,
    /// value, and (in student mode) grade.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let hit = self
            .frame
            .polygons
            .iter()
            .enumerate()
            .rev()
            .find(|(_, polygon)| polygon.contains(x, y))
            .and_then(|(i, _)| self.petals.get(i))
            .map(|petal| match self.mode {
                RoseMode::Student => vec![
                    format!(
                        "{}: {:.1} ({})",
                        petal.metric,
                        petal.value,
                        Grade::from_score(petal.value)
                    ),
                    format!("Student ID: {}", self.selected_id),
                ],
                RoseMode::Statistics => vec![
                    petal.metric.to_string(),
                    format!("Average: {:.1}", petal.value),
                ],
            });

        match hit {
            Some(lines) => self.interaction.on_pointer_enter(Tooltip {
                lines,
                x: x + 25.0,
                y: y + 25.0,
            }),
            None => self.interaction.on_pointer_leave(),
        }
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Fixed three-step heat legend.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        vec![
            LegendEntry::new("Low (0-40)", palette::heat_color(0.0)),
            LegendEntry::new("Medium (41-70)", palette::heat_color(50.0)),
            LegendEntry::new("High (71-100)", palette::heat_color(100.0)),
        ]
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.frame)
    }
}
