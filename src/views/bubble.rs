use tracing::debug;

use crate::core::stats::{self, AggregateStats};
use crate::core::{
    FilterCriteria, Metric, PlotArea, RadiusScale, RecordSet, ScoreScale, StudentRecord, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{self, InteractionState, SearchOutcome, Tooltip};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
    palette,
};
use crate::views::{LegendEntry, ViewPhase};

const AXIS_COLOR: Color = Color::rgb(0.0, 0.0, 0.0);
const HIGHLIGHT_STROKE: Color = Color::rgb(1.0, 0.0, 0.0);
const TICK_STEP: f64 = 20.0;

/// Cartesian scatter of one circle per filtered record: position from the
/// selected X/Y metrics, radius from the size metric, fill banded by the
/// TOTAL score.
pub struct BubbleChartView<'a> {
    records: &'a RecordSet,
    criteria: FilterCriteria,
    plot: PlotArea,
    radius_scale: RadiusScale,
    interaction: InteractionState,
    phase: ViewPhase,
    frame: RenderFrame,
    stats: AggregateStats,
}

impl<'a> BubbleChartView<'a> {
    /// Builds the view with default controls and performs the initial draw.
    pub fn new(records: &'a RecordSet) -> ChartResult<Self> {
        let viewport = Viewport::new(800, 600);
        let plot = PlotArea::new(viewport, 40.0, 40.0, 60.0, 60.0);
        let criteria = FilterCriteria::new(Metric::Tbp, Metric::Tugas, Metric::Cpmk012, 0.0)?;

        let mut view = Self {
            records,
            criteria,
            plot,
            radius_scale: RadiusScale::default(),
            interaction: InteractionState::default(),
            phase: ViewPhase::Idle,
            frame: RenderFrame::new(viewport),
            stats: AggregateStats::Empty,
        };
        view.draw()?;
        Ok(view)
    }

    #[must_use]
    pub fn criteria(&self) -> FilterCriteria {
        self.criteria
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
    pub fn stats(&self) -> &AggregateStats {
        &self.stats
    }

    #[must_use]
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    /// Control change: replaces the filter, drops highlight/zoom, redraws.
    pub fn set_criteria(&mut self, criteria: FilterCriteria) -> ChartResult<()> {
        self.criteria = criteria;
        self.interaction.reset();
        self.draw()
    }

    pub fn set_min_score(&mut self, min_score: f64) -> ChartResult<()> {
        let criteria = FilterCriteria::new(
            self.criteria.x_metric,
            self.criteria.y_metric,
            self.criteria.size_metric,
            min_score,
        )?;
        self.set_criteria(criteria)
    }

    /// Full synchronous redraw: filter, rebuild the scene, refresh stats.
    pub fn draw(&mut self) -> ChartResult<()> {
        self.phase = ViewPhase::Rendering;
        let result = self.rebuild();
        self.phase = ViewPhase::Idle;
        result
    }

    fn rebuild(&mut self) -> ChartResult<()> {
        let filtered = self.records.filter(&self.criteria);
        debug!(
            filtered = filtered.len(),
            total = self.records.len(),
            "draw bubble chart"
        );

        let scale = ScoreScale::new(self.plot)?;
        let mut frame =
            RenderFrame::new(self.plot.viewport).with_view_box(self.interaction.zoom());

        self.push_axes(&mut frame, scale)?;

        if filtered.is_empty() {
            let cx = f64::from(self.plot.viewport.width) / 2.0;
            let cy = f64::from(self.plot.viewport.height) / 2.0;
            frame = frame
                .with_text(TextPrimitive::new(
                    "No students match the current filters",
                    cx,
                    cy - 10.0,
                    16.0,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ))
                .with_text(TextPrimitive::new(
                    "Adjust min score filter",
                    cx,
                    cy + 12.0,
                    13.0,
                    AXIS_COLOR,
                    TextHAlign::Center,
                ));
        } else {
            for record in &filtered {
                frame = frame.with_circle(self.bubble_for(record, scale)?);
            }
        }

        self.stats = stats::summarize(&filtered, &self.criteria);
        frame.validate()?;
        self.frame = frame;
        Ok(())
    }

    fn bubble_for(&self, record: &StudentRecord, scale: ScoreScale) -> ChartResult<CirclePrimitive> {
        let cx = scale.x_to_pixel(record.score(self.criteria.x_metric))?;
        let cy = scale.y_to_pixel(record.score(self.criteria.y_metric))?;
        let radius = self
            .radius_scale
            .radius_for(record.score(self.criteria.size_metric));
        let fill = palette::band_color(record.score(Metric::Total));

        let mut circle = CirclePrimitive::new(cx, cy, radius, fill).with_record_id(&record.id);
        if self.interaction.highlighted_id() == Some(record.id.as_str()) {
            circle = circle.with_stroke(HIGHLIGHT_STROKE, 3.0);
        }
        Ok(circle)
    }

    fn push_axes(&self, frame: &mut RenderFrame, scale: ScoreScale) -> ChartResult<()> {
        let plot = self.plot;
        let baseline = plot.baseline_y();
        let right = f64::from(plot.viewport.width) - plot.margin_right;

        frame.lines.push(LinePrimitive::new(
            plot.margin_left,
            baseline,
            right,
            baseline,
            2.0,
            AXIS_COLOR,
        ));
        frame.lines.push(LinePrimitive::new(
            plot.margin_left,
            plot.margin_top,
            plot.margin_left,
            baseline,
            2.0,
            AXIS_COLOR,
        ));

        frame.texts.push(TextPrimitive::new(
            self.criteria.x_metric.axis_label(),
            f64::from(plot.viewport.width) / 2.0,
            f64::from(plot.viewport.height) - 10.0,
            14.0,
            AXIS_COLOR,
            TextHAlign::Center,
        ));
        frame.texts.push(TextPrimitive::new(
            self.criteria.y_metric.axis_label(),
            15.0,
            f64::from(plot.viewport.height) / 2.0,
            14.0,
            AXIS_COLOR,
            TextHAlign::Left,
        ));

        let mut value = 0.0;
        while value <= 100.0 {
            let x = scale.x_to_pixel(value)?;
            frame.lines.push(LinePrimitive::new(
                x,
                baseline,
                x,
                baseline + 5.0,
                1.0,
                AXIS_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{value:.0}"),
                x,
                baseline + 20.0,
                12.0,
                AXIS_COLOR,
                TextHAlign::Center,
            ));

            let y = scale.y_to_pixel(value)?;
            frame.lines.push(LinePrimitive::new(
                plot.margin_left,
                y,
                plot.margin_left - 5.0,
                y,
                1.0,
                AXIS_COLOR,
            ));
            frame.texts.push(TextPrimitive::new(
                format!("{value:.0}"),
                plot.margin_left - 10.0,
                y + 5.0,
                12.0,
                AXIS_COLOR,
                TextHAlign::Right,
            ));

            value += TICK_STEP;
        }
        Ok(())
    }

    /// Pointer hover: the topmost bubble under the pointer fills the
    /// tooltip with the record's relevant metric values.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let Some(record) = interaction::hit_circle(&self.frame, x, y)
            .and_then(|circle| circle.record_id.as_deref())
            .and_then(|id| self.records.find(id))
        else {
            self.interaction.on_pointer_leave();
            return;
        };

        let lines = vec![
            format!("ID: {}", record.id),
            format!(
                "{}: {:.1}",
                self.criteria.x_metric,
                record.score(self.criteria.x_metric)
            ),
            format!(
                "{}: {:.1}",
                self.criteria.y_metric,
                record.score(self.criteria.y_metric)
            ),
            format!("Total: {:.1}", record.score(Metric::Total)),
            format!(
                "{}: {:.1}",
                self.criteria.size_metric,
                record.score(self.criteria.size_metric)
            ),
        ];
        self.interaction.on_pointer_enter(Tooltip {
            lines,
            x: x + 10.0,
            y: y + 10.0,
        });
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.on_pointer_leave();
    }

    /// Click: highlight the bubble under the pointer, if any.
    pub fn click(&mut self, x: f64, y: f64) -> ChartResult<Option<String>> {
        let Some(id) = interaction::hit_circle(&self.frame, x, y)
            .and_then(|circle| circle.record_id.clone())
        else {
            return Ok(None);
        };
        self.highlight_record(&id)?;
        Ok(Some(id))
    }

    /// Highlights one record's bubble: exclusive red stroke, zoom window
    /// centered on the shape, tooltip beside it.
    ///
    /// Fails with `RecordNotFound` when the id is not currently rendered
    /// (unknown, or excluded by the active filter); view state is
    /// unchanged in that case.
    pub fn highlight_record(&mut self, record_id: &str) -> ChartResult<()> {
        let Some(shape) = self.frame.shape_for_record(record_id) else {
            return Err(ChartError::RecordNotFound(record_id.to_owned()));
        };
        let (cx, cy, radius) = (shape.cx, shape.cy, shape.radius);

        self.interaction
            .highlight(record_id, cx, cy, self.plot.viewport);
        self.draw()?;

        let total = self
            .records
            .find(record_id)
            .map(|record| record.score(Metric::Total))
            .unwrap_or(0.0);
        self.interaction.on_pointer_enter(Tooltip {
            lines: vec![
                format!("ID: {record_id}"),
                format!("Total Score: {total:.1}"),
            ],
            x: cx + radius + 10.0,
            y: cy - radius - 10.0,
        });
        Ok(())
    }

    /// Live dropdown results for the search box.
    #[must_use]
    pub fn search(&self, query: &str) -> SearchOutcome {
        interaction::search_records(self.records, query)
    }

    /// Submitted search: resolves the exact id, then highlights it.
    pub fn submit_search(&mut self, query: &str) -> ChartResult<String> {
        let id = interaction::submit_search(self.records, query)?;
        self.highlight_record(&id)?;
        Ok(id)
    }

    /// Restores the full view and clears all highlight styling.
    pub fn reset_zoom(&mut self) -> ChartResult<()> {
        self.interaction.reset();
        self.draw()
    }

    /// Four fixed band swatches for the side legend.
    #[must_use]
    pub fn legend(&self) -> Vec<LegendEntry> {
        palette::BAND_LABELS
            .iter()
            .zip(palette::BAND_SAMPLE_SCORES)
            .map(|(label, score)| LegendEntry::new(*label, palette::band_color(score)))
            .collect()
    }

    pub fn render_with<R: Renderer>(&self, renderer: &mut R) -> ChartResult<()> {
        renderer.render(&self.frame)
    }
}
