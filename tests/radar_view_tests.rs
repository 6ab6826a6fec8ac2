use gradechart::core::stats::AVERAGE_RECORD_ID;
use gradechart::core::{Metric, RecordSet, StudentRecord};
use gradechart::error::ChartError;
use gradechart::render::NullRenderer;
use gradechart::views::{RadarChartView, ViewPhase};

fn record(id: &str, base: f64) -> StudentRecord {
    let scores = Metric::ALL.into_iter().enumerate().map(|(i, metric)| {
        (metric, (base + i as f64 * 3.0).min(100.0))
    });
    StudentRecord::new(id, scores).expect("valid record")
}

fn sample_set() -> RecordSet {
    RecordSet::new(vec![
        record("alpha", 40.0),
        record("beta", 60.0),
        record("gamma", 80.0),
    ])
}

#[test]
fn initial_draw_uses_first_record_and_all_metrics() {
    let records = sample_set();
    let view = RadarChartView::new(&records).expect("view init");

    assert_eq!(view.selected_metrics().len(), Metric::ALL.len());
    assert_eq!(view.phase(), ViewPhase::Idle);

    let frame = view.frame();
    frame.validate().expect("valid frame");
    // One spoke per metric.
    assert_eq!(frame.lines.len(), Metric::ALL.len());
    // One series polygon for the primary student.
    assert_eq!(frame.polygons.len(), 1);
    assert_eq!(frame.polygons[0].record_id.as_deref(), Some("alpha"));
    // 5 grid circles plus one vertex dot per metric.
    assert_eq!(frame.circles.len(), 5 + Metric::ALL.len());
}

#[test]
fn empty_record_set_is_rejected() {
    let records = RecordSet::new(Vec::new());
    assert!(matches!(
        RadarChartView::new(&records),
        Err(ChartError::InvalidData(_))
    ));
}

#[test]
fn secondary_student_and_average_add_series() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");

    view.set_secondary(Some("beta")).expect("secondary");
    assert_eq!(view.frame().polygons.len(), 2);

    view.set_show_average(true).expect("average on");
    assert_eq!(view.frame().polygons.len(), 3);

    let legend = view.legend();
    assert_eq!(legend.len(), 3);
    assert_eq!(legend[0].label, "alpha");
    assert_eq!(legend[1].label, "beta");
    assert_eq!(legend[2].label, AVERAGE_RECORD_ID);

    view.set_secondary(None).expect("secondary off");
    assert_eq!(view.frame().polygons.len(), 2);
}

#[test]
fn selecting_fewer_than_three_metrics_keeps_prior_render() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");
    let before = view.frame().clone();
    let before_selection = view.selected_metrics().to_vec();

    let err = view
        .set_metrics(vec![Metric::Tbp, Metric::Tugas])
        .unwrap_err();
    assert!(matches!(
        err,
        ChartError::InvalidSelection {
            selected: 2,
            minimum: 3
        }
    ));

    assert_eq!(*view.frame(), before, "prior valid render retained");
    assert_eq!(view.selected_metrics(), before_selection.as_slice());
}

#[test]
fn three_metrics_is_the_accepted_minimum() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");

    view.set_metrics(vec![Metric::Tbp, Metric::Uts, Metric::Uas])
        .expect("minimum selection accepted");
    assert_eq!(view.selected_metrics().len(), 3);
    assert_eq!(view.frame().lines.len(), 3);
    assert_eq!(view.frame().polygons[0].points.len(), 3);
}

#[test]
fn unknown_student_selection_is_not_found() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");

    assert!(matches!(
        view.set_primary("nobody"),
        Err(ChartError::RecordNotFound(_))
    ));
    assert!(matches!(
        view.set_secondary(Some("nobody")),
        Err(ChartError::RecordNotFound(_))
    ));
    // Prior render intact.
    assert_eq!(view.frame().polygons[0].record_id.as_deref(), Some("alpha"));
}

#[test]
fn vertex_hover_reports_a_single_metric() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");

    // First vertex dot sits at the top spoke (metric 0 of the selection).
    let dot = view.frame().circles[5].clone();
    view.pointer_move(dot.cx, dot.cy);

    let tooltip = view.interaction().tooltip().expect("tooltip");
    assert_eq!(tooltip.lines.len(), 2);
    assert_eq!(tooltip.lines[0], "Student ID: alpha");
    assert!(tooltip.lines[1].starts_with("TBP:"));

    view.pointer_leave();
    assert!(view.interaction().tooltip().is_none());
}

#[test]
fn polygon_hover_reports_every_selected_metric() {
    let records = sample_set();
    let mut view = RadarChartView::new(&records).expect("view init");
    view.set_metrics(vec![Metric::Tbp, Metric::Uts, Metric::Uas])
        .expect("selection");

    // The polygon covers the grid center for any record with non-zero scores.
    view.pointer_move(250.0, 250.0);
    let tooltip = view.interaction().tooltip().expect("tooltip");
    assert_eq!(tooltip.lines.len(), 4, "id line plus one per metric");

    let mut renderer = NullRenderer::default();
    view.render_with(&mut renderer).expect("render");
    assert_eq!(renderer.last_polygon_count, 1);
}
