use criterion::{Criterion, criterion_group, criterion_main};
use gradechart::core::{
    Metric, PlotArea, PolarGrid, RecordSet, ScoreScale, StudentRecord, Viewport,
};
use gradechart::render::NullRenderer;
use gradechart::views::{BubbleChartView, RoseChartView, RoseMode};
use std::hint::black_box;

fn sample_records(count: usize) -> RecordSet {
    let records: Vec<StudentRecord> = (0..count)
        .map(|i| {
            let base = (i % 101) as f64;
            StudentRecord::new(
                format!("2021-{i:04}"),
                [
                    (Metric::Tbp, base),
                    (Metric::Tugas, (base + 17.0) % 101.0),
                    (Metric::Uts, (base + 31.0) % 101.0),
                    (Metric::Uas, (base + 47.0) % 101.0),
                    (Metric::Total, (base + 11.0) % 101.0),
                    (Metric::Cpmk012, (base + 5.0) % 101.0),
                ],
            )
            .expect("valid generated record")
        })
        .collect();
    RecordSet::new(records)
}

fn bench_score_projection(c: &mut Criterion) {
    let area = PlotArea::new(Viewport::new(800, 600), 40.0, 40.0, 60.0, 60.0);
    let scale = ScoreScale::new(area).expect("valid scale");

    c.bench_function("score_projection", |b| {
        b.iter(|| {
            let x = scale.x_to_pixel(black_box(73.5)).expect("x projection");
            let y = scale.y_to_pixel(black_box(73.5)).expect("y projection");
            black_box((x, y))
        })
    });
}

fn bench_polar_projection_9_spokes(c: &mut Criterion) {
    let grid = PolarGrid::centered(500, 500, 50.0).expect("valid grid");

    c.bench_function("polar_projection_9_spokes", |b| {
        b.iter(|| {
            for i in 0..9 {
                let angle = grid.angle_for(black_box(i), 9);
                let point = grid.project(angle, black_box(87.0)).expect("projection");
                black_box(point);
            }
        })
    });
}

fn bench_bubble_draw_1k(c: &mut Criterion) {
    let records = sample_records(1_000);
    let mut view = BubbleChartView::new(&records).expect("view init");

    c.bench_function("bubble_draw_1k", |b| {
        b.iter(|| view.draw().expect("draw should succeed"))
    });
}

fn bench_rose_statistics_draw_1k(c: &mut Criterion) {
    let records = sample_records(1_000);
    let mut view = RoseChartView::new(&records).expect("view init");
    view.set_mode(RoseMode::Statistics).expect("mode switch");
    let mut renderer = NullRenderer::default();

    c.bench_function("rose_statistics_draw_1k", |b| {
        b.iter(|| {
            view.draw().expect("draw should succeed");
            view.render_with(&mut renderer).expect("render");
        })
    });
}

criterion_group!(
    benches,
    bench_score_projection,
    bench_polar_projection_9_spokes,
    bench_bubble_draw_1k,
    bench_rose_statistics_draw_1k
);
criterion_main!(benches);
