use gradechart::core::{PlotArea, PolarGrid, RadiusScale, ScoreScale, Viewport};
use proptest::prelude::*;

fn test_area() -> PlotArea {
    PlotArea::new(Viewport::new(800, 600), 40.0, 40.0, 60.0, 60.0)
}

proptest! {
    #[test]
    fn x_projection_is_monotonically_increasing(
        low in 0.0f64..100.0,
        delta in 0.001f64..50.0
    ) {
        let high = (low + delta).min(100.0);
        prop_assume!(high > low);

        let scale = ScoreScale::new(test_area()).expect("valid scale");
        let px_low = scale.x_to_pixel(low).expect("to pixel");
        let px_high = scale.x_to_pixel(high).expect("to pixel");
        prop_assert!(px_high > px_low);
    }

    #[test]
    fn y_projection_is_monotonically_decreasing(
        low in 0.0f64..100.0,
        delta in 0.001f64..50.0
    ) {
        let high = (low + delta).min(100.0);
        prop_assume!(high > low);

        let scale = ScoreScale::new(test_area()).expect("valid scale");
        let px_low = scale.y_to_pixel(low).expect("to pixel");
        let px_high = scale.y_to_pixel(high).expect("to pixel");
        prop_assert!(px_high < px_low, "larger score sits higher on screen");
    }

    #[test]
    fn polar_radius_grows_with_value(
        low in 0.0f64..100.0,
        delta in 0.001f64..50.0,
        angle in 0.0f64..6.28
    ) {
        let high = (low + delta).min(100.0);
        prop_assume!(high > low);

        let grid = PolarGrid::new(250.0, 250.0, 200.0).expect("valid grid");
        let near = grid.project(angle, low).expect("project");
        let far = grid.project(angle, high).expect("project");

        let dist = |x: f64, y: f64| ((x - 250.0).powi(2) + (y - 250.0).powi(2)).sqrt();
        prop_assert!(dist(far.x, far.y) > dist(near.x, near.y));
    }

    #[test]
    fn projection_stays_inside_plot_area(value in 0.0f64..=100.0) {
        let area = test_area();
        let scale = ScoreScale::new(area).expect("valid scale");

        let x = scale.x_to_pixel(value).expect("to pixel");
        let y = scale.y_to_pixel(value).expect("to pixel");
        prop_assert!(x >= area.margin_left - 1e-9);
        prop_assert!(x <= f64::from(area.viewport.width) - area.margin_right + 1e-9);
        prop_assert!(y >= area.margin_top - 1e-9);
        prop_assert!(y <= area.baseline_y() + 1e-9);
    }

    #[test]
    fn radius_scale_floor_keeps_small_values_visible(value in 0.0f64..=100.0) {
        let scale = RadiusScale::default();
        let radius = scale.radius_for(value);
        prop_assert!(radius >= 5.0);
        if value > 25.0 {
            prop_assert!((radius - value / 5.0).abs() < 1e-12);
        }
    }
}

#[test]
fn polar_angles_divide_the_circle_clockwise_from_top() {
    let grid = PolarGrid::new(0.0, 0.0, 100.0).expect("valid grid");

    // Category 0 of 4 points straight up, category 1 points right.
    let top = grid.project(grid.angle_for(0, 4), 100.0).expect("project");
    approx::assert_relative_eq!(top.x, 0.0, epsilon = 1e-9);
    approx::assert_relative_eq!(top.y, -100.0, epsilon = 1e-9);

    let right = grid.project(grid.angle_for(1, 4), 100.0).expect("project");
    approx::assert_relative_eq!(right.x, 100.0, epsilon = 1e-9);
    approx::assert_relative_eq!(right.y, 0.0, epsilon = 1e-9);
}

#[test]
fn score_scale_rejects_degenerate_plot_area() {
    let area = PlotArea::new(Viewport::new(100, 100), 60.0, 60.0, 60.0, 60.0);
    assert!(ScoreScale::new(area).is_err());
}
