use gradechart::core::Grade;
use gradechart::render::palette;

#[test]
fn grade_thresholds_are_inclusive_on_the_upper_band() {
    assert_eq!(Grade::from_score(100.0), Grade::A);
    assert_eq!(Grade::from_score(85.0), Grade::A);
    assert_eq!(Grade::from_score(84.9), Grade::B);
    assert_eq!(Grade::from_score(70.0), Grade::B);
    assert_eq!(Grade::from_score(69.9), Grade::C);
    assert_eq!(Grade::from_score(55.0), Grade::C);
    assert_eq!(Grade::from_score(54.9), Grade::D);
    assert_eq!(Grade::from_score(40.0), Grade::D);
    assert_eq!(Grade::from_score(39.9), Grade::E);
    assert_eq!(Grade::from_score(0.0), Grade::E);
}

#[test]
fn band_color_is_a_step_function_of_score() {
    // The four documented bands, boundary inclusive upward.
    let scores = [85.0, 84.9, 70.0, 69.9, 50.0, 49.9];
    let colors: Vec<_> = scores.iter().map(|&s| palette::band_color(s)).collect();

    assert_eq!(colors[0], palette::band_color(100.0));
    assert_eq!(colors[1], colors[2], "84.9 and 70.0 share the good band");
    assert_eq!(colors[3], colors[4], "69.9 and 50.0 share the average band");
    assert_eq!(colors[5], palette::band_color(0.0));

    assert_ne!(colors[0], colors[1]);
    assert_ne!(colors[2], colors[3]);
    assert_ne!(colors[4], colors[5]);
}

#[test]
fn band_colors_validate_as_render_colors() {
    for score in [0.0, 49.9, 50.0, 69.9, 70.0, 84.9, 85.0, 100.0] {
        palette::band_color(score).validate().expect("valid color");
        palette::heat_color(score).validate().expect("valid color");
    }
}

#[test]
fn heat_color_hue_tracks_score() {
    let low = palette::heat_color(10.0);
    let mid = palette::heat_color(50.0);
    let high = palette::heat_color(90.0);

    assert!(low.red > low.green, "low scores lean red");
    assert!(high.green > high.red, "high scores lean green");
    // Yellow midpoint: red and green channels converge.
    assert!((mid.red - mid.green).abs() < 0.35);
}

#[test]
fn series_colors_cycle_deterministically() {
    assert_eq!(palette::series_color(0), palette::series_color(3));
    assert_ne!(palette::series_color(0), palette::series_color(1));
    assert_ne!(palette::series_color(1), palette::series_color(2));
}
