use crate::core::scale::SCORE_DOMAIN_MAX;
use crate::render::Color;

/// Banded score colors used by the bubble chart fill and its legend.
///
/// A deterministic step function of the score with boundaries at 85, 70,
/// and 50, inclusive on the upper band.
#[must_use]
pub fn band_color(score: f64) -> Color {
    if score >= 85.0 {
        Color::rgba(0.0, 0.5, 0.0, 0.7) // excellent
    } else if score >= 70.0 {
        Color::rgba(0.0, 0.0, 1.0, 0.7) // good
    } else if score >= 50.0 {
        Color::rgba(1.0, 0.65, 0.0, 0.7) // average
    } else {
        Color::rgba(1.0, 0.0, 0.0, 0.7) // poor
    }
}

/// Band display names matching `band_color`, outermost first.
pub const BAND_LABELS: [&str; 4] = [
    "Excellent (>=85)",
    "Good (70-84.9)",
    "Average (50-69.9)",
    "Poor (<50)",
];

/// Representative scores for the four bands, aligned with `BAND_LABELS`.
pub const BAND_SAMPLE_SCORES: [f64; 4] = [85.0, 70.0, 50.0, 0.0];

/// Continuous heat color: hue runs red (0) to green (120 degrees) as the
/// score runs 0 to 100, at 90% saturation and 60% lightness.
#[must_use]
pub fn heat_color(score: f64) -> Color {
    let hue = (score / SCORE_DOMAIN_MAX).clamp(0.0, 1.0) * 120.0;
    hsl_to_color(hue, 0.9, 0.6)
}

/// Per-series overlay colors for the radar chart (student 1, student 2,
/// average), cycled by series index.
#[must_use]
pub fn series_color(index: usize) -> Color {
    const SERIES: [Color; 3] = [
        Color::rgb(0.23, 0.51, 0.96),
        Color::rgb(0.91, 0.30, 0.24),
        Color::rgb(0.18, 0.66, 0.37),
    ];
    SERIES[index % SERIES.len()]
}

fn hsl_to_color(hue_deg: f64, saturation: f64, lightness: f64) -> Color {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue_deg / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r1, g1, b1) = match h {
        h if h < 1.0 => (c, x, 0.0),
        h if h < 2.0 => (x, c, 0.0),
        h if h < 3.0 => (0.0, c, x),
        h if h < 4.0 => (0.0, x, c),
        h if h < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    Color::rgb(r1 + m, g1 + m, b1 + m)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn band_boundaries_are_inclusive_upward() {
        assert_eq!(band_color(85.0), band_color(100.0));
        assert_ne!(band_color(84.9), band_color(85.0));
        assert_eq!(band_color(70.0), band_color(84.9));
        assert_ne!(band_color(69.9), band_color(70.0));
        assert_eq!(band_color(50.0), band_color(69.9));
        assert_ne!(band_color(49.9), band_color(50.0));
        assert_eq!(band_color(0.0), band_color(49.9));
    }

    #[test]
    fn heat_color_endpoints() {
        // Score 0 is pure-ish red, score 100 pure-ish green at 90%/60% HSL.
        let low = heat_color(0.0);
        let high = heat_color(100.0);
        assert!(low.red > low.green);
        assert!(high.green > high.red);
        assert_relative_eq!(low.blue, high.blue, epsilon = 1e-9);
    }
}
