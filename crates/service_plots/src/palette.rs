//! Colour scales.
//!
//! Small piecewise-linear approximations of the matplotlib `coolwarm` and
//! `viridis` maps plus a categorical series palette.

use plotters::style::RGBColor;

const COOLWARM: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (59, 76, 192)),
    (0.25, (141, 176, 254)),
    (0.5, (221, 221, 221)),
    (0.75, (244, 154, 123)),
    (1.0, (180, 4, 38)),
];

const VIRIDIS: [(f64, (u8, u8, u8)); 5] = [
    (0.0, (68, 1, 84)),
    (0.25, (59, 82, 139)),
    (0.5, (33, 145, 140)),
    (0.75, (94, 201, 98)),
    (1.0, (253, 231, 37)),
];

/// Categorical colours for lines and box fills.
pub const SERIES: [RGBColor; 8] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(23, 190, 207),
];

/// Histogram fill.
pub const HISTOGRAM: RGBColor = RGBColor(128, 0, 128);

/// Series colour, cycling.
pub fn series_color(i: usize) -> RGBColor {
    SERIES[i % SERIES.len()]
}

fn interpolate(stops: &[(f64, (u8, u8, u8))], t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.5 } else { t.clamp(0.0, 1.0) };
    for w in stops.windows(2) {
        let (t0, c0) = w[0];
        let (t1, c1) = w[1];
        if t <= t1 {
            let f = if t1 > t0 { (t - t0) / (t1 - t0) } else { 0.0 };
            let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
            return RGBColor(mix(c0.0, c1.0), mix(c0.1, c1.1), mix(c0.2, c1.2));
        }
    }
    let (_, last) = stops[stops.len() - 1];
    RGBColor(last.0, last.1, last.2)
}

/// Diverging colour for `value` on `[lo, hi]`.
pub fn coolwarm(value: f64, lo: f64, hi: f64) -> RGBColor {
    let span = hi - lo;
    let t = if span > 0.0 { (value - lo) / span } else { 0.5 };
    interpolate(&COOLWARM, t)
}

/// Sequential colour at position `t` in `[0, 1]`.
pub fn viridis(t: f64) -> RGBColor {
    interpolate(&VIRIDIS, t)
}

/// Black or white, whichever reads better on `background`.
pub fn text_on(background: RGBColor) -> RGBColor {
    let RGBColor(r, g, b) = background;
    let luminance = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
    if luminance > 140.0 {
        RGBColor(0, 0, 0)
    } else {
        RGBColor(255, 255, 255)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coolwarm_endpoints() {
        assert_eq!(coolwarm(-1.0, -1.0, 1.0), RGBColor(59, 76, 192));
        assert_eq!(coolwarm(1.0, -1.0, 1.0), RGBColor(180, 4, 38));
        assert_eq!(coolwarm(0.0, -1.0, 1.0), RGBColor(221, 221, 221));
        // out of range clamps
        assert_eq!(coolwarm(5.0, -1.0, 1.0), RGBColor(180, 4, 38));
    }

    #[test]
    fn test_degenerate_range_is_midpoint() {
        assert_eq!(coolwarm(3.0, 3.0, 3.0), RGBColor(221, 221, 221));
        assert_eq!(coolwarm(f64::NAN, -1.0, 1.0), RGBColor(221, 221, 221));
    }

    #[test]
    fn test_text_contrast() {
        assert_eq!(text_on(RGBColor(255, 255, 255)), RGBColor(0, 0, 0));
        assert_eq!(text_on(viridis(0.0)), RGBColor(255, 255, 255));
    }

    #[test]
    fn test_series_cycles() {
        assert_eq!(series_color(0), series_color(SERIES.len()));
    }
}
