//! Exposure zone classification.
//!
//! A pixel is decoded to linear, its Rec.709 luminance measured in stops
//! from middle grey, and the stop quantized into one of 17 levels: half
//! stops within one stop of grey, whole stops outside, clamped to ±7. Each
//! level is shown as a fixed false color; the two darkest levels share one
//! color, giving a 16 entry [`PALETTE`].
//!
//! Display-referred sources are first brought back to a scene estimate with
//! the inverse OOTF and an SDR to 10000 nit expansion.
//!
//! The reference chart divides a strip into [`CHART_SEGMENTS`] bands, each
//! showing the color for a fixed stop, brightest at the top.

use grade_core::{luminance_rec709, GammaType, PixelColor};
use grade_transfer::decode_rgb;

use crate::ootf;
use crate::tonemap::ToneMapParams;

/// Luminance classified as stop 0.
pub const MIDDLE_GRAY: f32 = 0.18;

/// Luminance floor applied before the logarithm.
pub const LUMINANCE_FLOOR: f32 = 1e-10;

/// Largest stop magnitude; quantized stops are clamped to `±MAX_STOPS`.
pub const MAX_STOPS: f32 = 7.0;

/// Number of bands in the reference chart.
pub const CHART_SEGMENTS: usize = 60;

const fn rgb8(r: u8, g: u8, b: u8) -> PixelColor {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0]
}

/// False colors from darkest (index 0) to brightest (index 15).
///
/// | Index | Level |
/// |-------|-------|
/// | 0 | -7 and -6 |
/// | 1..=4 | -5 .. -2 |
/// | 5..=9 | -1, -0.5, 0, +0.5, +1 |
/// | 10..=15 | +2 .. +7 |
pub const PALETTE: [PixelColor; 16] = [
    rgb8(16, 16, 16),
    rgb8(48, 0, 64),
    rgb8(64, 0, 128),
    rgb8(0, 0, 192),
    rgb8(0, 96, 224),
    rgb8(0, 160, 160),
    rgb8(64, 128, 96),
    rgb8(128, 128, 128),
    rgb8(224, 160, 176),
    rgb8(128, 224, 96),
    rgb8(240, 224, 0),
    rgb8(255, 160, 0),
    rgb8(255, 96, 0),
    rgb8(224, 0, 0),
    rgb8(255, 128, 192),
    rgb8(255, 255, 255),
];

/// Stops of `luminance` relative to [`MIDDLE_GRAY`], floored to avoid log(0).
#[inline]
pub fn stops_from_gray(luminance: f32) -> f32 {
    (luminance.max(LUMINANCE_FLOOR) / MIDDLE_GRAY).log2()
}

/// Half stops within ±1, whole stops outside, clamped to ±7.
///
/// # Example
///
/// ```rust
/// use grade_ops::zones::quantize_stop;
///
/// assert_eq!(quantize_stop(0.3), 0.5);
/// assert_eq!(quantize_stop(2.4), 2.0);
/// assert_eq!(quantize_stop(-12.0), -7.0);
/// ```
#[inline]
pub fn quantize_stop(stop: f32) -> f32 {
    let q = if stop.abs() <= 1.0 {
        (stop * 2.0).round() / 2.0
    } else {
        stop.round()
    };
    q.clamp(-MAX_STOPS, MAX_STOPS)
}

/// Palette index of a quantized level.
#[inline]
pub fn palette_index(level: f32) -> usize {
    let idx = if level.abs() <= 1.0 {
        level * 2.0 + 7.0
    } else if level > 1.0 {
        level + 8.0
    } else {
        (level + 6.0).max(0.0)
    };
    (idx as usize).min(PALETTE.len() - 1)
}

/// False color for an unquantized stop value.
#[inline]
pub fn zone_color(stop: f32) -> PixelColor {
    PALETTE[palette_index(quantize_stop(stop))]
}

/// Linear scene estimate of an encoded pixel.
pub fn scene_linear(rgb: PixelColor, input_gamma: GammaType, display_referred: bool) -> PixelColor {
    let linear = decode_rgb(rgb, input_gamma);
    if display_referred {
        ToneMapParams::SDR_TO_PQ.apply(ootf::apply_inverse(linear))
    } else {
        linear
    }
}

/// Classifies an encoded pixel into its zone color.
///
/// # Example
///
/// ```rust
/// use grade_core::GammaType;
/// use grade_ops::zones::{classify, PALETTE};
///
/// assert_eq!(classify([0.18; 3], GammaType::Linear, false), PALETTE[7]);
/// ```
pub fn classify(rgb: PixelColor, input_gamma: GammaType, display_referred: bool) -> PixelColor {
    let linear = scene_linear(rgb, input_gamma, display_referred);
    zone_color(stops_from_gray(luminance_rec709(linear)))
}

/// Stop shown by chart segment `i`, counted from the bottom.
#[inline]
pub fn chart_segment_stop(segment: usize) -> f32 {
    segment as f32 / 4.0 - 7.5
}

/// Chart segment for row `y` of a frame `height` rows tall (row 0 at the top).
#[inline]
pub fn chart_segment(y: usize, height: usize) -> usize {
    if height == 0 {
        return 0;
    }
    let from_bottom = height.saturating_sub(1).saturating_sub(y);
    (from_bottom * CHART_SEGMENTS / height).min(CHART_SEGMENTS - 1)
}

/// True when column `x` lies in the left `width_percent` of the frame.
#[inline]
pub fn in_chart(x: usize, width: usize, width_percent: f32) -> bool {
    (x as f32) < width as f32 * width_percent / 100.0
}

/// Chart color for row `y`, independent of pixel content.
#[inline]
pub fn chart_color(y: usize, height: usize) -> PixelColor {
    zone_color(chart_segment_stop(chart_segment(y, height)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_gray_is_grey() {
        assert_eq!(stops_from_gray(0.18), 0.0);
        let grey = zone_color(stops_from_gray(0.18));
        assert_eq!(grey, PALETTE[7]);
        assert!((grey[0] - 0.502).abs() < 1e-3);
        assert_eq!(grey[0], grey[1]);
        assert_eq!(grey[1], grey[2]);
    }

    #[test]
    fn test_two_stops_over() {
        assert!((stops_from_gray(0.72) - 2.0).abs() < 1e-6);
        assert_eq!(zone_color(stops_from_gray(0.72)), PALETTE[10]);
    }

    #[test]
    fn test_deep_shadows_clamp() {
        let black = PALETTE[0];
        assert_eq!(zone_color(stops_from_gray(0.0)), black);
        assert_eq!(zone_color(stops_from_gray(-1.0)), black);
        assert_eq!(zone_color(stops_from_gray(0.18 / 512.0)), black);
        assert_eq!(zone_color(-6.0), black);
        assert_ne!(zone_color(-5.0), black);
    }

    #[test]
    fn test_highlights_clamp() {
        assert_eq!(zone_color(7.0), PALETTE[15]);
        assert_eq!(zone_color(30.0), PALETTE[15]);
        assert_eq!(zone_color(6.0), PALETTE[14]);
    }

    #[test]
    fn test_quantization() {
        assert_eq!(quantize_stop(0.2), 0.0);
        assert_eq!(quantize_stop(0.3), 0.5);
        assert_eq!(quantize_stop(-0.8), -1.0);
        assert_eq!(quantize_stop(1.2), 1.0);
        assert_eq!(quantize_stop(1.6), 2.0);
        assert_eq!(quantize_stop(-3.4), -3.0);
        assert_eq!(quantize_stop(7.4), 7.0);
    }

    #[test]
    fn test_every_level_has_a_distinct_slot() {
        let levels = [
            -6.0, -5.0, -4.0, -3.0, -2.0, -1.0, -0.5, 0.0, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0,
        ];
        for (expected, &level) in levels.iter().enumerate() {
            assert_eq!(palette_index(level), expected, "level {}", level);
        }
        assert_eq!(palette_index(-7.0), 0);
    }

    #[test]
    fn test_display_referred_expands() {
        // SDR white lands near the top of the 10000 nit range
        let scene = scene_linear([1.0; 3], GammaType::Linear, true);
        assert!(scene[0] > 50.0);
        assert_eq!(classify([1.0; 3], GammaType::Linear, true), PALETTE[15]);
        assert_eq!(classify([1.0; 3], GammaType::Linear, false), PALETTE[10]);
    }

    #[test]
    fn test_chart_golden_mapping() {
        assert_eq!(CHART_SEGMENTS, 60);
        assert_eq!(chart_segment_stop(0), -7.5);
        assert_eq!(chart_segment_stop(30), 0.0);
        assert_eq!(chart_segment_stop(59), 7.25);
    }

    #[test]
    fn test_chart_rows() {
        assert_eq!(chart_segment(0, 600), 59);
        assert_eq!(chart_segment(599, 600), 0);
        assert_eq!(chart_segment(0, 0), 0);
        assert_eq!(chart_color(0, 600), PALETTE[15]);
        assert_eq!(chart_color(599, 600), PALETTE[0]);
        assert_eq!(chart_segment(295, 600), 30);
        assert_eq!(chart_color(295, 600), PALETTE[7]);
        // stop -0.25 rounds away from zero to the -0.5 band
        assert_eq!(chart_color(300, 600), PALETTE[6]);
    }

    #[test]
    fn test_chart_strip() {
        assert!(in_chart(0, 100, 10.0));
        assert!(in_chart(9, 100, 10.0));
        assert!(!in_chart(10, 100, 10.0));
        assert!(!in_chart(0, 100, 0.0));
        assert!(in_chart(99, 100, 100.0));
    }
}
