//! Chroma compression.
//!
//! Chroma is measured as `(max - min) / max` over the three channels. Below
//! the threshold `max` it is left alone. Above it, the excess is rolled off
//! with a square-root shoulder so compressed chroma approaches 1 without
//! reaching it:
//!
//! ```text
//! e  = (c - t) / (1 - t)
//! c' = t + (1 - t) * e / sqrt(e^2 + knee^2)
//! ```
//!
//! The shoulder leaves the threshold with slope `1 / knee`, so compressed
//! chroma never exceeds the input. The pixel is then pulled toward its max channel by `c' / c`, which keeps
//! hue and the max channel unchanged.

use grade_core::{Error, PixelColor, Result};

/// Validated saturation compression parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaturationParams {
    knee: f32,
    max: f32,
}

impl Default for SaturationParams {
    fn default() -> Self {
        Self { knee: 2.0, max: 0.8 }
    }
}

impl SaturationParams {
    /// Validates `knee > 1` and `max` in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grade_ops::SaturationParams;
    ///
    /// assert!(SaturationParams::new(2.0, 0.75).is_ok());
    /// assert!(SaturationParams::new(1.0, 0.75).is_err());
    /// assert!(SaturationParams::new(2.0, 1.5).is_err());
    /// ```
    pub fn new(knee: f32, max: f32) -> Result<Self> {
        if !(knee.is_finite() && knee > 1.0) {
            return Err(Error::invalid("knee", knee, "finite and greater than 1"));
        }
        if !(0.0..=1.0).contains(&max) {
            return Err(Error::invalid("max", max, "within [0, 1]"));
        }
        Ok(Self { knee, max })
    }

    /// Shoulder stiffness; larger values compress harder.
    #[inline]
    pub fn knee(&self) -> f32 {
        self.knee
    }

    /// Chroma threshold below which pixels pass unchanged.
    #[inline]
    pub fn max(&self) -> f32 {
        self.max
    }

    /// Compressed chroma for an input chroma.
    pub fn compress_chroma(&self, c: f32) -> f32 {
        let t = self.max;
        if c < t {
            return c;
        }
        let range = 1.0 - t;
        if range <= f32::EPSILON {
            return 1.0;
        }
        let e = (c - t) / range;
        let k = self.knee;
        t + range * e / (e * e + k * k).sqrt()
    }

    /// Compresses the chroma of one pixel.
    #[inline]
    pub fn apply(&self, rgb: PixelColor) -> PixelColor {
        let hi = rgb[0].max(rgb[1]).max(rgb[2]);
        let c = chroma(rgb);
        if c < self.max || c <= 0.0 {
            return rgb;
        }
        let factor = self.compress_chroma(c) / c;
        [
            hi + (rgb[0] - hi) * factor,
            hi + (rgb[1] - hi) * factor,
            hi + (rgb[2] - hi) * factor,
        ]
    }
}

/// `(max - min) / max`, or 0 when the max channel is not positive.
#[inline]
pub fn chroma(rgb: PixelColor) -> f32 {
    let hi = rgb[0].max(rgb[1]).max(rgb[2]);
    if hi <= 0.0 {
        return 0.0;
    }
    let lo = rgb[0].min(rgb[1]).min(rgb[2]);
    (hi - lo) / hi
}

/// Validates the parameters and compresses one pixel.
pub fn compress(rgb: PixelColor, knee: f32, max: f32) -> Result<PixelColor> {
    Ok(SaturationParams::new(knee, max)?.apply(rgb))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chroma() {
        assert_eq!(chroma([0.5, 0.5, 0.5]), 0.0);
        assert_eq!(chroma([1.0, 0.0, 0.0]), 1.0);
        assert_eq!(chroma([0.0, 0.0, 0.0]), 0.0);
        assert_eq!(chroma([-1.0, -0.5, -0.2]), 0.0);
        assert!((chroma([1.0, 0.5, 0.5]) - 0.5).abs() < 1e-7);
    }

    #[test]
    fn test_below_threshold_unchanged() {
        let p = SaturationParams::new(2.0, 0.8).unwrap();
        let rgb = [0.9, 0.5, 0.3];
        assert_eq!(p.apply(rgb), rgb);
    }

    #[test]
    fn test_compression_bounds() {
        let p = SaturationParams::new(1.5, 0.6).unwrap();
        for &c in &[0.6, 0.7, 0.9, 1.0, 1.5, 10.0] {
            let out = p.compress_chroma(c);
            assert!(out <= c + 1e-6 && out < 1.0 + 1e-6, "c={} out={}", c, out);
            assert!(out >= 0.6);
        }
    }

    #[test]
    fn test_threshold_continuity() {
        let p = SaturationParams::new(2.0, 0.7).unwrap();
        assert!((p.compress_chroma(0.7) - 0.7).abs() < 1e-6);
        assert!(p.compress_chroma(0.71) < 0.71);
        assert!(p.compress_chroma(0.71) > 0.70);
    }

    #[test]
    fn test_max_channel_preserved() {
        let p = SaturationParams::new(2.0, 0.5).unwrap();
        let out = p.apply([1.2, 0.1, -0.3]);
        assert_eq!(out[0], 1.2);
        assert!(chroma(out) < 1.0);
    }

    #[test]
    fn test_full_threshold() {
        let p = SaturationParams::new(2.0, 1.0).unwrap();
        assert_eq!(p.compress_chroma(0.99), 0.99);
        assert_eq!(p.compress_chroma(1.0), 1.0);
        assert_eq!(p.compress_chroma(1.4), 1.0);
    }

    #[test]
    fn test_rejects_bad_params() {
        assert!(compress([1.0, 0.0, 0.0], 0.5, 0.5).is_err());
        assert!(compress([1.0, 0.0, 0.0], f32::NAN, 0.5).is_err());
        assert!(compress([1.0, 0.0, 0.0], 2.0, -0.1).is_err());
        assert!(compress([1.0, 0.0, 0.0], 2.0, f32::NAN).is_err());
    }
}
