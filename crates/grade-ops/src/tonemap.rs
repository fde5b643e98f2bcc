//! Highlight roll-off tone mapping.
//!
//! Both white levels are given in nits and normalized by
//! [`REFERENCE_WHITE_NITS`], so 100 nits is linear 1.0. The curve is a
//! rational function
//!
//! ```text
//! f(x) = a * x / (x + b)
//! ```
//!
//! anchored at the adaptation level `g = ADAPTATION_NITS / 100` (`f(g) = g`)
//! and solved so that `f(input_white) = output_white`:
//!
//! ```text
//! b = wi * (wo - g) / (wi - wo)
//! a = g + b
//! ```
//!
//! Input is clamped to `[0, wi]` first and the result to `[0, wo]`. When the
//! two whites are equal only the clamps apply. The same formula expands
//! (`wo > wi`) as well as compresses.

use grade_core::{Error, PixelColor, Result};

/// Nits that map to linear 1.0.
pub const REFERENCE_WHITE_NITS: f32 = 100.0;

/// Adaptation level in nits, the fixed point of the roll-off.
pub const ADAPTATION_NITS: f32 = 9.0;

/// Validated white levels for the tone mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneMapParams {
    max_input_nits: f32,
    max_output_nits: f32,
}

impl ToneMapParams {
    /// SDR reference white expanded to the 10000 nit PQ ceiling.
    pub const SDR_TO_PQ: Self = Self {
        max_input_nits: 100.0,
        max_output_nits: 10000.0,
    };

    /// Validates and stores the two white levels.
    ///
    /// Both must be finite and above [`ADAPTATION_NITS`]; at or below it the
    /// curve would not be monotonic over `[0, input_white]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use grade_ops::ToneMapParams;
    ///
    /// assert!(ToneMapParams::new(1000.0, 100.0).is_ok());
    /// assert!(ToneMapParams::new(1000.0, 5.0).is_err());
    /// ```
    pub fn new(max_input_nits: f32, max_output_nits: f32) -> Result<Self> {
        check_nits("max_input_nits", max_input_nits)?;
        check_nits("max_output_nits", max_output_nits)?;
        Ok(Self { max_input_nits, max_output_nits })
    }

    /// Input white in nits.
    #[inline]
    pub fn max_input_nits(&self) -> f32 {
        self.max_input_nits
    }

    /// Output white in nits.
    #[inline]
    pub fn max_output_nits(&self) -> f32 {
        self.max_output_nits
    }

    /// Solves the roll-off coefficients.
    pub fn curve(&self) -> ToneCurve {
        ToneCurve::solve(
            self.max_input_nits / REFERENCE_WHITE_NITS,
            self.max_output_nits / REFERENCE_WHITE_NITS,
        )
    }

    /// Tone maps an RGB triple. Solves the curve on every call; use
    /// [`ToneMapParams::curve`] once per frame on hot paths.
    #[inline]
    pub fn apply(&self, rgb: PixelColor) -> PixelColor {
        self.curve().apply(rgb)
    }
}

fn check_nits(name: &'static str, nits: f32) -> Result<()> {
    if nits.is_finite() && nits > ADAPTATION_NITS {
        Ok(())
    } else {
        Err(Error::invalid(name, nits, "finite and greater than 9 nits"))
    }
}

/// Precomputed roll-off for a pair of normalized white levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneCurve {
    input_white: f32,
    output_white: f32,
    a: f32,
    b: f32,
    rolloff: bool,
}

impl ToneCurve {
    /// Solves `a` and `b` for normalized input and output whites.
    pub fn solve(input_white: f32, output_white: f32) -> Self {
        let g = ADAPTATION_NITS / REFERENCE_WHITE_NITS;
        let rolloff = input_white != output_white;
        let (a, b) = if rolloff {
            let b = input_white * (output_white - g) / (input_white - output_white);
            (g + b, b)
        } else {
            (1.0, 0.0)
        };
        Self { input_white, output_white, a, b, rolloff }
    }

    /// Normalized input white.
    pub fn input_white(&self) -> f32 {
        self.input_white
    }

    /// Normalized output white.
    pub fn output_white(&self) -> f32 {
        self.output_white
    }

    /// Maps one channel.
    #[inline]
    pub fn map(&self, x: f32) -> f32 {
        let x = x.clamp(0.0, self.input_white);
        let y = if self.rolloff { self.a * x / (x + self.b) } else { x };
        y.clamp(0.0, self.output_white)
    }

    /// Maps each channel independently.
    #[inline]
    pub fn apply(&self, rgb: PixelColor) -> PixelColor {
        [self.map(rgb[0]), self.map(rgb[1]), self.map(rgb[2])]
    }
}

/// Tone maps `rgb` from `max_input_nits` to `max_output_nits`.
///
/// Unvalidated convenience form; prefer [`ToneMapParams`] when the values
/// come from user configuration.
pub fn map(rgb: PixelColor, max_input_nits: f32, max_output_nits: f32) -> PixelColor {
    ToneCurve::solve(
        max_input_nits / REFERENCE_WHITE_NITS,
        max_output_nits / REFERENCE_WHITE_NITS,
    )
    .apply(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_golden_constants() {
        assert_eq!(REFERENCE_WHITE_NITS, 100.0);
        assert_eq!(ADAPTATION_NITS, 9.0);
    }

    #[test]
    fn test_boundary_matches_output_white() {
        for (i, o) in [(1000.0, 100.0), (4000.0, 1000.0), (100.0, 10000.0), (600.0, 203.0)] {
            let c = ToneMapParams::new(i, o).unwrap().curve();
            let y = c.map(i / 100.0);
            assert!((y - o / 100.0).abs() < 1e-3 * (o / 100.0), "{}->{}: {}", i, o, y);
        }
    }

    #[test]
    fn test_adaptation_level_is_fixed() {
        let c = ToneCurve::solve(10.0, 1.0);
        assert!((c.map(0.09) - 0.09).abs() < 1e-6);
    }

    #[test]
    fn test_equal_whites_only_clamp() {
        let c = ToneCurve::solve(2.0, 2.0);
        assert_eq!(c.map(0.5), 0.5);
        assert_eq!(c.map(5.0), 2.0);
        assert_eq!(c.map(-1.0), 0.0);
    }

    #[test]
    fn test_rejects_bad_nits() {
        assert!(ToneMapParams::new(9.0, 100.0).is_err());
        assert!(ToneMapParams::new(100.0, f32::NAN).is_err());
        assert!(ToneMapParams::new(f32::INFINITY, 100.0).is_err());
        let err = ToneMapParams::new(100.0, -1.0).unwrap_err();
        assert!(matches!(err, Error::InvalidParameter { name: "max_output_nits", .. }));
    }

    #[test]
    fn test_sdr_to_pq_expands() {
        let c = ToneMapParams::SDR_TO_PQ.curve();
        assert!((c.map(1.0) - 100.0).abs() < 0.05);
        assert!(c.map(0.5) > 0.5);
    }
}
