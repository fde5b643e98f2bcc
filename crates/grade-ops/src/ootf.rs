//! OOTF emulation.
//!
//! Rather than an explicit system gamma, the OOTF is approximated by encoding
//! with one curve and decoding with another. The BT.709 camera curve and a
//! pure 2.4 power differ in effective exponent by roughly 1.2, which is the
//! scene-to-display rendering this emulates.
//!
//! - forward (scene -> display): encode BT.709, decode gamma 2.4
//! - inverse (display -> scene): encode gamma 2.4, decode BT.709
//!
//! Channels are processed independently.

use grade_core::{GammaType, PixelColor};
use grade_transfer::{decode, encode};

/// Curve used on the scene side of the mismatch.
pub const SCENE_CURVE: GammaType = GammaType::Rec709;

/// Curve used on the display side of the mismatch.
pub const DISPLAY_CURVE: GammaType = GammaType::Gamma24;

/// Forward OOTF for a single channel.
///
/// # Example
///
/// ```rust
/// use grade_ops::ootf;
///
/// // mid grey darkens on the way to the display
/// assert!(ootf::forward(0.18) < 0.18);
/// ```
#[inline]
pub fn forward(linear: f32) -> f32 {
    decode(encode(linear, SCENE_CURVE), DISPLAY_CURVE)
}

/// Inverse OOTF for a single channel.
#[inline]
pub fn inverse(linear: f32) -> f32 {
    decode(encode(linear, DISPLAY_CURVE), SCENE_CURVE)
}

/// Forward OOTF on an RGB triple.
#[inline]
pub fn apply_forward(rgb: PixelColor) -> PixelColor {
    rgb.map(forward)
}

/// Inverse OOTF on an RGB triple.
#[inline]
pub fn apply_inverse(rgb: PixelColor) -> PixelColor {
    rgb.map(inverse)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_points() {
        assert_eq!(forward(0.0), 0.0);
        assert!((forward(1.0) - 1.0).abs() < 1e-5);
        assert!((inverse(1.0) - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_inverse_undoes_forward() {
        for &x in &[-0.3, 0.001, 0.01, 0.18, 0.5, 0.9, 2.0] {
            let back = inverse(forward(x));
            assert!((back - x).abs() < 1e-5 * x.abs().max(1.0), "x={} back={}", x, back);
        }
    }

    #[test]
    fn test_matches_curve_mismatch() {
        let x = 0.18_f32;
        let encoded = grade_transfer::rec709::encode(x);
        assert_eq!(forward(x), grade_transfer::gamma::decode_24(encoded));
    }

    #[test]
    fn test_channels_independent() {
        let rgb = apply_forward([0.1, 0.5, 0.9]);
        assert_eq!(rgb, [forward(0.1), forward(0.5), forward(0.9)]);
    }

    #[test]
    fn test_sign_preserved() {
        assert!(forward(-0.2) < 0.0);
        assert!(inverse(-0.2) < 0.0);
    }
}
