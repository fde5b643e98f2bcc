//! Pixel representation and luminance weights.
//!
//! A [`PixelColor`] is a plain `[R, G, B]` array. It has no fixed range:
//! scene-referred values exceed 1.0 and log encodings produce negative
//! superblacks, so no stage may assume `[0, 1]`.

/// An RGB triple, passed by value through every stage.
pub type PixelColor = [f32; 3];

/// ITU-R BT.709 luma weights for linear R, G and B.
pub const REC709_LUMA: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// BT.709 luminance of a linear triple.
///
/// ```rust
/// use grade_core::luminance_rec709;
///
/// assert!((luminance_rec709([0.18; 3]) - 0.18).abs() < 1e-6);
/// ```
#[inline]
pub fn luminance_rec709(rgb: PixelColor) -> f32 {
    rgb.iter().zip(REC709_LUMA).map(|(c, w)| c * w).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neutral_keeps_its_level() {
        for v in [0.0_f32, 0.18, 1.0, 12.5] {
            assert!((luminance_rec709([v; 3]) - v).abs() < 1e-5 * v.max(1.0));
        }
    }

    #[test]
    fn test_green_dominates() {
        let [r, g, b] = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]].map(luminance_rec709);
        assert!(g > r && r > b);
        assert_eq!(g, 0.7152);
    }
}
