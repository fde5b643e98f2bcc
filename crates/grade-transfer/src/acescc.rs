//! ACEScc, the pure log2 grading encoding of ACES linear.
//!
//! There is no toe. Anything at or below zero lands on the code of 2^-16,
//! so negative linear values cannot be carried. Encoded values at or above
//! [`ceiling_knee`] decode to [`HALF_MAX`].
//!
//! Reference: AMPAS S-2014-003.

use crate::HALF_MAX;

/// Stops below 1.0 that map to code 0.
pub(crate) const OFFSET: f32 = 9.72;
/// Stops covered by one unit of code.
pub(crate) const SCALE: f32 = 17.52;

const FLOOR: f32 = 1.0 / 65536.0;
const DENORM_END: f32 = 2.0 * FLOOR;

/// Pure log segment shared with ACEScct.
#[inline]
pub(crate) fn log_code(linear: f32) -> f32 {
    (linear.log2() + OFFSET) / SCALE
}

/// Inverse of [`log_code`], saturating at [`HALF_MAX`].
#[inline]
pub(crate) fn code_linear(code: f32) -> f32 {
    if code >= ceiling_knee() {
        HALF_MAX
    } else {
        (code * SCALE - OFFSET).exp2()
    }
}

/// Code value from which decode returns [`HALF_MAX`].
#[inline]
pub fn ceiling_knee() -> f32 {
    log_code(HALF_MAX)
}

/// Linear to ACEScc.
///
/// ```rust
/// let cc = grade_transfer::acescc::encode(0.18);
/// assert!((cc - 0.4135).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    match linear {
        l if l <= 0.0 => log_code(FLOOR),
        l if l < DENORM_END => log_code(FLOOR + l / 2.0),
        l => log_code(l),
    }
}

/// ACEScc to linear.
#[inline]
pub fn decode(code: f32) -> f32 {
    if code < log_code(DENORM_END) {
        2.0 * (code_linear(code) - FLOOR)
    } else {
        code_linear(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grey_code() {
        assert!((encode(0.18) - 0.4135).abs() < 0.001);
    }

    #[test]
    fn test_decode_inverts_encode() {
        for v in [0.0001_f32, 0.001, 0.01, 0.18, 1.0, 10.0, 100.0, 10000.0] {
            let back = decode(encode(v));
            assert!((v - back).abs() < 1e-4 * v.max(1.0), "{v} -> {back}");
        }
    }

    #[test]
    fn test_non_positive_input_hits_floor() {
        assert_eq!(encode(-3.0), encode(0.0));
        assert!((encode(0.0) + 0.3584).abs() < 1e-4);
        assert!(decode(encode(0.0)).abs() < 1e-8);
    }

    #[test]
    fn test_decode_saturates() {
        let knee = ceiling_knee();
        assert_eq!(decode(knee), HALF_MAX);
        assert_eq!(decode(2.0), HALF_MAX);
        assert_eq!(decode(1e6), HALF_MAX);
        assert!(decode(knee - 0.001) < HALF_MAX);
    }
}
