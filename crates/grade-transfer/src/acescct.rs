//! ACEScct: ACEScc with a straight toe below 2^-7.
//!
//! The toe makes shadow grading behave like a video curve and lets the
//! encoding carry negative linear values. Above the toe it is the ACEScc
//! log segment, with the same [`HALF_MAX`](crate::HALF_MAX) decode ceiling.
//!
//! Reference: AMPAS S-2016-001.

use crate::acescc::{code_linear, log_code};

const TOE_END: f32 = 0.0078125;
const TOE_SLOPE: f32 = 10.5402377416545;
const TOE_OFFSET: f32 = 0.0729055341958355;

/// Code value from which decode returns [`HALF_MAX`](crate::HALF_MAX).
#[inline]
pub fn ceiling_knee() -> f32 {
    crate::acescc::ceiling_knee()
}

#[inline]
fn toe_code_end() -> f32 {
    log_code(TOE_END)
}

/// Linear to ACEScct.
///
/// ```rust
/// use grade_transfer::acescct;
///
/// assert!((acescct::encode(0.18) - 0.4135).abs() < 0.001);
/// assert!(acescct::encode(-0.01) < acescct::encode(0.0));
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear > TOE_END {
        log_code(linear)
    } else {
        TOE_SLOPE * linear + TOE_OFFSET
    }
}

/// ACEScct to linear.
#[inline]
pub fn decode(code: f32) -> f32 {
    if code > toe_code_end() {
        code_linear(code)
    } else {
        (code - TOE_OFFSET) / TOE_SLOPE
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HALF_MAX;

    #[test]
    fn test_decode_inverts_encode() {
        for v in [-0.05_f32, -0.001, 0.0, 0.001, 0.01, 0.18, 1.0, 10.0, 100.0] {
            let back = decode(encode(v));
            assert!((v - back).abs() < 1e-5 * v.abs().max(1.0), "{v} -> {back}");
        }
    }

    #[test]
    fn test_toe_meets_log() {
        let toe = TOE_SLOPE * TOE_END + TOE_OFFSET;
        assert!((toe - toe_code_end()).abs() < 1e-6);
        assert!((toe - 0.155251141552511).abs() < 1e-6);
    }

    #[test]
    fn test_decode_saturates() {
        assert_eq!(decode(1.5), HALF_MAX);
        assert!(decode(1.46) < HALF_MAX);
    }
}
