//! Canon Log 3 transfer function.
//!
//! Canon Log 3 has a short linear section around zero joined to two
//! mirrored log segments. Linear input is normalized by `NORM` (0.9) before
//! the curve is applied.
//!
//! # Reference
//!
//! Canon Log Gamma Curves - Description of the Canon Log, Canon Log 2
//! and Canon Log 3 Gamma Curves (2018)

const LIN_BREAK: f64 = 0.014;
const CUT_LOW: f64 = 0.097465473;
const CUT_HIGH: f64 = 0.15277891;
const LOG_OFFSET_NEG: f64 = 0.12783901;
const LOG_OFFSET_POS: f64 = 0.12240537;
const LOG_SLOPE: f64 = 0.36726845;
const LIN_SCALE: f64 = 14.98325;
const LIN_SLOPE: f64 = 1.9754798;
const LIN_OFFSET: f64 = 0.12512219;
const NORM: f64 = 0.9;

/// Canon Log 3 encode: linear to CLog3.
///
/// # Example
///
/// ```rust
/// use grade_transfer::canon_log::encode;
///
/// assert!((encode(0.0) - 0.12512219).abs() < 1e-6);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64 / NORM;
    let y = if x < -LIN_BREAK {
        -LOG_SLOPE * (-x * LIN_SCALE + 1.0).log10() + LOG_OFFSET_NEG
    } else if x <= LIN_BREAK {
        LIN_SLOPE * x + LIN_OFFSET
    } else {
        LOG_SLOPE * (x * LIN_SCALE + 1.0).log10() + LOG_OFFSET_POS
    };
    y as f32
}

/// Canon Log 3 decode: CLog3 to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;
    let x = if y < CUT_LOW {
        -(10.0_f64.powf((LOG_OFFSET_NEG - y) / LOG_SLOPE) - 1.0) / LIN_SCALE
    } else if y <= CUT_HIGH {
        (y - LIN_OFFSET) / LIN_SLOPE
    } else {
        (10.0_f64.powf((y - LOG_OFFSET_POS) / LOG_SLOPE) - 1.0) / LIN_SCALE
    };
    (x * NORM) as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &l in &[-0.5, -0.05, -0.01, 0.0, 0.01, 0.05, 0.18, 1.0, 8.0] {
            let back = decode(encode(l));
            assert!((l - back).abs() < 1e-5 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_segment_joins() {
        assert!((encode((-LIN_BREAK * NORM) as f32) as f64 - CUT_LOW).abs() < 1e-6);
        assert!((encode((LIN_BREAK * NORM) as f32) as f64 - CUT_HIGH).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored() {
        let lo = encode(-0.3) as f64 - LOG_OFFSET_NEG;
        let hi = encode(0.3) as f64 - LOG_OFFSET_POS;
        assert!((lo + hi).abs() < 1e-6);
    }
}
