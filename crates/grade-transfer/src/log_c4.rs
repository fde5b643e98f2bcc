//! ARRI LogC4 transfer function.
//!
//! LogC4 is the encoding introduced with ALEXA 35. It uses a base-2 log and
//! a single curve for every exposure index. Below `LIN_SIDE_BREAK` the curve
//! continues as a straight line tangent to the log segment, which gives
//! value and slope continuity at the knee.
//!
//! # Reference
//!
//! ARRI LogC4 Specification

use std::sync::LazyLock;

const LIN_SIDE_SLOPE: f64 = 2231.82630906769;
const LIN_SIDE_OFFSET: f64 = 64.0;
const LOG_SIDE_SLOPE: f64 = 0.0647954196341293;
const LOG_SIDE_OFFSET: f64 = -0.295908392682586;
const LIN_SIDE_BREAK: f64 = -0.0180569961199113;

/// Straight-line continuation below the knee.
struct Toe {
    slope: f64,
    offset: f64,
    log_break: f64,
}

static TOE: LazyLock<Toe> = LazyLock::new(|| {
    let lin_at_break = LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET;
    let log_break = LOG_SIDE_SLOPE * lin_at_break.log2() + LOG_SIDE_OFFSET;
    let slope = LOG_SIDE_SLOPE * LIN_SIDE_SLOPE / (lin_at_break * std::f64::consts::LN_2);
    Toe {
        slope,
        offset: log_break - slope * LIN_SIDE_BREAK,
        log_break,
    }
});

/// LogC4 encode: linear to LogC4.
///
/// # Example
///
/// ```rust
/// use grade_transfer::log_c4;
///
/// assert!((log_c4::encode(0.18) - 0.278).abs() < 0.001);
/// assert!((log_c4::encode(0.0) - 0.092).abs() < 0.001);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64;
    let out = if x >= LIN_SIDE_BREAK {
        LOG_SIDE_SLOPE * (LIN_SIDE_SLOPE * x + LIN_SIDE_OFFSET).log2() + LOG_SIDE_OFFSET
    } else {
        TOE.slope * x + TOE.offset
    };
    out as f32
}

/// LogC4 decode: LogC4 to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;
    let out = if y >= TOE.log_break {
        (((y - LOG_SIDE_OFFSET) / LOG_SIDE_SLOPE).exp2() - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE
    } else {
        (y - TOE.offset) / TOE.slope
    };
    out as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &l in &[-0.05, -0.018, -0.001, 0.0, 0.18, 1.0, 10.0, 100.0] {
            let back = decode(encode(l));
            assert!((l - back).abs() < 1e-5 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_toe_is_tangent() {
        let log_seg = |x: f64| {
            LOG_SIDE_SLOPE * (LIN_SIDE_SLOPE * x + LIN_SIDE_OFFSET).log2() + LOG_SIDE_OFFSET
        };
        let at_break = TOE.slope * LIN_SIDE_BREAK + TOE.offset;
        assert!((at_break - log_seg(LIN_SIDE_BREAK)).abs() < 1e-12);

        let h = 1e-7;
        let log_slope = (log_seg(LIN_SIDE_BREAK + h) - log_seg(LIN_SIDE_BREAK - h)) / (2.0 * h);
        assert!((log_slope - TOE.slope).abs() < 1e-5 * TOE.slope);
    }
}
