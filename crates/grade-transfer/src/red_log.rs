//! RED Log3G10 transfer function.
//!
//! Log3G10 maps 18% grey to one third of the signal range and gives ten
//! stops above grey before reaching 1.0. Values below `LIN_SIDE_BREAK`
//! continue on the tangent line of the log segment.
//!
//! # Reference
//!
//! RED Digital Cinema - REDWideGamutRGB and Log3G10 white paper

const LIN_SIDE_SLOPE: f64 = 155.975327;
const LIN_SIDE_OFFSET: f64 = 0.01 * LIN_SIDE_SLOPE + 1.0;
const LOG_SIDE_SLOPE: f64 = 0.224282;
const LIN_SIDE_BREAK: f64 = -0.01;

#[inline]
fn log_segment(x: f64) -> f64 {
    LOG_SIDE_SLOPE * (LIN_SIDE_SLOPE * x + LIN_SIDE_OFFSET).log10()
}

/// (value, slope) of the log segment at the break.
#[inline]
fn break_tangent() -> (f64, f64) {
    let at_break = LIN_SIDE_SLOPE * LIN_SIDE_BREAK + LIN_SIDE_OFFSET;
    let value = LOG_SIDE_SLOPE * at_break.log10();
    let slope = LOG_SIDE_SLOPE * LIN_SIDE_SLOPE / (at_break * std::f64::consts::LN_10);
    (value, slope)
}

/// Log3G10 encode: linear to Log3G10.
///
/// # Example
///
/// ```rust
/// use grade_transfer::red_log::encode;
///
/// assert!((encode(0.18) - 1.0 / 3.0).abs() < 1e-3);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let x = linear as f64;
    if x >= LIN_SIDE_BREAK {
        log_segment(x) as f32
    } else {
        let (value, slope) = break_tangent();
        (value + slope * (x - LIN_SIDE_BREAK)) as f32
    }
}

/// Log3G10 decode: Log3G10 to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    let y = log as f64;
    let (value, slope) = break_tangent();
    if y >= value {
        ((10.0_f64.powf(y / LOG_SIDE_SLOPE) - LIN_SIDE_OFFSET) / LIN_SIDE_SLOPE) as f32
    } else {
        (LIN_SIDE_BREAK + (y - value) / slope) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &l in &[-0.1, -0.01, -0.005, 0.0, 0.01, 0.18, 1.0, 2.0, 100.0] {
            let back = decode(encode(l));
            assert!((l - back).abs() < 1e-5 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_break_at_origin() {
        assert!(encode(-0.01).abs() < 1e-7);
        assert!(encode(0.0) > 0.0);
    }

    #[test]
    fn test_ten_stops_over_grey() {
        assert!((encode(0.18 * 1024.0) - 1.0).abs() < 0.01);
    }
}
