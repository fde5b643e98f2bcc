//! Panasonic V-Log.
//!
//! A straight segment lifts black to code 0.125; from 1% linear upward the
//! curve is logarithmic.
//!
//! Reference: Panasonic, "V-Log/V-Gamut Reference Manual".

const TOE_END: f32 = 0.01;
const TOE_SLOPE: f32 = 5.6;
const BLACK: f32 = 0.125;

const B: f32 = 0.00873;
const C: f32 = 0.241514;
const D: f32 = 0.598206;

/// Code value where the toe hands over to the log segment.
const CODE_TOE_END: f32 = 0.181;

/// Linear to V-Log.
///
/// ```rust
/// assert!((grade_transfer::v_log::encode(0.18) - 0.423).abs() < 0.01);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    match linear {
        x if x >= TOE_END => C * (x + B).log10() + D,
        x => TOE_SLOPE * x + BLACK,
    }
}

/// V-Log to linear.
#[inline]
pub fn decode(code: f32) -> f32 {
    match code {
        y if y >= CODE_TOE_END => 10f32.powf((y - D) / C) - B,
        y => (y - BLACK) / TOE_SLOPE,
    }
}
