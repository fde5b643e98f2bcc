//! Sony S-Log3 transfer function.
//!
//! S-Log3 is defined on 10-bit code values: 18% grey sits at code 420 and
//! black at code 95. Below `CUT` a straight segment runs from black to the
//! start of the log segment at code 171.21.
//!
//! # Reference
//!
//! Sony S-Log3 Technical Summary

const CUT: f32 = 0.01125;
const CODE_BLACK: f32 = 95.0;
const CODE_GRAY: f32 = 420.0;
const CODE_CUT: f32 = 171.2102946929;
const LOG_SLOPE: f32 = 261.5;
const CODE_MAX: f32 = 1023.0;

/// S-Log3 encode: linear to S-Log3.
///
/// # Example
///
/// ```rust
/// use grade_transfer::s_log3::encode;
///
/// assert!((encode(0.18) - 420.0 / 1023.0).abs() < 1e-5);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear >= CUT {
        // 0.19 = 0.18 + 0.01, so 18% gray lands on code 420
        (CODE_GRAY + LOG_SLOPE * ((linear + 0.01) / 0.19).log10()) / CODE_MAX
    } else {
        (linear * (CODE_CUT - CODE_BLACK) / CUT + CODE_BLACK) / CODE_MAX
    }
}

/// S-Log3 decode: S-Log3 to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    let code = log * CODE_MAX;
    if code >= CODE_CUT {
        10.0_f32.powf((code - CODE_GRAY) / LOG_SLOPE) * 0.19 - 0.01
    } else {
        (code - CODE_BLACK) * CUT / (CODE_CUT - CODE_BLACK)
    }
}
