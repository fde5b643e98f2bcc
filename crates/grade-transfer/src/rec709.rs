//! ITU-R BT.709 camera transfer function.
//!
//! The scene-referred video gamma: a 4.5 linear toe joined to a 0.45 power
//! segment. The power segment is mirrored around zero so that negative
//! values invert cleanly.
//!
//! # Reference
//!
//! ITU-R BT.709-6, Item 1.2

const ALPHA: f32 = 1.099;
const BETA: f32 = 0.018;
const GAMMA: f32 = 0.45;
const TOE: f32 = 4.5;

/// Encoded value at the toe break (`TOE * BETA`).
const V_BREAK: f32 = 0.081;

/// BT.709 encode (OETF): linear to video.
///
/// # Example
///
/// ```rust
/// use grade_transfer::rec709::encode;
///
/// assert!((encode(0.18) - 0.409).abs() < 1e-3);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    let mag = linear.abs();
    let v = if mag < BETA {
        TOE * mag
    } else {
        ALPHA * mag.powf(GAMMA) - (ALPHA - 1.0)
    };
    v.copysign(linear)
}

/// BT.709 decode (inverse OETF): video to linear.
#[inline]
pub fn decode(v: f32) -> f32 {
    let mag = v.abs();
    let l = if mag < V_BREAK {
        mag / TOE
    } else {
        ((mag + (ALPHA - 1.0)) / ALPHA).powf(1.0 / GAMMA)
    };
    l.copysign(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &l in &[-1.0, -0.01, 0.0, 0.01, 0.018, 0.18, 1.0, 5.0] {
            let back = decode(encode(l));
            assert!((back - l).abs() < 1e-5 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_white() {
        assert!((encode(1.0) - 1.0).abs() < 1e-6);
        assert!((decode(1.0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_mirrored() {
        assert_eq!(encode(-0.5), -encode(0.5));
    }
}
