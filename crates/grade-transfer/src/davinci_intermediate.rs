//! DaVinci Intermediate transfer function.
//!
//! The working log encoding of DaVinci Wide Gamut. A linear toe below
//! `LIN_CUT` joins a base-2 log segment.
//!
//! # Reference
//!
//! Blackmagic Design - DaVinci Resolve 17 Wide Gamut Intermediate

const A: f32 = 0.0075;
const B: f32 = 7.0;
const C: f32 = 0.07329248;
const M: f32 = 10.44426855;
const LIN_CUT: f32 = 0.00262409;
const LOG_CUT: f32 = 0.02740668;

/// DaVinci Intermediate encode: linear to DI.
///
/// # Example
///
/// ```rust
/// use grade_transfer::davinci_intermediate::encode;
///
/// assert!((encode(0.18) - 0.336).abs() < 1e-3);
/// ```
#[inline]
pub fn encode(linear: f32) -> f32 {
    if linear <= LIN_CUT {
        linear * M
    } else {
        C * ((linear + A).log2() + B)
    }
}

/// DaVinci Intermediate decode: DI to linear.
#[inline]
pub fn decode(log: f32) -> f32 {
    if log <= LOG_CUT {
        log / M
    } else {
        (log / C - B).exp2() - A
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        for &l in &[-0.1, 0.0, 0.001, 0.0026, 0.01, 0.18, 1.0, 100.0] {
            let back = decode(encode(l));
            assert!((l - back).abs() < 1e-4 * l.abs().max(1.0), "l={}, back={}", l, back);
        }
    }

    #[test]
    fn test_cut_continuity() {
        let lin = LIN_CUT * M;
        let log = C * ((LIN_CUT + A).log2() + B);
        assert!((lin - LOG_CUT).abs() < 1e-6);
        assert!((log - LOG_CUT).abs() < 1e-6);
    }
}
