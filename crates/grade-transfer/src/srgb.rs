//! sRGB transfer function.
//!
//! The display-referred video curve: a 12.92 linear segment near black and a
//! 2.4 power segment above it. As with [`crate::rec709`] the power segment is
//! mirrored around zero.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

const LIN_CUT: f32 = 0.0031308;
const ENC_CUT: f32 = 0.04045;

/// sRGB decode (EOTF): encoded sRGB to linear.
///
/// # Formula
///
/// ```text
/// if |V| <= 0.04045:
///     L = V / 12.92
/// else:
///     L = sign(V) * ((|V| + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use grade_transfer::srgb::decode;
///
/// assert!((decode(0.5) - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn decode(v: f32) -> f32 {
    let mag = v.abs();
    let l = if mag <= ENC_CUT {
        mag / 12.92
    } else {
        ((mag + 0.055) / 1.055).powf(2.4)
    };
    l.copysign(v)
}

/// sRGB encode (inverse EOTF): linear to encoded sRGB.
#[inline]
pub fn encode(l: f32) -> f32 {
    let mag = l.abs();
    let v = if mag <= LIN_CUT {
        mag * 12.92
    } else {
        1.055 * mag.powf(1.0 / 2.4) - 0.055
    };
    v.copysign(l)
}
