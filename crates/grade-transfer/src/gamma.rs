//! Pure power-law gammas.
//!
//! Gamma 2.2, 2.4 (BT.1886 with zero black) and 2.6 (DCI). All three are
//! applied with [`signed_pow`] so negative values keep their sign instead
//! of producing NaN.

/// Raises `|base|` to `exponent` and reattaches the sign of `base`.
///
/// # Example
///
/// ```rust
/// use grade_transfer::signed_pow;
///
/// assert_eq!(signed_pow(-4.0, 0.5), -2.0);
/// assert_eq!(signed_pow(0.0, 2.4), 0.0);
/// ```
#[inline]
pub fn signed_pow(base: f32, exponent: f32) -> f32 {
    if base < 0.0 {
        -(-base).powf(exponent)
    } else {
        base.powf(exponent)
    }
}

/// Gamma 2.2 decode.
#[inline]
pub fn decode_22(v: f32) -> f32 {
    signed_pow(v, 2.2)
}

/// Gamma 2.2 encode.
#[inline]
pub fn encode_22(l: f32) -> f32 {
    signed_pow(l, 1.0 / 2.2)
}

/// Gamma 2.4 decode.
#[inline]
pub fn decode_24(v: f32) -> f32 {
    signed_pow(v, 2.4)
}

/// Gamma 2.4 encode.
#[inline]
pub fn encode_24(l: f32) -> f32 {
    signed_pow(l, 1.0 / 2.4)
}

/// Gamma 2.6 decode.
#[inline]
pub fn decode_26(v: f32) -> f32 {
    signed_pow(v, 2.6)
}

/// Gamma 2.6 encode.
#[inline]
pub fn encode_26(l: f32) -> f32 {
    signed_pow(l, 1.0 / 2.6)
}
