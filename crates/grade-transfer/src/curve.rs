//! Enum dispatch from [`GammaType`] to the curve modules.

use grade_core::{GammaType, PixelColor};

use crate::{
    acescc, acescct, canon_log, davinci_intermediate, gamma, log_c3, log_c4, rec709, red_log,
    s_log3, srgb, v_log,
};

/// A single-channel transfer function.
pub type TransferFn = fn(f32) -> f32;

#[inline]
fn identity(v: f32) -> f32 {
    v
}

/// Returns the decode (encoded -> linear) function for a curve.
///
/// Resolve this once per frame and call the returned pointer per pixel to
/// avoid re-matching.
pub fn decoder(curve: GammaType) -> TransferFn {
    match curve {
        GammaType::AcesCc => acescc::decode,
        GammaType::AcesCct => acescct::decode,
        GammaType::ArriLogC3 => log_c3::decode,
        GammaType::ArriLogC4 => log_c4::decode,
        GammaType::SonySLog3 => s_log3::decode,
        GammaType::PanasonicVLog => v_log::decode,
        GammaType::RedLog3G10 => red_log::decode,
        GammaType::CanonLog3 => canon_log::decode,
        GammaType::DavinciIntermediate => davinci_intermediate::decode,
        GammaType::Gamma22 => gamma::decode_22,
        GammaType::Gamma24 => gamma::decode_24,
        GammaType::Gamma26 => gamma::decode_26,
        GammaType::Linear => identity,
        GammaType::Rec709 => rec709::decode,
        GammaType::Srgb => srgb::decode,
    }
}

/// Returns the encode (linear -> encoded) function for a curve.
pub fn encoder(curve: GammaType) -> TransferFn {
    match curve {
        GammaType::AcesCc => acescc::encode,
        GammaType::AcesCct => acescct::encode,
        GammaType::ArriLogC3 => log_c3::encode,
        GammaType::ArriLogC4 => log_c4::encode,
        GammaType::SonySLog3 => s_log3::encode,
        GammaType::PanasonicVLog => v_log::encode,
        GammaType::RedLog3G10 => red_log::encode,
        GammaType::CanonLog3 => canon_log::encode,
        GammaType::DavinciIntermediate => davinci_intermediate::encode,
        GammaType::Gamma22 => gamma::encode_22,
        GammaType::Gamma24 => gamma::encode_24,
        GammaType::Gamma26 => gamma::encode_26,
        GammaType::Linear => identity,
        GammaType::Rec709 => rec709::encode,
        GammaType::Srgb => srgb::encode,
    }
}

/// Decodes an encoded value to linear light.
#[inline]
pub fn decode(value: f32, curve: GammaType) -> f32 {
    decoder(curve)(value)
}

/// Encodes a linear value with the given curve.
#[inline]
pub fn encode(linear: f32, curve: GammaType) -> f32 {
    encoder(curve)(linear)
}

/// Decodes each channel of an RGB triple.
#[inline]
pub fn decode_rgb(rgb: PixelColor, curve: GammaType) -> PixelColor {
    let f = decoder(curve);
    [f(rgb[0]), f(rgb[1]), f(rgb[2])]
}

/// Encodes each channel of an RGB triple.
#[inline]
pub fn encode_rgb(rgb: PixelColor, curve: GammaType) -> PixelColor {
    let f = encoder(curve);
    [f(rgb[0]), f(rgb[1]), f(rgb[2])]
}

/// Encoded value of 18% grey.
pub fn middle_gray(curve: GammaType) -> f32 {
    encode(0.18, curve)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_is_identity() {
        for &v in &[-3.0, 0.0, 0.5, 1e6] {
            assert_eq!(decode(v, GammaType::Linear), v);
            assert_eq!(encode(v, GammaType::Linear), v);
        }
    }

    #[test]
    fn test_dispatch_matches_modules() {
        assert_eq!(encode(0.18, GammaType::SonySLog3), s_log3::encode(0.18));
        assert_eq!(decode(0.4, GammaType::CanonLog3), canon_log::decode(0.4));
        assert_eq!(decode(0.5, GammaType::Gamma26), gamma::decode_26(0.5));
    }

    #[test]
    fn test_middle_gray_ordering() {
        assert!(middle_gray(GammaType::ArriLogC3) > 0.35);
        assert!((middle_gray(GammaType::RedLog3G10) - 1.0 / 3.0).abs() < 1e-3);
        assert!((middle_gray(GammaType::Linear) - 0.18).abs() < 1e-7);
    }

    #[test]
    fn test_rgb_helpers() {
        let rgb = [0.1, 0.18, 0.9];
        let enc = encode_rgb(rgb, GammaType::Srgb);
        let back = decode_rgb(enc, GammaType::Srgb);
        for c in 0..3 {
            assert!((back[c] - rgb[c]).abs() < 1e-6);
        }
    }
}
