//! # grade-transfer
//!
//! Transfer curves for the grading pipeline: the 15 encodings named by
//! [`GammaType`], each as a pair of pure `f32 -> f32` functions.
//!
//! Every curve is total over all reals. Log curves carry a linear toe (or a
//! tangent extension) so superblacks survive; power segments use
//! [`signed_pow`] so negative values keep their sign.
//!
//! # Supported Curves
//!
//! | Module | Curves | Notes |
//! |--------|--------|-------|
//! | [`acescc`] | ACEScc | Clamps at 2^-16, decode ceiling 65504 |
//! | [`acescct`] | ACEScct | Linear toe, decode ceiling 65504 |
//! | [`log_c3`] | ARRI LogC3 (EI 800) | |
//! | [`log_c4`] | ARRI LogC4 | |
//! | [`s_log3`] | Sony S-Log3 | |
//! | [`v_log`] | Panasonic V-Log | |
//! | [`red_log`] | RED Log3G10 | Tangent extension below -0.01 |
//! | [`canon_log`] | Canon Log 3 | |
//! | [`davinci_intermediate`] | DaVinci Intermediate | |
//! | [`gamma`] | Gamma 2.2 / 2.4 / 2.6 | Signed power |
//! | [`rec709`] | BT.709 | Mirrored power segment |
//! | [`srgb`] | sRGB | Mirrored power segment |
//!
//! # Usage
//!
//! ```rust
//! use grade_core::GammaType;
//! use grade_transfer::{decode, encode};
//!
//! let log = encode(0.18, GammaType::AcesCct);
//! let lin = decode(log, GammaType::AcesCct);
//! assert!((lin - 0.18).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`grade-core`] - `GammaType`
//!
//! # Used By
//!
//! - `grade-ops` - OOTF emulation, zone classification
//! - `grade-color` - Pixel pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod acescc;
pub mod acescct;
pub mod canon_log;
pub mod davinci_intermediate;
pub mod gamma;
pub mod log_c3;
pub mod log_c4;
pub mod rec709;
pub mod red_log;
pub mod s_log3;
pub mod srgb;
pub mod v_log;

mod curve;

pub use curve::{decode, decode_rgb, decoder, encode, encode_rgb, encoder, middle_gray, TransferFn};
pub use gamma::signed_pow;
pub use grade_core::GammaType;

/// Largest finite half-float value, the decode ceiling of the ACES log curves.
pub const HALF_MAX: f32 = 65504.0;
