//! # grade-ops
//!
//! Photometric operators applied between decode and encode in the grading
//! pipeline. All of them are pure per-pixel functions with no state.
//!
//! # Modules
//!
//! - [`ootf`] - display/scene OOTF emulation by mismatched curve round trips
//! - [`tonemap`] - rational highlight roll-off between two white levels
//! - [`saturation`] - chroma compression toward the max channel
//! - [`zones`] - exposure zone classification, palette and reference chart
//!
//! # Example
//!
//! ```rust
//! use grade_ops::{ootf, SaturationParams, ToneMapParams};
//!
//! let tm = ToneMapParams::new(1000.0, 100.0).unwrap();
//! let sat = SaturationParams::new(2.0, 0.8).unwrap();
//!
//! let rgb = ootf::apply_inverse([0.4, 0.2, 0.1]);
//! let rgb = tm.apply(rgb);
//! let rgb = sat.apply(rgb);
//! assert!(rgb.iter().all(|c| c.is_finite()));
//! ```
//!
//! # Dependencies
//!
//! - [`grade-core`] - `PixelColor`, `Error`
//! - [`grade-transfer`] - curves used by the OOTF and the classifier
//!
//! # Used By
//!
//! - `grade-color` - Pixel pipeline

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod ootf;
pub mod saturation;
pub mod tonemap;
pub mod zones;

pub use saturation::SaturationParams;
pub use tonemap::{ToneCurve, ToneMapParams};
