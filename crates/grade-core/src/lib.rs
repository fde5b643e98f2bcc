//! # grade-core
//!
//! Core types shared by every crate of the grading pipeline.
//!
//! - [`GammaType`] - closed set of the 15 transfer curves a pixel can be encoded with
//! - [`Gamut`] - closed set of the 15 RGB primary sets (plus CIE XYZ itself)
//! - [`PixelColor`] - a single RGB triple, unbounded in both directions
//! - [`Error`], [`Result`] - configuration-time errors
//!
//! ## Crate Structure
//!
//! ```text
//! grade-core (this crate)
//!    ^
//!    |
//!    +-- grade-math (matrices, chromatic adaptation)
//!    +-- grade-transfer (curves)
//!    +-- grade-primaries (gamut matrix tables)
//!    +-- grade-ops (OOTF, tone map, saturation, zones)
//!    +-- grade-color (pipeline orchestration)
//! ```
//!
//! Per-pixel code never fails. Every error in this workspace is raised while
//! a configuration is being built, before the first pixel is evaluated.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod gamma;
pub mod gamut;
pub mod pixel;

pub use error::{Error, Result};
pub use gamma::GammaType;
pub use gamut::{Gamut, WhitePoint};
pub use pixel::{luminance_rec709, PixelColor, REC709_LUMA};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::gamma::GammaType;
    pub use crate::gamut::{Gamut, WhitePoint};
    pub use crate::pixel::{luminance_rec709, PixelColor, REC709_LUMA};
}
