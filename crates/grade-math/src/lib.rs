//! # grade-math
//!
//! Math primitives for per-pixel color transforms:
//!
//! - [`Mat3`] - 3x3 matrices applied to RGB/XYZ triplets
//! - Chromatic adaptation ([`adapt_matrix`], [`BRADFORD`])
//!
//! # Design
//!
//! Runtime math is `f32`, matching the precision of the pixels it touches.
//! Matrix *derivation* (primaries to XYZ, white point adaptation) happens
//! once per process and runs in `f64` through [`glam::DMat3`]; results are
//! narrowed with [`Mat3::from_dmat3`].
//!
//! All matrices are **row-major** and multiply **column vectors**:
//!
//! ```text
//! result = matrix * vector
//! ```
//!
//! # Usage
//!
//! ```rust
//! use grade_math::Mat3;
//!
//! let rgb_to_xyz = Mat3::from_rows([
//!     [0.4124564, 0.3575761, 0.1804375],
//!     [0.2126729, 0.7151522, 0.0721750],
//!     [0.0193339, 0.1191920, 0.9503041],
//! ]);
//!
//! let xyz = rgb_to_xyz.transform_rgb([1.0, 0.5, 0.25]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod adapt;
mod mat3;

pub use adapt::*;
pub use mat3::*;

/// Re-export of the double-precision glam types used for derivation.
pub use glam::{DMat3, DVec3};
