//! Chromatic adaptation transforms (CAT).
//!
//! Gamuts defined against different reference whites only agree on what
//! "neutral" means after their XYZ values are adapted to a common white.
//! The adapted matrix table in `grade-primaries` uses [`adapt_matrix`] with
//! [`BRADFORD`] to bring every gamut to D65.
//!
//! Everything here is `f64`; it runs once while the matrix tables are built.
//!
//! # Usage
//!
//! ```rust
//! use grade_math::{adapt_matrix, xy_to_xyz, BRADFORD};
//!
//! let d60 = xy_to_xyz(0.32168, 0.33767);
//! let d65 = xy_to_xyz(0.31270, 0.32900);
//! let m = adapt_matrix(BRADFORD, d60, d65);
//!
//! let white = m * d60;
//! assert!((white - d65).abs().max_element() < 1e-9);
//! ```

use glam::{DMat3, DVec3};

/// Bradford cone response matrix (column-major).
///
/// # Reference
///
/// Lam, K.M. (1985). Metamerism and Colour Constancy.
pub const BRADFORD: DMat3 = DMat3::from_cols(
    DVec3::new(0.8951, -0.7502, 0.0389),
    DVec3::new(0.2664, 1.7135, -0.0685),
    DVec3::new(-0.1614, 0.0367, 1.0296),
);

/// CAT02 cone response matrix (column-major), from CIECAM02.
pub const CAT02: DMat3 = DMat3::from_cols(
    DVec3::new(0.7328, -0.7036, 0.0030),
    DVec3::new(0.4296, 1.6975, 0.0136),
    DVec3::new(-0.1624, 0.0061, 0.9834),
);

/// Converts xy chromaticity to XYZ with Y = 1.
///
/// A zero `y` (degenerate chromaticity) yields the zero vector.
#[inline]
pub fn xy_to_xyz(x: f64, y: f64) -> DVec3 {
    if y.abs() < 1e-12 {
        DVec3::ZERO
    } else {
        DVec3::new(x / y, 1.0, (1.0 - x - y) / y)
    }
}

/// Computes a von Kries style adaptation matrix between two white points.
///
/// The result maps XYZ relative to `src_white` onto XYZ relative to
/// `dst_white`: `M^-1 * diag(dst_cone / src_cone) * M`.
pub fn adapt_matrix(method: DMat3, src_white: DVec3, dst_white: DVec3) -> DMat3 {
    let src_cone = method * src_white;
    let dst_cone = method * dst_white;
    let scale = DMat3::from_diagonal(dst_cone / src_cone);
    method.inverse() * scale * method
}
