//! Single-precision gamut matrices.
//!
//! [`Mat3`] holds nine `f32` coefficients laid out row by row. A pixel is
//! treated as a column, so the red output is the dot product of row 0 with
//! the input:
//!
//! ```text
//! r' = m[0][0]*r + m[0][1]*g + m[0][2]*b
//! ```
//!
//! glam stores its matrices by column, so crossing between the two goes
//! through [`Mat3::from_dmat3`] and [`Mat3::to_dmat3`].

use std::ops::Mul;

use glam::DMat3;

/// Row-major 3x3 matrix applied to RGB or XYZ triplets.
///
/// ```rust
/// use grade_math::Mat3;
///
/// let scale = Mat3::from_rows([[2.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 0.5]]);
/// assert_eq!(scale.transform_rgb([1.0, 1.0, 1.0]), [2.0, 1.0, 0.5]);
/// assert_eq!(Mat3::IDENTITY * scale, scale);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    rows: [[f32; 3]; 3],
}

impl Mat3 {
    /// The matrix that leaves every triplet untouched.
    pub const IDENTITY: Self = Self::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    /// Builds a matrix from its three rows.
    #[inline]
    pub const fn from_rows(rows: [[f32; 3]; 3]) -> Self {
        Self { rows }
    }

    /// The coefficients, row by row.
    #[inline]
    pub const fn rows(&self) -> [[f32; 3]; 3] {
        self.rows
    }

    /// Applies the matrix to one triplet.
    #[inline]
    pub fn transform_rgb(&self, [r, g, b]: [f32; 3]) -> [f32; 3] {
        self.rows.map(|[a, c, d]| a * r + c * g + d * b)
    }

    /// Inverts through `f64`. Singular input gives `None`.
    pub fn inverse(&self) -> Option<Self> {
        let wide = self.to_dmat3();
        (wide.determinant().abs() >= 1e-12).then(|| Self::from_dmat3(wide.inverse()))
    }

    /// False if any coefficient is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.rows.as_flattened().iter().all(|v| v.is_finite())
    }

    /// Largest coefficient-wise distance to `other`.
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        let lhs = self.rows.as_flattened();
        let rhs = other.rows.as_flattened();
        lhs.iter().zip(rhs).fold(0.0, |acc, (a, b)| acc.max((a - b).abs()))
    }

    /// Narrows a glam matrix. Row `i` of the result is `m.row(i)`.
    pub fn from_dmat3(m: DMat3) -> Self {
        Self::from_rows([0, 1, 2].map(|i| m.row(i).as_vec3().to_array()))
    }

    /// Widens to a glam matrix with the same meaning.
    pub fn to_dmat3(&self) -> DMat3 {
        let [r0, r1, r2] = self.rows.map(|row| row.map(f64::from));
        DMat3::from_cols_array_2d(&[r0, r1, r2]).transpose()
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// `a * b` applies `b` first.
impl Mul for Mat3 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let cols = [0, 1, 2].map(|j| rhs.rows.map(|row| row[j]));
        Self::from_rows(self.rows.map(|row| {
            cols.map(|col| row[0] * col[0] + row[1] * col[1] + row[2] * col[2])
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKEW: Mat3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);

    #[test]
    fn test_identity_passes_through() {
        let rgb = [0.25, -1.5, 8.0];
        assert_eq!(Mat3::IDENTITY.transform_rgb(rgb), rgb);
        assert_eq!(Mat3::default(), Mat3::IDENTITY);
    }

    #[test]
    fn test_rows_act_on_columns() {
        assert_eq!(SKEW.transform_rgb([1.0, 0.0, 0.0]), [1.0, 0.0, 5.0]);
        assert_eq!(SKEW.transform_rgb([0.0, 0.0, 1.0]), [3.0, 4.0, 0.0]);
    }

    #[test]
    fn test_inverse() {
        let inv = SKEW.inverse().unwrap();
        assert!((SKEW * inv).max_abs_diff(&Mat3::IDENTITY) < 1e-5);
        assert!((inv * SKEW).max_abs_diff(&Mat3::IDENTITY) < 1e-5);
    }

    #[test]
    fn test_singular_has_no_inverse() {
        let flat = Mat3::from_rows([[1.0, 2.0, 3.0], [2.0, 4.0, 6.0], [1.0, 1.0, 1.0]]);
        assert!(flat.inverse().is_none());
    }

    #[test]
    fn test_product_order() {
        let rgb = [0.1, 0.2, 0.3];
        let swap = Mat3::from_rows([[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
        let chained = SKEW.transform_rgb(swap.transform_rgb(rgb));
        let once = (SKEW * swap).transform_rgb(rgb);
        for (a, b) in chained.iter().zip(once) {
            assert!((a - b).abs() < 1e-6);
        }
    }

    #[test]
    fn test_glam_layout() {
        assert_eq!(Mat3::from_dmat3(SKEW.to_dmat3()), SKEW);
        let col = SKEW.to_dmat3() * glam::DVec3::X;
        assert_eq!(col.to_array(), [1.0, 0.0, 5.0]);
    }

    #[test]
    fn test_finite() {
        assert!(SKEW.is_finite());
        assert!(!Mat3::from_rows([[f32::NAN, 0.0, 0.0], [0.0; 3], [0.0; 3]]).is_finite());
    }
}
