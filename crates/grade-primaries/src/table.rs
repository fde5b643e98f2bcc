//! Process-wide RGB<->XYZ matrix tables.

use std::sync::LazyLock;

use glam::DMat3;
use grade_core::{Gamut, PixelColor};
use grade_math::{adapt_matrix, xy_to_xyz, Mat3, BRADFORD};

use crate::{rgb_to_xyz_matrix, Primaries, D65_XY};

#[derive(Debug, Clone, Copy)]
struct MatrixPair {
    to_xyz: Mat3,
    from_xyz: Mat3,
}

impl MatrixPair {
    const IDENTITY: Self = Self { to_xyz: Mat3::IDENTITY, from_xyz: Mat3::IDENTITY };

    fn from_dmat3(to_xyz: DMat3) -> Self {
        Self {
            to_xyz: Mat3::from_dmat3(to_xyz),
            from_xyz: Mat3::from_dmat3(to_xyz.inverse()),
        }
    }
}

type Table = [MatrixPair; Gamut::COUNT];

static DIRECT: LazyLock<Table> = LazyLock::new(|| build_table(false));
static ADAPTED: LazyLock<Table> = LazyLock::new(|| build_table(true));

fn build_table(adapted: bool) -> Table {
    let d65 = xy_to_xyz(D65_XY.0, D65_XY.1);
    Gamut::ALL.map(|gamut| match Primaries::from_gamut(gamut) {
        None => MatrixPair::IDENTITY,
        Some(p) => {
            let npm = rgb_to_xyz_matrix(&p);
            if adapted {
                let cat = adapt_matrix(BRADFORD, p.white_xyz(), d65);
                MatrixPair::from_dmat3(cat * npm)
            } else {
                MatrixPair::from_dmat3(npm)
            }
        }
    })
}

#[inline]
fn table(adapted: bool) -> &'static Table {
    if adapted { &*ADAPTED } else { &*DIRECT }
}

/// RGB -> XYZ matrix of a gamut.
///
/// With `adapted` the result is relative to D65 regardless of the gamut's
/// native white.
#[inline]
pub fn to_xyz(gamut: Gamut, adapted: bool) -> Mat3 {
    table(adapted)[gamut.index()].to_xyz
}

/// XYZ -> RGB matrix of a gamut, the inverse of [`to_xyz`] in the same table.
#[inline]
pub fn from_xyz(gamut: Gamut, adapted: bool) -> Mat3 {
    table(adapted)[gamut.index()].from_xyz
}

/// Concatenated `from_xyz(dst) * to_xyz(src)`.
///
/// Identical gamuts return an exact identity rather than the product, which
/// would carry float error.
pub fn conversion_matrix(src: Gamut, dst: Gamut, adapted: bool) -> Mat3 {
    if src == dst {
        return Mat3::IDENTITY;
    }
    from_xyz(dst, adapted) * to_xyz(src, adapted)
}

/// Converts one pixel between gamuts with two chained multiplies through XYZ.
///
/// Nothing is clamped; out-of-gamut and negative results pass through.
#[inline]
pub fn transform_rgb(rgb: PixelColor, src: Gamut, dst: Gamut, adapted: bool) -> PixelColor {
    let xyz = to_xyz(src, adapted).transform_rgb(rgb);
    from_xyz(dst, adapted).transform_rgb(xyz)
}
