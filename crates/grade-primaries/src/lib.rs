//! # grade-primaries
//!
//! Chromaticities of the grading gamuts and the RGB<->XYZ matrices derived
//! from them.
//!
//! Two complete matrix tables are kept, indexed by [`Gamut`]:
//!
//! - **direct**: each gamut relative to its own native white, no adaptation
//! - **adapted**: each `to_xyz` followed by a Bradford transform from the
//!   native white to D65, so gamuts with different whites meet at the same
//!   neutral in XYZ
//!
//! Both tables are derived once in double precision and shared read-only
//! for the life of the process.
//!
//! # Usage
//!
//! ```rust
//! use grade_core::Gamut;
//! use grade_primaries::{conversion_matrix, transform_rgb};
//!
//! let m = conversion_matrix(Gamut::Rec709, Gamut::Rec2020, false);
//! let rgb = transform_rgb([1.0, 0.0, 0.0], Gamut::Rec709, Gamut::Rec2020, false);
//! assert!((rgb[0] - 0.6274).abs() < 1e-3);
//! assert_eq!(m.transform_rgb([1.0, 0.0, 0.0]), rgb);
//! ```
//!
//! # Dependencies
//!
//! - [`grade-core`] - `Gamut`, `WhitePoint`
//! - [`grade-math`] - `Mat3`, Bradford adaptation
//! - [`glam`] - double precision derivation
//!
//! # Used By
//!
//! - `grade-color` - Pixel pipeline matrix step

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod table;

use glam::{DMat3, DVec3};
use grade_core::{Gamut, WhitePoint};
use grade_math::xy_to_xyz;

pub use table::{conversion_matrix, from_xyz, to_xyz, transform_rgb};

/// RGB primaries and native white as CIE xy chromaticities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primaries {
    /// Red primary (x, y)
    pub r: (f64, f64),
    /// Green primary (x, y)
    pub g: (f64, f64),
    /// Blue primary (x, y)
    pub b: (f64, f64),
    /// White point (x, y)
    pub w: (f64, f64),
    /// Display name
    pub name: &'static str,
}

impl Primaries {
    /// Primaries of a gamut, or `None` for [`Gamut::Xyz`] which has none.
    pub const fn from_gamut(gamut: Gamut) -> Option<Self> {
        Some(match gamut {
            Gamut::AcesAp0 => ACES_AP0,
            Gamut::AcesAp1 => ACES_AP1,
            Gamut::DavinciWideGamut => DAVINCI_WIDE_GAMUT,
            Gamut::ArriWideGamut3 => ARRI_WIDE_GAMUT_3,
            Gamut::ArriWideGamut4 => ARRI_WIDE_GAMUT_4,
            Gamut::SGamut3 => S_GAMUT3,
            Gamut::SGamut3Cine => S_GAMUT3_CINE,
            Gamut::VGamut => V_GAMUT,
            Gamut::RedWideGamutRgb => RED_WIDE_GAMUT_RGB,
            Gamut::P3Dci => P3_DCI,
            Gamut::P3D60 => P3_D60,
            Gamut::P3D65 => P3_D65,
            Gamut::Rec709 => REC709,
            Gamut::Rec2020 => REC2020,
            Gamut::Xyz => return None,
        })
    }

    /// White point as XYZ (Y = 1).
    #[inline]
    pub fn white_xyz(&self) -> DVec3 {
        xy_to_xyz(self.w.0, self.w.1)
    }
}

// ============================================================================
// White Points
// ============================================================================

/// D65 white point chromaticity.
pub const D65_XY: (f64, f64) = (0.31270, 0.32900);

/// ACES white point chromaticity (~D60).
pub const D60_XY: (f64, f64) = (0.32168, 0.33767);

/// DCI theatrical white point chromaticity.
pub const DCI_XY: (f64, f64) = (0.31400, 0.35100);

/// Equal-energy white point chromaticity.
pub const E_XY: (f64, f64) = (1.0 / 3.0, 1.0 / 3.0);

/// Chromaticity of a white point label.
pub const fn white_xy(wp: WhitePoint) -> (f64, f64) {
    match wp {
        WhitePoint::D65 => D65_XY,
        WhitePoint::D60 => D60_XY,
        WhitePoint::Dci => DCI_XY,
        WhitePoint::E => E_XY,
    }
}

// ============================================================================
// Gamut Primaries
// ============================================================================

/// ACES AP0 primaries (ACES 2065-1).
pub const ACES_AP0: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.0000, 1.0000),
    b: (0.0001, -0.0770),
    w: D60_XY,
    name: "ACES AP0",
};

/// ACES AP1 primaries (ACEScg, ACEScct, ACEScc).
pub const ACES_AP1: Primaries = Primaries {
    r: (0.7130, 0.2930),
    g: (0.1650, 0.8300),
    b: (0.1280, 0.0440),
    w: D60_XY,
    name: "ACES AP1",
};

/// DaVinci Wide Gamut primaries.
pub const DAVINCI_WIDE_GAMUT: Primaries = Primaries {
    r: (0.8000, 0.3130),
    g: (0.1682, 0.9877),
    b: (0.0790, -0.1155),
    w: D65_XY,
    name: "DaVinci Wide Gamut",
};

/// ARRI Wide Gamut 3 primaries.
pub const ARRI_WIDE_GAMUT_3: Primaries = Primaries {
    r: (0.6840, 0.3130),
    g: (0.2210, 0.8480),
    b: (0.0861, -0.1020),
    w: D65_XY,
    name: "ARRI Wide Gamut 3",
};

/// ARRI Wide Gamut 4 primaries.
pub const ARRI_WIDE_GAMUT_4: Primaries = Primaries {
    r: (0.7347, 0.2653),
    g: (0.1424, 0.8576),
    b: (0.0991, -0.0308),
    w: D65_XY,
    name: "ARRI Wide Gamut 4",
};

/// Sony S-Gamut3 primaries.
pub const S_GAMUT3: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1400, 0.8550),
    b: (0.1000, -0.0500),
    w: D65_XY,
    name: "S-Gamut3",
};

/// Sony S-Gamut3.Cine primaries.
pub const S_GAMUT3_CINE: Primaries = Primaries {
    r: (0.7660, 0.2750),
    g: (0.2250, 0.8000),
    b: (0.0890, -0.0870),
    w: D65_XY,
    name: "S-Gamut3.Cine",
};

/// Panasonic V-Gamut primaries.
pub const V_GAMUT: Primaries = Primaries {
    r: (0.7300, 0.2800),
    g: (0.1650, 0.8400),
    b: (0.1000, -0.0300),
    w: D65_XY,
    name: "V-Gamut",
};

/// RED Wide Gamut RGB primaries.
pub const RED_WIDE_GAMUT_RGB: Primaries = Primaries {
    r: (0.780308, 0.304253),
    g: (0.121595, 1.493994),
    b: (0.095612, -0.084589),
    w: D65_XY,
    name: "RED Wide Gamut RGB",
};

/// DCI-P3 primaries with the DCI white.
pub const P3_DCI: Primaries = Primaries {
    r: (0.6800, 0.3200),
    g: (0.2650, 0.6900),
    b: (0.1500, 0.0600),
    w: DCI_XY,
    name: "P3-DCI",
};

/// P3 primaries with the ACES white.
pub const P3_D60: Primaries = Primaries { w: D60_XY, name: "P3-D60", ..P3_DCI };

/// P3 primaries with D65 white (Display P3).
pub const P3_D65: Primaries = Primaries { w: D65_XY, name: "P3-D65", ..P3_DCI };

/// Rec.709 / sRGB primaries.
pub const REC709: Primaries = Primaries {
    r: (0.6400, 0.3300),
    g: (0.3000, 0.6000),
    b: (0.1500, 0.0600),
    w: D65_XY,
    name: "Rec.709",
};

/// Rec.2020 primaries.
pub const REC2020: Primaries = Primaries {
    r: (0.7080, 0.2920),
    g: (0.1700, 0.7970),
    b: (0.1310, 0.0460),
    w: D65_XY,
    name: "Rec.2020",
};

// ============================================================================
// Matrix Generation
// ============================================================================

/// Computes the normalized primary matrix (RGB -> XYZ) for a set of primaries.
///
/// # Algorithm
///
/// 1. Convert xy chromaticities to XYZ (with Y=1)
/// 2. Solve for per-primary scale so RGB(1,1,1) lands on the white point
/// 3. Scale each column by its factor
///
/// # Example
///
/// ```rust
/// use glam::DVec3;
/// use grade_primaries::{rgb_to_xyz_matrix, REC709};
///
/// let m = rgb_to_xyz_matrix(&REC709);
/// let white = m * DVec3::ONE;
/// assert!((white.y - 1.0).abs() < 1e-12);
/// ```
pub fn rgb_to_xyz_matrix(primaries: &Primaries) -> DMat3 {
    let r = xy_to_xyz(primaries.r.0, primaries.r.1);
    let g = xy_to_xyz(primaries.g.0, primaries.g.1);
    let b = xy_to_xyz(primaries.b.0, primaries.b.1);
    let m = DMat3::from_cols(r, g, b);
    let s = m.inverse() * primaries.white_xyz();
    DMat3::from_cols(r * s.x, g * s.y, b * s.z)
}

/// Inverse of [`rgb_to_xyz_matrix`].
pub fn xyz_to_rgb_matrix(primaries: &Primaries) -> DMat3 {
    rgb_to_xyz_matrix(primaries).inverse()
}
