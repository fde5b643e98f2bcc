//! Gamut identifiers.
//!
//! [`Gamut`] names the RGB primary sets a pixel can be expressed in. The
//! chromaticities and the RGB<->XYZ matrices live in `grade-primaries`; this
//! crate only carries the identity and the native white point label.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::gamma::normalize_key;
use crate::{Error, Result};

/// Native reference white of a gamut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WhitePoint {
    /// CIE D65 daylight.
    D65,
    /// ACES white (~D60).
    D60,
    /// DCI theatrical white.
    Dci,
    /// Equal-energy (used for CIE XYZ itself).
    E,
}

/// RGB gamut identifier.
///
/// # Example
///
/// ```rust
/// use grade_core::Gamut;
///
/// let g: Gamut = "ACEScg".parse().unwrap();
/// assert_eq!(g, Gamut::AcesAp1);
/// assert!(!g.is_xyz());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gamut {
    /// ACES AP0 (ACES2065-1).
    AcesAp0,
    /// ACES AP1 (ACEScg/ACEScct working space).
    AcesAp1,
    /// DaVinci Wide Gamut.
    DavinciWideGamut,
    /// ARRI Wide Gamut 3.
    ArriWideGamut3,
    /// ARRI Wide Gamut 4.
    ArriWideGamut4,
    /// Sony S-Gamut3.
    SGamut3,
    /// Sony S-Gamut3.Cine.
    SGamut3Cine,
    /// Panasonic V-Gamut.
    VGamut,
    /// RED Wide Gamut RGB.
    RedWideGamutRgb,
    /// P3 primaries, DCI white.
    P3Dci,
    /// P3 primaries, D60 white.
    P3D60,
    /// P3 primaries, D65 white.
    P3D65,
    /// ITU-R BT.709.
    Rec709,
    /// ITU-R BT.2020.
    Rec2020,
    /// CIE XYZ, the identity gamut.
    Xyz,
}

impl Gamut {
    /// Number of gamuts.
    pub const COUNT: usize = 15;

    /// All gamuts in index order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::AcesAp0,
        Self::AcesAp1,
        Self::DavinciWideGamut,
        Self::ArriWideGamut3,
        Self::ArriWideGamut4,
        Self::SGamut3,
        Self::SGamut3Cine,
        Self::VGamut,
        Self::RedWideGamutRgb,
        Self::P3Dci,
        Self::P3D60,
        Self::P3D65,
        Self::Rec709,
        Self::Rec2020,
        Self::Xyz,
    ];

    /// Position of this gamut in [`Gamut::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Looks a gamut up by its dropdown index.
    pub fn from_index(index: usize) -> Result<Self> {
        Self::ALL.get(index).copied().ok_or(Error::IndexOutOfRange {
            kind: "gamut",
            index,
            count: Self::COUNT,
        })
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::AcesAp0 => "ACES AP0",
            Self::AcesAp1 => "ACES AP1",
            Self::DavinciWideGamut => "DaVinci Wide Gamut",
            Self::ArriWideGamut3 => "ARRI Wide Gamut 3",
            Self::ArriWideGamut4 => "ARRI Wide Gamut 4",
            Self::SGamut3 => "S-Gamut3",
            Self::SGamut3Cine => "S-Gamut3.Cine",
            Self::VGamut => "V-Gamut",
            Self::RedWideGamutRgb => "RED Wide Gamut RGB",
            Self::P3Dci => "P3-DCI",
            Self::P3D60 => "P3-D60",
            Self::P3D65 => "P3-D65",
            Self::Rec709 => "Rec.709",
            Self::Rec2020 => "Rec.2020",
            Self::Xyz => "CIE XYZ",
        }
    }

    /// Machine-friendly key, used for serialization.
    pub const fn key(self) -> &'static str {
        match self {
            Self::AcesAp0 => "aces_ap0",
            Self::AcesAp1 => "aces_ap1",
            Self::DavinciWideGamut => "davinci_wide_gamut",
            Self::ArriWideGamut3 => "arri_wide_gamut3",
            Self::ArriWideGamut4 => "arri_wide_gamut4",
            Self::SGamut3 => "sgamut3",
            Self::SGamut3Cine => "sgamut3_cine",
            Self::VGamut => "vgamut",
            Self::RedWideGamutRgb => "red_wide_gamut_rgb",
            Self::P3Dci => "p3_dci",
            Self::P3D60 => "p3_d60",
            Self::P3D65 => "p3_d65",
            Self::Rec709 => "rec709",
            Self::Rec2020 => "rec2020",
            Self::Xyz => "xyz",
        }
    }

    /// Native reference white.
    pub const fn white_point(self) -> WhitePoint {
        match self {
            Self::AcesAp0 | Self::AcesAp1 | Self::P3D60 => WhitePoint::D60,
            Self::P3Dci => WhitePoint::Dci,
            Self::Xyz => WhitePoint::E,
            _ => WhitePoint::D65,
        }
    }

    /// True for the degenerate "already XYZ" gamut.
    #[inline]
    pub const fn is_xyz(self) -> bool {
        matches!(self, Self::Xyz)
    }
}

impl FromStr for Gamut {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let g = match normalize_key(s).as_str() {
            "acesap0" | "ap0" | "aces20651" => Self::AcesAp0,
            "acesap1" | "ap1" | "acescg" => Self::AcesAp1,
            "davinciwidegamut" | "dwg" => Self::DavinciWideGamut,
            "arriwidegamut3" | "awg3" | "awg" => Self::ArriWideGamut3,
            "arriwidegamut4" | "awg4" => Self::ArriWideGamut4,
            "sgamut3" => Self::SGamut3,
            "sgamut3cine" => Self::SGamut3Cine,
            "vgamut" => Self::VGamut,
            "redwidegamutrgb" | "redwidegamut" | "rwg" => Self::RedWideGamutRgb,
            "p3dci" | "dcip3" => Self::P3Dci,
            "p3d60" => Self::P3D60,
            "p3d65" | "displayp3" => Self::P3D65,
            "rec709" | "bt709" => Self::Rec709,
            "rec2020" | "bt2020" => Self::Rec2020,
            "xyz" | "ciexyz" => Self::Xyz,
            _ => return Err(Error::UnknownGamut(s.to_string())),
        };
        Ok(g)
    }
}

impl TryFrom<String> for Gamut {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Gamut> for String {
    fn from(g: Gamut) -> Self {
        g.key().to_string()
    }
}

impl fmt::Display for Gamut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
