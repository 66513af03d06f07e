//! Physical target dimensions and product size presets.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Physical target dimensions in millimeters.
///
/// Describes the bounding footprint and extrusion depth of the generated
/// model. Well-formed dimensions are positive and finite on all three axes;
/// [`Dimensions::is_valid`] mirrors that invariant and the extruder rejects
/// anything else with a typed error.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Dimensions {
    /// Footprint width along X, in mm.
    pub width: f64,
    /// Footprint height along Y, in mm.
    pub height: f64,
    /// Extrusion depth along Z, in mm.
    pub depth: f64,
}

impl Dimensions {
    /// Create dimensions from raw millimeter values.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
        }
    }

    /// Whether all three axes are positive finite millimeter values.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.width.is_finite()
            && self.width > 0.0
            && self.height.is_finite()
            && self.height > 0.0
            && self.depth.is_finite()
            && self.depth > 0.0
    }
}

impl fmt::Display for Dimensions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}x{} mm", self.width, self.height, self.depth)
    }
}

/// Product size presets offered by the shop.
///
/// Each preset maps to a fixed set of physical dimensions via
/// [`Size::dimensions`]. The catalog is closed: free-form dimensions go
/// through [`Dimensions`] directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Size {
    /// 40 x 40 mm footprint, 4 mm deep.
    Small,
    /// 60 x 60 mm footprint, 5 mm deep.
    Medium,
    /// 80 x 80 mm footprint, 6 mm deep.
    Large,
}

impl Size {
    /// Every preset in ascending footprint order.
    pub const ALL: [Self; 3] = [Self::Small, Self::Medium, Self::Large];

    /// Physical dimensions of this preset.
    #[must_use]
    pub const fn dimensions(self) -> Dimensions {
        match self {
            Self::Small => Dimensions::new(40.0, 40.0, 4.0),
            Self::Medium => Dimensions::new(60.0, 60.0, 5.0),
            Self::Large => Dimensions::new(80.0, 80.0, 6.0),
        }
    }

    /// Lowercase preset name as used in shop requests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl From<Size> for Dimensions {
    fn from(size: Size) -> Self {
        size.dimensions()
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`Size`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown size {0:?}, expected \"small\", \"medium\" or \"large\"")]
pub struct ParseSizeError(String);

impl FromStr for Size {
    type Err = ParseSizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            other => Err(ParseSizeError(other.to_string())),
        }
    }
}
