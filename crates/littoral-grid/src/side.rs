//! Boundary side names.

use crate::error::GridError;
use std::fmt;
use std::str::FromStr;

/// A boundary side of the rectangular domain.
///
/// 2D grids have all four sides; 1D grids have only [`Side::West`] and
/// [`Side::East`]. West/East bound axis 0 (x), South/North bound axis 1 (y).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    /// Low-x edge (`i = 0`).
    West,
    /// High-x edge (`i = nx - 1`).
    East,
    /// Low-y edge (`j = 0`).
    South,
    /// High-y edge (`j = ny - 1`).
    North,
}

impl Side {
    /// The four sides of a 2D grid, in canonical order.
    pub const ALL_2D: [Side; 4] = [Side::West, Side::East, Side::South, Side::North];

    /// The two sides of a 1D grid.
    pub const ALL_1D: [Side; 2] = [Side::West, Side::East];

    /// The axis this side bounds: 0 for west/east, 1 for south/north.
    pub fn axis(self) -> usize {
        match self {
            Self::West | Self::East => 0,
            Self::South | Self::North => 1,
        }
    }

    /// Returns `true` for the low-coordinate side of its axis (west, south).
    pub fn is_lower(self) -> bool {
        matches!(self, Self::West | Self::South)
    }

    /// Lowercase side name, as used in error messages and configuration.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::West => "west",
            Self::East => "east",
            Self::South => "south",
            Self::North => "north",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "west" => Ok(Self::West),
            "east" => Ok(Self::East),
            "south" => Ok(Self::South),
            "north" => Ok(Self::North),
            other => Err(GridError::UnknownSide {
                side: other.to_string(),
            }),
        }
    }
}
