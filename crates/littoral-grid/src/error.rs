//! Error types for grid construction and index lookups.

use std::fmt;

/// Errors arising from grid construction or boundary-index queries.
///
/// All of these are fatal configuration errors: they surface at
/// construction or first lookup, never mid-run.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Grid dimensionality other than 1 or 2.
    UnsupportedDimension {
        /// The requested number of dimensions.
        ndim: usize,
    },
    /// `shape`, `spacing`, and `origin` must have matching lengths.
    LengthMismatch {
        /// Length of the shape slice.
        shape_len: usize,
        /// Length of the mismatched companion slice.
        other_len: usize,
        /// Which companion slice mismatched (`"spacing"` or `"origin"`).
        what: &'static str,
    },
    /// A shape element is zero.
    EmptyAxis {
        /// The offending axis.
        axis: usize,
    },
    /// A spacing element is zero, negative, or non-finite.
    NonPositiveSpacing {
        /// The offending axis.
        axis: usize,
        /// The offending spacing value.
        value: f64,
    },
    /// A boundary side that is not defined for this grid.
    UnknownSide {
        /// Name of the unknown side.
        side: String,
    },
    /// A sponge strip width of zero or wider than the domain.
    InvalidSpongeWidth {
        /// The requested width in cells.
        width: usize,
        /// Number of cells along the side's normal axis.
        extent: usize,
    },
    /// A Neumann pairing request on a side whose normal axis is a single
    /// cell thick: boundary cells have no inward neighbor to pair with.
    NoInteriorNeighbor {
        /// Name of the side.
        side: String,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedDimension { ndim } => {
                write!(f, "unsupported grid dimensionality {ndim}, expected 1 or 2")
            }
            Self::LengthMismatch {
                shape_len,
                other_len,
                what,
            } => write!(
                f,
                "shape has {shape_len} axes but {what} has {other_len} entries"
            ),
            Self::EmptyAxis { axis } => write!(f, "axis {axis} has zero cells"),
            Self::NonPositiveSpacing { axis, value } => {
                write!(f, "axis {axis} has non-positive spacing {value}")
            }
            Self::UnknownSide { side } => write!(f, "unknown boundary side '{side}'"),
            Self::InvalidSpongeWidth { width, extent } => write!(
                f,
                "sponge width {width} invalid for a side with {extent} cells across"
            ),
            Self::NoInteriorNeighbor { side } => write!(
                f,
                "side '{side}' has no interior cells to pair with across its normal axis"
            ),
        }
    }
}

impl std::error::Error for GridError {}
