//! Error type for operator evaluation.

use std::fmt;

/// Errors arising from operator evaluation.
///
/// Both variants are fatal configuration errors: a field that does not
/// match its grid can never become valid mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorError {
    /// The field array's length does not match the grid's cell count.
    ShapeMismatch {
        /// The grid's cell count.
        expected: usize,
        /// The field array's length.
        got: usize,
    },
    /// The operator is not defined for the grid's dimensionality.
    UnsupportedDimension {
        /// The grid's number of dimensions.
        ndim: usize,
    },
}

impl fmt::Display for OperatorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { expected, got } => {
                write!(f, "field has {got} entries, grid has {expected} cells")
            }
            Self::UnsupportedDimension { ndim } => {
                write!(f, "operator not defined on a {ndim}D grid")
            }
        }
    }
}

impl std::error::Error for OperatorError {}
