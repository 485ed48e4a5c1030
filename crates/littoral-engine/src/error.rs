//! Error types for the engine, organized by subsystem: boundary
//! application, physics right-hand sides, and the solver run loop.

use littoral_core::FieldError;
use littoral_grid::{GridError, Side};
use littoral_ops::OperatorError;
use std::error::Error;
use std::fmt;

/// Errors from applying a boundary condition to the field state.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryError {
    /// The condition references a field name absent from the state.
    MissingVariable {
        /// Name of the missing field.
        variable: String,
        /// Which boundary the condition is bound to.
        location: Side,
    },
    /// A targeted field's length does not match the grid's cell count.
    ShapeMismatch {
        /// Name of the offending field.
        variable: String,
        /// The grid's cell count.
        expected: usize,
        /// The field array's length.
        got: usize,
    },
    /// A boundary-index lookup failed (unknown side for this grid).
    Grid(GridError),
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingVariable { variable, location } => {
                write!(
                    f,
                    "boundary condition on '{location}' references missing field '{variable}'"
                )
            }
            Self::ShapeMismatch {
                variable,
                expected,
                got,
            } => write!(
                f,
                "field '{variable}' has {got} entries, grid has {expected} cells"
            ),
            Self::Grid(e) => write!(f, "boundary index lookup failed: {e}"),
        }
    }
}

impl Error for BoundaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for BoundaryError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from a physics collaborator's initialization or right-hand side.
#[derive(Debug, Clone, PartialEq)]
pub enum PhysicsError {
    /// The right-hand side failed for a reason of its own.
    ExecutionFailed {
        /// Human-readable description of the failure.
        reason: String,
    },
    /// An operator evaluation failed (shape or dimensionality).
    Operator(OperatorError),
    /// A field lookup failed (missing field or bad tendency shape).
    Field(FieldError),
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExecutionFailed { reason } => write!(f, "physics failed: {reason}"),
            Self::Operator(e) => write!(f, "operator failed: {e}"),
            Self::Field(e) => write!(f, "field access failed: {e}"),
        }
    }
}

impl Error for PhysicsError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ExecutionFailed { .. } => None,
            Self::Operator(e) => Some(e),
            Self::Field(e) => Some(e),
        }
    }
}

impl From<OperatorError> for PhysicsError {
    fn from(e: OperatorError) -> Self {
        Self::Operator(e)
    }
}

impl From<FieldError> for PhysicsError {
    fn from(e: FieldError) -> Self {
        Self::Field(e)
    }
}

/// Errors surfaced by the solver run loop.
///
/// `From` conversions from the operator, field, grid, boundary, and physics
/// errors let collaborator code compose with `?` throughout.
#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    /// Boundary application failed.
    Boundary(BoundaryError),
    /// The physics collaborator failed.
    Physics(PhysicsError),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boundary(e) => write!(f, "boundary application failed: {e}"),
            Self::Physics(e) => write!(f, "physics step failed: {e}"),
        }
    }
}

impl Error for SolverError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Boundary(e) => Some(e),
            Self::Physics(e) => Some(e),
        }
    }
}

impl From<BoundaryError> for SolverError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}

impl From<PhysicsError> for SolverError {
    fn from(e: PhysicsError) -> Self {
        Self::Physics(e)
    }
}

impl From<OperatorError> for SolverError {
    fn from(e: OperatorError) -> Self {
        Self::Physics(PhysicsError::Operator(e))
    }
}

impl From<FieldError> for SolverError {
    fn from(e: FieldError) -> Self {
        Self::Physics(PhysicsError::Field(e))
    }
}

impl From<GridError> for SolverError {
    fn from(e: GridError) -> Self {
        Self::Boundary(BoundaryError::Grid(e))
    }
}
