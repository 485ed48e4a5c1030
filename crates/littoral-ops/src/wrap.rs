//! Shared shape checks and periodic index helpers.

use crate::error::OperatorError;
use littoral_grid::UniformGrid;

/// Validate `field` against `grid` and return the 2D shape `(nx, ny)`.
pub(crate) fn dims_2d(field: &[f64], grid: &UniformGrid) -> Result<(usize, usize), OperatorError> {
    if grid.ndim() != 2 {
        return Err(OperatorError::UnsupportedDimension { ndim: grid.ndim() });
    }
    check_len(field, grid)?;
    Ok((grid.shape()[0], grid.shape()[1]))
}

/// Validate `field` length against the grid's cell count.
pub(crate) fn check_len(field: &[f64], grid: &UniformGrid) -> Result<(), OperatorError> {
    let expected = grid.cell_count();
    if field.len() != expected {
        return Err(OperatorError::ShapeMismatch {
            expected,
            got: field.len(),
        });
    }
    Ok(())
}

/// Index one step in the positive direction, wrapping at the edge.
#[inline]
pub(crate) fn up(k: usize, n: usize) -> usize {
    if k + 1 == n {
        0
    } else {
        k + 1
    }
}

/// Index one step in the negative direction, wrapping at the edge.
#[inline]
pub(crate) fn down(k: usize, n: usize) -> usize {
    if k == 0 {
        n - 1
    } else {
        k - 1
    }
}
