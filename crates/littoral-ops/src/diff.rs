//! Centered-difference derivative operators.

use crate::error::OperatorError;
use crate::wrap::{check_len, dims_2d, down, up};
use littoral_grid::UniformGrid;

/// Centered first derivative along x: `(f[i+1] - f[i-1]) / (2 dx)`.
///
/// Defined on 1D and 2D grids.
pub fn grad_x(field: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    check_len(field, grid)?;
    let dx = grid.spacing()[0];
    match *grid.shape() {
        [n] => {
            let mut out = vec![0.0; n];
            for i in 0..n {
                out[i] = (field[up(i, n)] - field[down(i, n)]) / (2.0 * dx);
            }
            Ok(out)
        }
        [nx, ny] => {
            let mut out = vec![0.0; nx * ny];
            for i in 0..nx {
                let ip = up(i, nx);
                let im = down(i, nx);
                for j in 0..ny {
                    out[i * ny + j] = (field[ip * ny + j] - field[im * ny + j]) / (2.0 * dx);
                }
            }
            Ok(out)
        }
        _ => Err(OperatorError::UnsupportedDimension { ndim: grid.ndim() }),
    }
}

/// Centered first derivative along y: `(f[j+1] - f[j-1]) / (2 dy)`.
///
/// Defined on 2D grids only.
pub fn grad_y(field: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    let (nx, ny) = dims_2d(field, grid)?;
    let dy = grid.spacing()[1];
    let mut out = vec![0.0; nx * ny];
    for i in 0..nx {
        let row = i * ny;
        for j in 0..ny {
            out[row + j] = (field[row + up(j, ny)] - field[row + down(j, ny)]) / (2.0 * dy);
        }
    }
    Ok(out)
}

/// Centered gradient `∇f`, returned as `(∂f/∂x, ∂f/∂y)`.
pub fn gradient(field: &[f64], grid: &UniformGrid) -> Result<(Vec<f64>, Vec<f64>), OperatorError> {
    dims_2d(field, grid)?;
    Ok((grad_x(field, grid)?, grad_y(field, grid)?))
}

/// Discrete Laplacian: sum of second centered differences per axis
/// (5-point stencil in 2D, 3-point in 1D).
pub fn laplacian(field: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    check_len(field, grid)?;
    match *grid.shape() {
        [n] => {
            let dx2 = grid.spacing()[0] * grid.spacing()[0];
            let mut out = vec![0.0; n];
            for i in 0..n {
                out[i] = (field[up(i, n)] - 2.0 * field[i] + field[down(i, n)]) / dx2;
            }
            Ok(out)
        }
        [nx, ny] => {
            let dx2 = grid.spacing()[0] * grid.spacing()[0];
            let dy2 = grid.spacing()[1] * grid.spacing()[1];
            let mut out = vec![0.0; nx * ny];
            for i in 0..nx {
                let ip = up(i, nx) * ny;
                let im = down(i, nx) * ny;
                let row = i * ny;
                for j in 0..ny {
                    let k = row + j;
                    let lap_x = (field[ip + j] - 2.0 * field[k] + field[im + j]) / dx2;
                    let lap_y =
                        (field[row + up(j, ny)] - 2.0 * field[k] + field[row + down(j, ny)]) / dy2;
                    out[k] = lap_x + lap_y;
                }
            }
            Ok(out)
        }
        _ => Err(OperatorError::UnsupportedDimension { ndim: grid.ndim() }),
    }
}

/// Biharmonic operator `Δ²f`: the Laplacian applied twice.
pub fn biharmonic(field: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    laplacian(&laplacian(field, grid)?, grid)
}

/// Centered divergence `∇·u` of a 2D vector field given by components.
pub fn divergence(ux: &[f64], uy: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    dims_2d(ux, grid)?;
    check_len(uy, grid)?;
    let dux_dx = grad_x(ux, grid)?;
    let duy_dy = grad_y(uy, grid)?;
    Ok(dux_dx
        .iter()
        .zip(&duy_dy)
        .map(|(a, b)| a + b)
        .collect())
}

/// Vertical vorticity `(∇×u)·k = ∂v/∂x − ∂u/∂y` of a 2D vector field.
pub fn curl_z(u: &[f64], v: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    dims_2d(u, grid)?;
    check_len(v, grid)?;
    let dv_dx = grad_x(v, grid)?;
    let du_dy = grad_y(u, grid)?;
    Ok(dv_dx.iter().zip(&du_dy).map(|(a, b)| a - b).collect())
}

/// Centered mixed derivative `∂²f/∂x∂y`.
pub fn mixed_xy(field: &[f64], grid: &UniformGrid) -> Result<Vec<f64>, OperatorError> {
    let (nx, ny) = dims_2d(field, grid)?;
    let denom = 4.0 * grid.spacing()[0] * grid.spacing()[1];
    let mut out = vec![0.0; nx * ny];
    for i in 0..nx {
        let ip = up(i, nx) * ny;
        let im = down(i, nx) * ny;
        for j in 0..ny {
            let jp = up(j, ny);
            let jm = down(j, ny);
            out[i * ny + j] =
                (field[ip + jp] - field[ip + jm] - field[im + jp] + field[im + jm]) / denom;
        }
    }
    Ok(out)
}
