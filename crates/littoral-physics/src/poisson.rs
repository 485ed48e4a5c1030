//! Jacobi iteration for the 2D Poisson equation.

use littoral_engine::PhysicsError;
use littoral_grid::UniformGrid;
use littoral_ops::OperatorError;

/// Outcome of an iterative solve.
///
/// Non-convergence is a reported status, never an error: callers that can
/// tolerate a loose solution inspect `converged` and decide for themselves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SolveReport {
    /// Whether the residual dropped below the tolerance.
    pub converged: bool,
    /// Number of sweeps performed.
    pub iterations: usize,
    /// Infinity norm of the last update, `max |φ_new - φ_old|`.
    pub residual: f64,
}

/// Tuning knobs for [`solve_jacobi`].
#[derive(Clone, Copy, Debug)]
pub struct JacobiOptions {
    /// Stop once the infinity norm of the update falls below this.
    pub tol: f64,
    /// Hard cap on the number of sweeps.
    pub max_iterations: usize,
}

impl Default for JacobiOptions {
    fn default() -> Self {
        Self {
            tol: 1e-6,
            max_iterations: 5000,
        }
    }
}

/// Solve `∇²φ = rhs` on a 2D grid by Jacobi sweeps over the interior.
///
/// The outermost ring of cells is never swept. Cells where `dirichlet`
/// marks `true` are pinned to the paired value; with `dirichlet` of `None`
/// the ring is simply held at zero. Returns the solution together with a
/// [`SolveReport`]; hitting the iteration cap is reported, not raised.
pub fn solve_jacobi(
    rhs: &[f64],
    grid: &UniformGrid,
    dirichlet: Option<(&[bool], &[f64])>,
    opts: &JacobiOptions,
) -> Result<(Vec<f64>, SolveReport), PhysicsError> {
    if grid.ndim() != 2 {
        return Err(PhysicsError::Operator(OperatorError::UnsupportedDimension {
            ndim: grid.ndim(),
        }));
    }
    let n = grid.cell_count();
    if rhs.len() != n {
        return Err(PhysicsError::Operator(OperatorError::ShapeMismatch {
            expected: n,
            got: rhs.len(),
        }));
    }
    if let Some((mask, values)) = dirichlet {
        for (len, what) in [(mask.len(), "mask"), (values.len(), "values")] {
            if len != n {
                return Err(PhysicsError::ExecutionFailed {
                    reason: format!("dirichlet {what} length {len} does not match {n} cells"),
                });
            }
        }
    }

    let (nx, ny) = (grid.shape()[0], grid.shape()[1]);
    let (dx, dy) = (grid.spacing()[0], grid.spacing()[1]);
    let (rdx2, rdy2) = (1.0 / (dx * dx), 1.0 / (dy * dy));
    let denom = 2.0 * (rdx2 + rdy2);

    let mut phi = vec![0.0; n];
    if let Some((mask, values)) = dirichlet {
        for k in 0..n {
            if mask[k] {
                phi[k] = values[k];
            }
        }
    }

    let pinned = |k: usize| match dirichlet {
        Some((mask, _)) => mask[k],
        None => {
            let (i, j) = (k / ny, k % ny);
            i == 0 || i == nx - 1 || j == 0 || j == ny - 1
        }
    };

    let mut next = phi.clone();
    let mut report = SolveReport {
        converged: false,
        iterations: 0,
        residual: f64::INFINITY,
    };
    for sweep in 1..=opts.max_iterations {
        let mut diff = 0.0f64;
        for i in 1..nx.saturating_sub(1) {
            for j in 1..ny.saturating_sub(1) {
                let k = i * ny + j;
                if pinned(k) {
                    continue;
                }
                let updated = ((phi[k - ny] + phi[k + ny]) * rdx2
                    + (phi[k - 1] + phi[k + 1]) * rdy2
                    - rhs[k])
                    / denom;
                diff = diff.max((updated - phi[k]).abs());
                next[k] = updated;
            }
        }
        std::mem::swap(&mut phi, &mut next);
        report.iterations = sweep;
        report.residual = diff;
        if diff < opts.tol {
            report.converged = true;
            break;
        }
    }
    Ok((phi, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use littoral_ops::laplacian;

    #[test]
    fn zero_rhs_with_zero_walls_stays_zero() {
        let grid = UniformGrid::new(&[8, 8], &[1.0, 1.0]).unwrap();
        let rhs = vec![0.0; grid.cell_count()];
        let (phi, report) = solve_jacobi(&rhs, &grid, None, &JacobiOptions::default()).unwrap();
        assert!(report.converged);
        assert_eq!(report.iterations, 1);
        assert!(phi.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn point_source_converges_and_satisfies_the_stencil() {
        let grid = UniformGrid::new(&[16, 16], &[0.5, 0.5]).unwrap();
        let n = grid.cell_count();
        let mut rhs = vec![0.0; n];
        rhs[8 * 16 + 8] = 1.0;

        let opts = JacobiOptions {
            tol: 1e-10,
            max_iterations: 20_000,
        };
        let (phi, report) = solve_jacobi(&rhs, &grid, None, &opts).unwrap();
        assert!(report.converged, "{report:?}");

        // The converged interior must satisfy the discrete Laplacian, which
        // on interior cells is the same 5-point stencil the sweep uses.
        let lap = laplacian(&phi, &grid).unwrap();
        let ny = 16;
        for i in 2..14 {
            for j in 2..14 {
                let k = i * ny + j;
                assert!(
                    (lap[k] - rhs[k]).abs() < 1e-6,
                    "cell {k}: {} vs {}",
                    lap[k],
                    rhs[k]
                );
            }
        }
    }

    #[test]
    fn iteration_cap_reports_without_erroring() {
        let grid = UniformGrid::new(&[12, 12], &[1.0, 1.0]).unwrap();
        let rhs = vec![1.0; grid.cell_count()];
        let opts = JacobiOptions {
            tol: 1e-12,
            max_iterations: 1,
        };
        let (_, report) = solve_jacobi(&rhs, &grid, None, &opts).unwrap();
        assert!(!report.converged);
        assert_eq!(report.iterations, 1);
        assert!(report.residual > 0.0);
    }

    #[test]
    fn explicit_dirichlet_cells_hold_their_values() {
        let grid = UniformGrid::new(&[6, 6], &[1.0, 1.0]).unwrap();
        let n = grid.cell_count();
        let rhs = vec![0.0; n];
        let mut mask = vec![false; n];
        let mut values = vec![0.0; n];
        let ny = 6;
        for i in 0..6 {
            for j in 0..6 {
                if i == 0 || i == 5 || j == 0 || j == 5 {
                    let k = i * ny + j;
                    mask[k] = true;
                    values[k] = 3.0;
                }
            }
        }
        let (phi, report) =
            solve_jacobi(&rhs, &grid, Some((&mask, &values)), &JacobiOptions::default()).unwrap();
        assert!(report.converged);
        // A harmonic function with a constant boundary is that constant.
        assert!(phi.iter().all(|&v| (v - 3.0).abs() < 1e-4), "{phi:?}");
    }

    #[test]
    fn one_dimensional_grids_are_rejected() {
        let grid = UniformGrid::new(&[8], &[1.0]).unwrap();
        let err = solve_jacobi(&[0.0; 8], &grid, None, &JacobiOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PhysicsError::Operator(OperatorError::UnsupportedDimension { ndim: 1 })
        ));
    }

    #[test]
    fn rhs_length_is_checked() {
        let grid = UniformGrid::new(&[4, 4], &[1.0, 1.0]).unwrap();
        let err = solve_jacobi(&[0.0; 5], &grid, None, &JacobiOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            PhysicsError::Operator(OperatorError::ShapeMismatch {
                expected: 16,
                got: 5
            })
        ));
    }
}
