//! The 2D nonlinear shallow-water equations in conservative form.

use littoral_core::{FieldError, FieldState};
use littoral_engine::{BoundaryManager, Physics, PhysicsError, SolverError};
use littoral_grid::UniformGrid;
use littoral_ops::{grad_x, grad_y, OperatorError};

/// Depth floor used when recovering velocities from the momenta. Cells
/// drier than this are treated as motionless.
const H_FLOOR: f64 = 1e-6;

/// Conservative-form shallow-water dynamics over an optional fixed bed:
///
/// ```text
/// ∂h/∂t  + ∂(hu)/∂x + ∂(hv)/∂y = 0
/// ∂hu/∂t + ∂(hu² + gh²/2)/∂x + ∂(huv)/∂y = -g h ∂z_b/∂x
/// ∂hv/∂t + ∂(huv)/∂x + ∂(hv² + gh²/2)/∂y = -g h ∂z_b/∂y
/// ```
///
/// State fields are the depth `h` and momenta `hu`, `hv`. The right-hand
/// side applies the solver's boundary manager to the tendency arrays it
/// returns, so wall and gradient conditions registered for these fields
/// constrain the rate of change as well as the pre-step state.
pub struct ShallowWater {
    gravity: f64,
    depth: f64,
    dt: f64,
    amplitude: f64,
    bump_radius: f64,
    bed: Option<Vec<f64>>,
}

impl ShallowWater {
    /// Depth field name.
    pub const H: &'static str = "h";
    /// x-momentum field name.
    pub const HU: &'static str = "hu";
    /// y-momentum field name.
    pub const HV: &'static str = "hv";

    /// A basin of still water `depth` deep under gravity `gravity`.
    pub fn new(gravity: f64, depth: f64, dt: f64) -> Self {
        Self {
            gravity,
            depth,
            dt,
            amplitude: 0.0,
            bump_radius: 1.0,
            bed: None,
        }
    }

    /// Add a Gaussian free-surface bump at the domain center, `amplitude`
    /// high with e-folding radius `radius`.
    pub fn with_bump(mut self, amplitude: f64, radius: f64) -> Self {
        self.amplitude = amplitude;
        self.bump_radius = radius;
        self
    }

    /// Set a fixed bed elevation `z_b`, one entry per cell in flat order.
    /// The initial depth becomes `depth - z_b` (floored near dry cells).
    pub fn with_bed(mut self, bed: Vec<f64>) -> Self {
        self.bed = Some(bed);
        self
    }
}

impl Physics for ShallowWater {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn initialize_state(&self, grid: &UniformGrid) -> Result<FieldState, PhysicsError> {
        if grid.ndim() != 2 {
            return Err(PhysicsError::Operator(OperatorError::UnsupportedDimension {
                ndim: grid.ndim(),
            }));
        }
        let n = grid.cell_count();
        if let Some(bed) = &self.bed {
            if bed.len() != n {
                return Err(PhysicsError::Field(FieldError::ShapeMismatch {
                    name: "z_b".to_string(),
                    expected: n,
                    got: bed.len(),
                }));
            }
        }

        let x0 = grid.origin()[0] + 0.5 * grid.shape()[0] as f64 * grid.spacing()[0];
        let y0 = grid.origin()[1] + 0.5 * grid.shape()[1] as f64 * grid.spacing()[1];
        let mut h = Vec::with_capacity(n);
        for k in 0..n {
            let mut depth = self.depth;
            if let Some(bed) = &self.bed {
                depth -= bed[k];
            }
            if self.amplitude != 0.0 {
                let dx = grid.centers(0)[k] - x0;
                let dy = grid.centers(1)[k] - y0;
                let r2 = (dx * dx + dy * dy) / (self.bump_radius * self.bump_radius);
                depth += self.amplitude * (-r2).exp();
            }
            h.push(depth.max(H_FLOOR));
        }

        let mut state = FieldState::new();
        state.insert(Self::H, h);
        state.insert(Self::HU, vec![0.0; n]);
        state.insert(Self::HV, vec![0.0; n]);
        Ok(state)
    }

    fn rhs(
        &self,
        state: &FieldState,
        t: f64,
        grid: &UniformGrid,
        bc: &BoundaryManager,
    ) -> Result<FieldState, SolverError> {
        let h = state.require(Self::H)?;
        let hu = state.require(Self::HU)?;
        let hv = state.require(Self::HV)?;
        let n = h.len();
        let half_g = 0.5 * self.gravity;

        let mut flux_h_x = Vec::with_capacity(n);
        let mut flux_h_y = Vec::with_capacity(n);
        let mut flux_hu_x = Vec::with_capacity(n);
        let mut flux_hu_y = Vec::with_capacity(n);
        let mut flux_hv_x = Vec::with_capacity(n);
        let mut flux_hv_y = Vec::with_capacity(n);
        for k in 0..n {
            let wet = h[k].max(H_FLOOR);
            let u = hu[k] / wet;
            let v = hv[k] / wet;
            flux_h_x.push(hu[k]);
            flux_h_y.push(hv[k]);
            flux_hu_x.push(hu[k] * u + half_g * h[k] * h[k]);
            flux_hu_y.push(hu[k] * v);
            flux_hv_x.push(hv[k] * u);
            flux_hv_y.push(hv[k] * v + half_g * h[k] * h[k]);
        }

        let dh = combine(&grad_x(&flux_h_x, grid)?, &grad_y(&flux_h_y, grid)?);
        let mut dhu = combine(&grad_x(&flux_hu_x, grid)?, &grad_y(&flux_hu_y, grid)?);
        let mut dhv = combine(&grad_x(&flux_hv_x, grid)?, &grad_y(&flux_hv_y, grid)?);

        if let Some(bed) = &self.bed {
            let slope_x = grad_x(bed, grid)?;
            let slope_y = grad_y(bed, grid)?;
            for k in 0..n {
                dhu[k] -= self.gravity * h[k] * slope_x[k];
                dhv[k] -= self.gravity * h[k] * slope_y[k];
            }
        }

        let mut tend = FieldState::new();
        tend.insert(Self::H, dh);
        tend.insert(Self::HU, dhu);
        tend.insert(Self::HV, dhv);
        bc.apply_all(&mut tend, grid, t)?;
        Ok(tend)
    }
}

/// `-(a + b)` elementwise: flux divergence enters the tendency negated.
fn combine(a: &[f64], b: &[f64]) -> Vec<f64> {
    a.iter().zip(b).map(|(x, y)| -(x + y)).collect()
}
