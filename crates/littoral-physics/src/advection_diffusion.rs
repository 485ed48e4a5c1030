//! Passive scalar advection–diffusion in a prescribed velocity field.

use littoral_core::{FieldError, FieldState};
use littoral_engine::{BoundaryManager, Physics, PhysicsError, SolverError};
use littoral_grid::UniformGrid;
use littoral_ops::{advect, laplacian, AdvectionScheme};

/// Transport of a passive scalar `c` by a frozen circulation:
///
/// ```text
/// ∂c/∂t = −(u ∂c/∂x + v ∂c/∂y) + D ∇²c
/// ```
///
/// The velocity field is prescribed at construction and never evolves;
/// only the concentration is stepped. Wall or zero-gradient conditions on
/// `c` belong in the solver's boundary manager — this right-hand side does
/// not constrain its tendencies.
pub struct AdvectionDiffusion {
    u: Vec<f64>,
    v: Vec<f64>,
    initial: Vec<f64>,
    diffusivity: f64,
    dt: f64,
    scheme: AdvectionScheme,
}

impl AdvectionDiffusion {
    /// Field name of the transported scalar.
    pub const FIELD: &'static str = "c";

    /// Create a collaborator from explicit velocity components and an
    /// initial concentration, all flat arrays shaped to the target grid.
    pub fn new(u: Vec<f64>, v: Vec<f64>, initial: Vec<f64>, diffusivity: f64, dt: f64) -> Self {
        Self {
            u,
            v,
            initial,
            diffusivity,
            dt,
            scheme: AdvectionScheme::Upwind,
        }
    }

    /// Select the advection scheme (default: upwind).
    pub fn with_scheme(mut self, scheme: AdvectionScheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// A single Gaussian vortex stirring a Gaussian concentration drop,
    /// both centered on the domain.
    ///
    /// The circulation has peak speed `u0` and e-folding radius `radius`;
    /// the drop has radius `drop_radius`.
    pub fn vortex(
        grid: &UniformGrid,
        u0: f64,
        radius: f64,
        drop_radius: f64,
        diffusivity: f64,
        dt: f64,
    ) -> Self {
        let (x0, y0) = domain_center(grid);
        let n = grid.cell_count();
        let mut u = vec![0.0; n];
        let mut v = vec![0.0; n];
        let mut c = vec![0.0; n];
        for k in 0..n {
            let dx = grid.centers(0)[k] - x0;
            let dy = grid.centers(1)[k] - y0;
            let envelope = (-(dx * dx + dy * dy) / (radius * radius)).exp();
            u[k] = u0 * dy / radius * envelope;
            v[k] = -u0 * dx / radius * envelope;
            c[k] = (-(dx * dx + dy * dy) / (drop_radius * drop_radius)).exp();
        }
        Self::new(u, v, c, diffusivity, dt)
    }
}

fn domain_center(grid: &UniformGrid) -> (f64, f64) {
    let mid = |axis: usize| {
        grid.origin()[axis] + 0.5 * grid.shape()[axis] as f64 * grid.spacing()[axis]
    };
    (mid(0), mid(1))
}

impl Physics for AdvectionDiffusion {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn initialize_state(&self, grid: &UniformGrid) -> Result<FieldState, PhysicsError> {
        if self.initial.len() != grid.cell_count() {
            return Err(PhysicsError::Field(FieldError::ShapeMismatch {
                name: Self::FIELD.to_string(),
                expected: grid.cell_count(),
                got: self.initial.len(),
            }));
        }
        let mut state = FieldState::new();
        state.insert(Self::FIELD, self.initial.clone());
        Ok(state)
    }

    fn rhs(
        &self,
        state: &FieldState,
        _t: f64,
        grid: &UniformGrid,
        _bc: &BoundaryManager,
    ) -> Result<FieldState, SolverError> {
        let c = state.require(Self::FIELD)?;
        let transport = advect(&self.u, &self.v, c, grid, self.scheme)?;
        let spread = laplacian(c, grid)?;

        let mut tend = FieldState::new();
        tend.insert(
            Self::FIELD,
            transport
                .iter()
                .zip(&spread)
                .map(|(a, l)| -a + self.diffusivity * l)
                .collect::<Vec<_>>(),
        );
        Ok(tend)
    }
}
