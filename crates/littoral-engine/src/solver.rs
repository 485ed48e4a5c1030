//! The orchestrating run loop.

use crate::boundary::BoundaryManager;
use crate::error::{PhysicsError, SolverError};
use crate::scheme::{EulerIntegrator, TimeIntegrator};
use littoral_core::FieldState;
use littoral_grid::UniformGrid;

/// Tolerance absorbing floating-point drift in step accumulation: the loop
/// runs while `t < t_end - T_EPS`.
const T_EPS: f64 = 1e-12;

/// A physics collaborator: supplies the initial state and the tendency
/// (right-hand-side) function the integrator consumes.
///
/// The collaborator is responsible for applying the boundary manager to
/// its own tendency arrays inside [`rhs`](Self::rhs) when the derivative —
/// not just the state — must be constrained (Dirichlet-style velocity
/// conditions). The solver applies boundary conditions to the state before
/// each step; this two-point application is part of the contract.
pub trait Physics {
    /// The step size this physics is configured for (e.g. from a CFL bound).
    fn dt(&self) -> f64;

    /// Build the initial state: one array shaped to the grid per field.
    fn initialize_state(&self, grid: &UniformGrid) -> Result<FieldState, PhysicsError>;

    /// Compute tendencies for every field in `state` at time `t`.
    fn rhs(
        &self,
        state: &FieldState,
        t: f64,
        grid: &UniformGrid,
        bc: &BoundaryManager,
    ) -> Result<FieldState, SolverError>;
}

/// Ties together grid, physics, boundary conditions, and time integrator.
///
/// Each step: the boundary manager mutates the current state in place, the
/// integrator calls the physics right-hand side (which uses the operators
/// and may re-apply boundary corrections to its tendencies), a fresh state
/// replaces the old one, time advances, and the caller's callback fires.
///
/// Multi-stage integrators evaluate the right-hand side at intermediate
/// stage states without re-applying the boundary manager to them; boundary
/// enforcement happens once per step on the pre-step state, plus whatever
/// the physics applies to its tendencies.
pub struct Solver<P: Physics> {
    grid: UniformGrid,
    physics: P,
    bc: BoundaryManager,
    integrator: Box<dyn TimeIntegrator>,
    state: FieldState,
}

impl<P: Physics> Solver<P> {
    /// Create a solver using forward Euler at the physics' configured step
    /// size.
    pub fn new(grid: UniformGrid, physics: P, bc: BoundaryManager) -> Result<Self, SolverError> {
        let dt = physics.dt();
        Self::with_integrator(grid, physics, bc, Box::new(EulerIntegrator::new(dt)))
    }

    /// Create a solver with an explicit time integrator.
    pub fn with_integrator(
        grid: UniformGrid,
        physics: P,
        bc: BoundaryManager,
        integrator: Box<dyn TimeIntegrator>,
    ) -> Result<Self, SolverError> {
        let state = physics.initialize_state(&grid)?;
        Ok(Self {
            grid,
            physics,
            bc,
            integrator,
            state,
        })
    }

    /// The mesh this solver runs on.
    pub fn grid(&self) -> &UniformGrid {
        &self.grid
    }

    /// The current field state.
    pub fn state(&self) -> &FieldState {
        &self.state
    }

    /// The physics collaborator.
    pub fn physics(&self) -> &P {
        &self.physics
    }

    /// March from `t0` to `t_end` and return the final state.
    ///
    /// If `t_end <= t0` the loop performs zero iterations and the initial
    /// state is returned unchanged — not an error.
    pub fn run(&mut self, t0: f64, t_end: f64) -> Result<&FieldState, SolverError> {
        self.run_with(t0, t_end, |_, _| {})
    }

    /// March from `t0` to `t_end`, invoking `callback(state, t)` after
    /// every completed step (for output, probes, plotting hooks).
    pub fn run_with<F>(
        &mut self,
        t0: f64,
        t_end: f64,
        mut callback: F,
    ) -> Result<&FieldState, SolverError>
    where
        F: FnMut(&FieldState, f64),
    {
        let mut t = t0;
        while t < t_end - T_EPS {
            self.bc.apply_all(&mut self.state, &self.grid, t)?;

            let (next, t_next) = {
                let physics = &self.physics;
                let grid = &self.grid;
                let bc = &self.bc;
                let mut rhs =
                    |s: &FieldState, stage_t: f64| physics.rhs(s, stage_t, grid, bc);
                self.integrator.step(&self.state, t, &mut rhs)?
            };

            self.state = next;
            t = t_next;
            callback(&self.state, t);
        }
        Ok(&self.state)
    }
}
