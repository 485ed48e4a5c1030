//! Boundary conditions, explicit time integrators, and the orchestrating
//! run loop of the Littoral finite-difference engine.
//!
//! # Quick start
//!
//! ```
//! use littoral_core::FieldState;
//! use littoral_engine::{
//!     BoundaryManager, Physics, PhysicsError, Solver, SolverError,
//! };
//! use littoral_grid::UniformGrid;
//!
//! // A toy physics collaborator: du/dt = 1 everywhere.
//! struct UnitGrowth;
//!
//! impl Physics for UnitGrowth {
//!     fn dt(&self) -> f64 { 0.1 }
//!
//!     fn initialize_state(&self, grid: &UniformGrid) -> Result<FieldState, PhysicsError> {
//!         let mut state = FieldState::new();
//!         state.insert("u", vec![0.0; grid.cell_count()]);
//!         Ok(state)
//!     }
//!
//!     fn rhs(
//!         &self,
//!         state: &FieldState,
//!         _t: f64,
//!         grid: &UniformGrid,
//!         _bc: &BoundaryManager,
//!     ) -> Result<FieldState, SolverError> {
//!         let mut tend = FieldState::new();
//!         tend.insert("u", vec![1.0; grid.cell_count()]);
//!         Ok(tend)
//!     }
//! }
//!
//! let grid = UniformGrid::new(&[4, 4], &[1.0, 1.0]).unwrap();
//! let mut solver = Solver::new(grid, UnitGrowth, BoundaryManager::new()).unwrap();
//! let state = solver.run(0.0, 1.0).unwrap();
//! assert!((state.get("u").unwrap()[0] - 1.0).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod error;
pub mod scheme;
pub mod solver;

pub use boundary::{
    BoundaryCondition, BoundaryManager, DirichletBc, NeumannBc, SpongeBc, WallBc,
};
pub use error::{BoundaryError, PhysicsError, SolverError};
pub use scheme::{
    EulerIntegrator, Rk4Integrator, SspRk2Integrator, SspRk3Integrator, TimeIntegrator,
};
pub use solver::{Physics, Solver};
