//! Littoral: a finite-difference PDE engine on uniform Cartesian grids.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Littoral sub-crates. For most users, adding `littoral` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use littoral::prelude::*;
//! use littoral::ops::laplacian;
//!
//! // Heat diffusion: du/dt = D ∇²u, with the west edge held at 1.
//! struct Heat {
//!     diffusivity: f64,
//! }
//!
//! impl Physics for Heat {
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
//!         let u = state.require("u")?;
//!         let lap = laplacian(u, grid)?;
//!         let mut tend = FieldState::new();
//!         tend.insert("u", lap.iter().map(|l| self.diffusivity * l).collect::<Vec<_>>());
//!         Ok(tend)
//!     }
//! }
//!
//! let grid = UniformGrid::new(&[16, 16], &[1.0, 1.0]).unwrap();
//! let mut bc = BoundaryManager::new();
//! bc.add(DirichletBc::new(Side::West, ["u"], 1.0));
//!
//! let mut solver = Solver::new(grid, Heat { diffusivity: 0.5 }, bc).unwrap();
//! let state = solver.run(0.0, 1.0).unwrap();
//! // Heat has leaked inward from the held edge.
//! let u = state.get("u").unwrap();
//! assert!(u[16] > 0.0 && u[16] < 1.0);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `littoral-core` | `FieldState`, boundary parameter unions, field errors |
//! | [`grid`] | `littoral-grid` | `UniformGrid`, `Side`, boundary-index tables |
//! | [`ops`] | `littoral-ops` | Discrete differential operators and advection |
//! | [`engine`] | `littoral-engine` | Boundary conditions, integrators, the solver |
//! | [`physics`] | `littoral-physics` | Reference physics and the Poisson solve |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Named field arrays and boundary parameter unions (`littoral-core`).
///
/// [`types::FieldState`] is the state container every other component
/// operates on; [`types::BcValue`] and [`types::Damping`] carry
/// constant-or-callable boundary parameters.
pub use littoral_core as types;

/// The uniform Cartesian mesh (`littoral-grid`).
///
/// [`grid::UniformGrid`] owns the geometry and the precomputed flat-index
/// tables (boundary strips, sponge strips, Neumann pairs) that boundary
/// conditions consume.
pub use littoral_grid as grid;

/// Discrete differential operators (`littoral-ops`).
///
/// Gradients, Laplacian, biharmonic, divergence, curl, and the upwind and
/// centered advection kernels, all with periodic interior wrap-around.
pub use littoral_ops as ops;

/// Boundary conditions, integrators, and the run loop (`littoral-engine`).
///
/// The [`engine::Physics`] trait is the main extension point; the
/// [`engine::Solver`] ties a grid, a physics collaborator, a
/// [`engine::BoundaryManager`], and a time integrator together.
pub use littoral_engine as engine;

/// Reference physics collaborators (`littoral-physics`).
///
/// [`physics::AdvectionDiffusion`] and [`physics::ShallowWater`] implement
/// the `Physics` contract; [`physics::solve_jacobi`] handles the elliptic
/// Poisson problem with status-reported convergence.
pub use littoral_physics as physics;

/// Common imports for typical Littoral usage.
///
/// ```rust
/// use littoral::prelude::*;
/// ```
pub mod prelude {
    // State and parameters
    pub use littoral_core::{BcValue, Damping, FieldState};

    // Mesh
    pub use littoral_grid::{Side, UniformGrid};

    // Advection scheme selector
    pub use littoral_ops::AdvectionScheme;

    // Boundary conditions
    pub use littoral_engine::{
        BoundaryCondition, BoundaryManager, DirichletBc, NeumannBc, SpongeBc, WallBc,
    };

    // Integrators and the solver
    pub use littoral_engine::{
        EulerIntegrator, Physics, Rk4Integrator, Solver, SspRk2Integrator, SspRk3Integrator,
        TimeIntegrator,
    };

    // Errors
    pub use littoral_engine::{BoundaryError, PhysicsError, SolverError};
    pub use littoral_core::FieldError;
    pub use littoral_grid::GridError;
    pub use littoral_ops::OperatorError;
}
