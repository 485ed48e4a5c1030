//! Reference physics collaborators for the Littoral engine.
//!
//! These implement the [`Physics`](littoral_engine::Physics) contract for a
//! few classic nearshore problems — passive scalar transport in a
//! prescribed circulation, the 2D nonlinear shallow-water equations — plus
//! an iterative Poisson solve whose convergence is reported as a status
//! rather than an error. They double as worked examples of how a physics
//! collaborator threads the operators and the boundary manager together.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advection_diffusion;
pub mod poisson;
pub mod shallow_water;

pub use advection_diffusion::AdvectionDiffusion;
pub use poisson::{solve_jacobi, JacobiOptions, SolveReport};
pub use shallow_water::ShallowWater;
