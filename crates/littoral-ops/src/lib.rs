//! Discrete differential operators on uniform Cartesian grids.
//!
//! All operators take a flat field array and a [`UniformGrid`], allocate a
//! fresh output array, and never mutate their input. Interior neighbor
//! access is periodic: a cell's neighbor across the domain edge is the cell
//! on the opposite edge. This makes every operator exact on periodic
//! domains; at non-periodic boundaries the wrapped value is not a valid
//! physical neighbor, and the boundary-condition layer is responsible for
//! overwriting those cells before and/or after the operator runs. That
//! ordering is a required part of the engine's contract, not a shortcut:
//! any operator result that feeds a boundary-affecting tendency must have
//! the appropriate boundary condition applied immediately afterwards.
//!
//! [`UniformGrid`]: littoral_grid::UniformGrid

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod advect;
pub mod diff;
pub mod error;

mod wrap;

pub use advect::{advect, smooth3, upwind_x, upwind_y, AdvectionScheme};
pub use diff::{
    biharmonic, curl_z, divergence, grad_x, grad_y, gradient, laplacian, mixed_xy,
};
pub use error::OperatorError;
