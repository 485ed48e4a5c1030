//! Uniform Cartesian mesh for the Littoral finite-difference engine.
//!
//! This crate defines [`UniformGrid`] — the immutable mesh descriptor that
//! owns geometry (shape, spacing, origin), derived coordinate arrays, and
//! the precomputed flat-index tables boundary conditions consume — along
//! with the [`Side`] boundary-location enum.
//!
//! # Flat-index convention
//!
//! Every component that manipulates flat indices uses the same row-major
//! linearization: a 2D cell `(i, j)` on a grid of shape `(nx, ny)` has flat
//! index `i * ny + j`. The index tables built here (boundary strips, sponge
//! strips, Neumann pairs) all follow it.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod grid;
pub mod side;

pub use error::GridError;
pub use grid::UniformGrid;
pub use side::Side;
