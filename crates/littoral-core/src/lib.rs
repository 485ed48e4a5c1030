//! Core types for the Littoral finite-difference engine.
//!
//! This crate defines [`FieldState`] — the named collection of flat field
//! arrays every other component operates on — together with the
//! constant-vs-callable boundary parameter unions ([`BcValue`], [`Damping`])
//! and the field-level error type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod field;
pub mod param;

pub use error::FieldError;
pub use field::FieldState;
pub use param::{BcValue, Damping};
