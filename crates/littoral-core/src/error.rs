//! Error types for field-state access.

use std::fmt;

/// Errors arising from field-state lookups and shape checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A referenced field name is absent from the state map.
    MissingField {
        /// Name of the missing field.
        name: String,
    },
    /// A field array's length does not match the expected cell count.
    ShapeMismatch {
        /// Name of the offending field.
        name: String,
        /// Expected number of cells.
        expected: usize,
        /// Actual array length.
        got: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField { name } => write!(f, "field '{name}' missing from state"),
            Self::ShapeMismatch {
                name,
                expected,
                got,
            } => write!(
                f,
                "field '{name}' has {got} entries, expected {expected}"
            ),
        }
    }
}

impl std::error::Error for FieldError {}
