//! Named field storage: the state every engine component operates on.

use crate::error::FieldError;
use indexmap::IndexMap;

/// An insertion-ordered map from field name to a flat `f64` array.
///
/// Each array is stored flat in row-major order (`i * ny + j` for a 2D grid
/// of shape `(nx, ny)`) and must have exactly one entry per grid cell.
/// Boundary conditions mutate the arrays in place; time integrators build
/// fresh `FieldState` values rather than mutating their input, so ownership
/// of the "current" state transfers cleanly at each step boundary.
///
/// Iteration order is insertion order, which keeps integrator arithmetic
/// and observation output deterministic across runs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldState {
    fields: IndexMap<String, Vec<f64>>,
}

impl FieldState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Insert (or replace) a field array under `name`.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) {
        self.fields.insert(name.into(), values);
    }

    /// Borrow a field array, if present.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.fields.get(name).map(Vec::as_slice)
    }

    /// Mutably borrow a field array, if present.
    ///
    /// The slice has fixed length: in-place mutation may change values but
    /// never the cell count.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut [f64]> {
        self.fields.get_mut(name).map(Vec::as_mut_slice)
    }

    /// Borrow a field array, or fail with [`FieldError::MissingField`].
    pub fn require(&self, name: &str) -> Result<&[f64], FieldError> {
        self.get(name).ok_or_else(|| FieldError::MissingField {
            name: name.to_string(),
        })
    }

    /// Mutably borrow a field array, or fail with [`FieldError::MissingField`].
    pub fn require_mut(&mut self, name: &str) -> Result<&mut [f64], FieldError> {
        self.get_mut(name).ok_or_else(|| FieldError::MissingField {
            name: name.to_string(),
        })
    }

    /// Returns `true` if a field named `name` exists.
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Number of fields in the state.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the state holds no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over `(name, array)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterate over field names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

impl FromIterator<(String, Vec<f64>)> for FieldState {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_require() {
        let mut state = FieldState::new();
        state.insert("eta", vec![0.0; 9]);
        assert!(state.contains("eta"));
        assert_eq!(state.require("eta").unwrap().len(), 9);
        assert_eq!(
            state.require("missing"),
            Err(FieldError::MissingField {
                name: "missing".into()
            })
        );
    }

    #[test]
    fn mutation_is_in_place() {
        let mut state = FieldState::new();
        state.insert("u", vec![1.0; 4]);
        state.require_mut("u").unwrap()[2] = 7.0;
        assert_eq!(state.get("u").unwrap(), &[1.0, 1.0, 7.0, 1.0]);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut state = FieldState::new();
        state.insert("h", vec![0.0]);
        state.insert("hu", vec![0.0]);
        state.insert("hv", vec![0.0]);
        let names: Vec<&str> = state.names().collect();
        assert_eq!(names, vec!["h", "hu", "hv"]);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn insert_then_require_roundtrips(
                name in "[a-z]{1,8}",
                values in prop::collection::vec(-1e6f64..1e6, 0..64),
            ) {
                let mut state = FieldState::new();
                state.insert(name.clone(), values.clone());
                prop_assert_eq!(state.require(&name).unwrap(), values.as_slice());
            }

            #[test]
            fn len_matches_iter_count(
                names in prop::collection::hash_set("[a-z]{1,6}", 0..16),
            ) {
                let state: FieldState = names
                    .iter()
                    .map(|n| (n.clone(), vec![0.0]))
                    .collect();
                prop_assert_eq!(state.len(), state.iter().count());
                prop_assert_eq!(state.len(), names.len());
            }
        }
    }
}
