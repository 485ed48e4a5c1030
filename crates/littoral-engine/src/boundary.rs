//! Boundary conditions and the ordered manager that applies them.
//!
//! Each condition binds a boundary location to a set of field names and
//! overwrites (or, for sponges, attenuates) the flat entries of those
//! fields at the grid's precomputed boundary indices. Conditions mutate
//! the state in place; the side effect is their only observable behavior.

use crate::error::BoundaryError;
use littoral_core::{BcValue, Damping, FieldState};
use littoral_grid::{Side, UniformGrid};

/// A boundary condition bound to one side and a set of field names.
///
/// Implementations must not keep internal mutable state: `apply` is called
/// every step and must depend only on its arguments and the condition's
/// construction-time parameters.
pub trait BoundaryCondition: Send + Sync {
    /// The boundary this condition is bound to.
    fn location(&self) -> Side;

    /// The field names this condition targets.
    fn variables(&self) -> &[String];

    /// Apply the condition to `state` at time `t`, mutating in place.
    fn apply(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        t: f64,
    ) -> Result<(), BoundaryError>;
}

/// Mutably borrow one targeted field, checking existence and shape.
fn target_field<'a>(
    state: &'a mut FieldState,
    variable: &str,
    location: Side,
    cell_count: usize,
) -> Result<&'a mut [f64], BoundaryError> {
    let array = state
        .get_mut(variable)
        .ok_or_else(|| BoundaryError::MissingVariable {
            variable: variable.to_string(),
            location,
        })?;
    if array.len() != cell_count {
        return Err(BoundaryError::ShapeMismatch {
            variable: variable.to_string(),
            expected: cell_count,
            got: array.len(),
        });
    }
    Ok(array)
}

fn collect_names<I>(variables: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    variables.into_iter().map(Into::into).collect()
}

/// Prescribe a fixed (or time-dependent) value on a boundary.
///
/// Overwrites every targeted field's entries at the side's boundary
/// indices with the evaluated value. No interior coupling: applying the
/// same condition twice is idempotent.
pub struct DirichletBc {
    location: Side,
    variables: Vec<String>,
    value: BcValue,
}

impl DirichletBc {
    /// Create a Dirichlet condition for `variables` on `location`.
    pub fn new<I>(location: Side, variables: I, value: impl Into<BcValue>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            location,
            variables: collect_names(variables),
            value: value.into(),
        }
    }
}

impl BoundaryCondition for DirichletBc {
    fn location(&self) -> Side {
        self.location
    }

    fn variables(&self) -> &[String] {
        &self.variables
    }

    fn apply(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        t: f64,
    ) -> Result<(), BoundaryError> {
        let value = self.value.at(t);
        let indices = grid.boundary_indices(self.location)?;
        for variable in &self.variables {
            let array = target_field(state, variable, self.location, grid.cell_count())?;
            for &k in indices {
                array[k] = value;
            }
        }
        Ok(())
    }
}

/// Prescribe a normal gradient on a boundary (first-order one-sided).
///
/// Sets `array[boundary] = array[interior] + gradient * dn`, where
/// `interior` is the paired one-cell-inward index and `dn` is the grid
/// spacing along the side's normal (x-spacing for west/east, y-spacing for
/// south/north). A zero gradient copies the interior value outward.
pub struct NeumannBc {
    location: Side,
    variables: Vec<String>,
    gradient: BcValue,
}

impl NeumannBc {
    /// Create a Neumann condition with the given normal gradient.
    pub fn new<I>(location: Side, variables: I, gradient: impl Into<BcValue>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            location,
            variables: collect_names(variables),
            gradient: gradient.into(),
        }
    }

    /// Create a zero-gradient (outflow) condition.
    pub fn zero_gradient<I>(location: Side, variables: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self::new(location, variables, 0.0)
    }
}

impl BoundaryCondition for NeumannBc {
    fn location(&self) -> Side {
        self.location
    }

    fn variables(&self) -> &[String] {
        &self.variables
    }

    fn apply(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        t: f64,
    ) -> Result<(), BoundaryError> {
        let gradient = self.gradient.at(t);
        let (boundary, interior) = grid.neumann_indices(self.location)?;
        let dn = grid.spacing()[self.location.axis()];
        for variable in &self.variables {
            let array = target_field(state, variable, self.location, grid.cell_count())?;
            for (&b, &i) in boundary.iter().zip(interior) {
                array[b] = array[i] + gradient * dn;
            }
        }
        Ok(())
    }
}

/// No-flow wall: zero the targeted fields on a boundary.
///
/// Equivalent to a Dirichlet condition with value zero; use it to null the
/// normal velocity or flux component at a closed side.
pub struct WallBc {
    location: Side,
    variables: Vec<String>,
}

impl WallBc {
    /// Create a wall condition for `variables` on `location`.
    pub fn new<I>(location: Side, variables: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            location,
            variables: collect_names(variables),
        }
    }
}

impl BoundaryCondition for WallBc {
    fn location(&self) -> Side {
        self.location
    }

    fn variables(&self) -> &[String] {
        &self.variables
    }

    fn apply(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        _t: f64,
    ) -> Result<(), BoundaryError> {
        let indices = grid.boundary_indices(self.location)?;
        for variable in &self.variables {
            let array = target_field(state, variable, self.location, grid.cell_count())?;
            for &k in indices {
                array[k] = 0.0;
            }
        }
        Ok(())
    }
}

/// Damping (sponge) layer: attenuate outgoing waves near a boundary.
///
/// Multiplies — does not overwrite — each targeted entry over the side's
/// sponge index set by a factor in `[0, 1]`. With a widened sponge strip
/// and a ramped [`Damping::OfTimeAndIndex`] factor this absorbs waves over
/// a multi-cell buffer instead of enforcing a hard constraint.
pub struct SpongeBc {
    location: Side,
    variables: Vec<String>,
    damping: Damping,
}

impl SpongeBc {
    /// Create a sponge condition with the given damping factor.
    pub fn new<I>(location: Side, variables: I, damping: impl Into<Damping>) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            location,
            variables: collect_names(variables),
            damping: damping.into(),
        }
    }
}

impl BoundaryCondition for SpongeBc {
    fn location(&self) -> Side {
        self.location
    }

    fn variables(&self) -> &[String] {
        &self.variables
    }

    fn apply(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        t: f64,
    ) -> Result<(), BoundaryError> {
        let indices = grid.sponge_indices(self.location)?;
        for variable in &self.variables {
            let array = target_field(state, variable, self.location, grid.cell_count())?;
            match &self.damping {
                Damping::Uniform(alpha) => {
                    for &k in indices {
                        array[k] *= alpha;
                    }
                }
                spatially_varying => {
                    for &k in indices {
                        array[k] *= spatially_varying.at(t, k);
                    }
                }
            }
        }
        Ok(())
    }
}

/// An ordered collection of boundary conditions, applied every step.
///
/// Application order is registration order. When two conditions target the
/// same `(location, variable)` pair, the later-registered condition's write
/// wins on the overlapping indices — deliberate last-write-wins semantics,
/// not a conflict to be resolved.
#[derive(Default)]
pub struct BoundaryManager {
    conditions: Vec<Box<dyn BoundaryCondition>>,
}

impl BoundaryManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a condition. Later registrations apply later.
    pub fn add(&mut self, condition: impl BoundaryCondition + 'static) -> &mut Self {
        self.conditions.push(Box::new(condition));
        self
    }

    /// Number of registered conditions.
    pub fn len(&self) -> usize {
        self.conditions.len()
    }

    /// Returns `true` if no conditions are registered.
    pub fn is_empty(&self) -> bool {
        self.conditions.is_empty()
    }

    /// Apply every registered condition to `state` at time `t`, in
    /// registration order.
    ///
    /// No condition sees any bookkeeping about the others; ordering effects
    /// are resolved purely by the registration sequence.
    pub fn apply_all(
        &self,
        state: &mut FieldState,
        grid: &UniformGrid,
        t: f64,
    ) -> Result<(), BoundaryError> {
        for condition in &self.conditions {
            condition.apply(state, grid, t)?;
        }
        Ok(())
    }
}
