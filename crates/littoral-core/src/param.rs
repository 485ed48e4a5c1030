//! Constant-vs-callable boundary parameters.
//!
//! Boundary values, gradients, and damping factors may be plain numbers or
//! functions of time (and, for sponge damping, of the flat cell index).
//! These are explicit tagged unions rather than dynamic callable detection:
//! the variant is chosen at construction and dispatch is a single match.

use std::fmt;

/// Closure type for time-dependent boundary parameters.
pub type TimeFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;

/// Closure type for time- and cell-dependent damping factors.
pub type TimeIndexFn = Box<dyn Fn(f64, usize) -> f64 + Send + Sync>;

/// A boundary value or gradient: either a fixed number or a function of time.
///
/// ```
/// use littoral_core::BcValue;
///
/// let fixed = BcValue::from(2.5);
/// assert_eq!(fixed.at(10.0), 2.5);
///
/// let tide = BcValue::of_time(|t| 0.5 * (0.1 * t).sin());
/// assert_eq!(tide.at(0.0), 0.0);
/// ```
pub enum BcValue {
    /// A fixed value, independent of time.
    Constant(f64),
    /// A value evaluated as a function of the current simulation time.
    OfTime(TimeFn),
}

impl BcValue {
    /// Build a time-dependent value from a closure.
    pub fn of_time(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self::OfTime(Box::new(f))
    }

    /// Evaluate the parameter at time `t`.
    pub fn at(&self, t: f64) -> f64 {
        match self {
            Self::Constant(v) => *v,
            Self::OfTime(f) => f(t),
        }
    }
}

impl From<f64> for BcValue {
    fn from(v: f64) -> Self {
        Self::Constant(v)
    }
}

impl fmt::Debug for BcValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(v) => f.debug_tuple("Constant").field(v).finish(),
            Self::OfTime(_) => f.write_str("OfTime(..)"),
        }
    }
}

/// A sponge damping factor: uniform over the strip, or a function of time
/// and flat cell index for spatially varying attenuation (e.g. a linear
/// ramp over a widened multi-cell buffer).
///
/// Factors are expected to lie in `[0, 1]`; the engine does not clamp them.
pub enum Damping {
    /// One attenuation factor for every cell in the strip.
    Uniform(f64),
    /// Per-cell factor evaluated as `f(t, flat_index)`.
    OfTimeAndIndex(TimeIndexFn),
}

impl Damping {
    /// Build a spatially varying damping factor from a closure.
    pub fn of_time_and_index(f: impl Fn(f64, usize) -> f64 + Send + Sync + 'static) -> Self {
        Self::OfTimeAndIndex(Box::new(f))
    }

    /// Evaluate the factor at time `t` for the cell at `flat_index`.
    pub fn at(&self, t: f64, flat_index: usize) -> f64 {
        match self {
            Self::Uniform(a) => *a,
            Self::OfTimeAndIndex(f) => f(t, flat_index),
        }
    }
}

impl From<f64> for Damping {
    fn from(a: f64) -> Self {
        Self::Uniform(a)
    }
}

impl fmt::Debug for Damping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform(a) => f.debug_tuple("Uniform").field(a).finish(),
            Self::OfTimeAndIndex(_) => f.write_str("OfTimeAndIndex(..)"),
        }
    }
}
