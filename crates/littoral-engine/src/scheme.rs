//! Explicit time-integration schemes.
//!
//! Integrators advance a named collection of fields by one step given a
//! tendency function. They are stateless apart from the configured step
//! size, never mutate their input state, and always return freshly built
//! state maps — ownership of the "current" state transfers to the new map
//! at the end of each step.

use crate::error::SolverError;
use littoral_core::{FieldError, FieldState};

/// The tendency function handed to an integrator: maps `(state, t)` to one
/// tendency array per state key.
pub type RhsFn<'a> = dyn FnMut(&FieldState, f64) -> Result<FieldState, SolverError> + 'a;

/// An explicit single-step time integrator.
pub trait TimeIntegrator: Send {
    /// The configured step size.
    fn dt(&self) -> f64;

    /// Advance `state` one step from time `t`, returning `(new_state, new_t)`.
    ///
    /// `rhs` may be called more than once for multi-stage schemes. The
    /// input state is read-only; a fresh state map is returned.
    fn step(
        &self,
        state: &FieldState,
        t: f64,
        rhs: &mut RhsFn<'_>,
    ) -> Result<(FieldState, f64), SolverError>;
}

/// Look up one array by key, verifying it exists and matches the reference
/// length. Used for both tendency maps and intermediate stage states: a
/// right-hand side must cover exactly the keys of the state it was handed,
/// and every stage state inherits those keys.
fn checked_array<'a>(
    fields: &'a FieldState,
    name: &str,
    len: usize,
) -> Result<&'a [f64], SolverError> {
    let k = fields.require(name)?;
    if k.len() != len {
        return Err(FieldError::ShapeMismatch {
            name: name.to_string(),
            expected: len,
            got: k.len(),
        }
        .into());
    }
    Ok(k)
}

/// `state + dt * tendencies`, as a fresh map.
fn advanced(
    state: &FieldState,
    tendencies: &FieldState,
    dt: f64,
) -> Result<FieldState, SolverError> {
    let mut next = FieldState::new();
    for (name, s) in state.iter() {
        let k = checked_array(tendencies, name, s.len())?;
        next.insert(name, s.iter().zip(k).map(|(sv, kv)| sv + dt * kv).collect());
    }
    Ok(next)
}

/// First-order forward Euler: `new = state + dt * rhs(state, t)`.
#[derive(Clone, Copy, Debug)]
pub struct EulerIntegrator {
    dt: f64,
}

impl EulerIntegrator {
    /// Create an Euler integrator with step size `dt`.
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl TimeIntegrator for EulerIntegrator {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn step(
        &self,
        state: &FieldState,
        t: f64,
        rhs: &mut RhsFn<'_>,
    ) -> Result<(FieldState, f64), SolverError> {
        let rates = rhs(state, t)?;
        Ok((advanced(state, &rates, self.dt)?, t + self.dt))
    }
}

/// Second-order strong-stability-preserving Runge–Kutta (Shu–Osher form).
///
/// ```text
/// k1  = rhs(state, t)
/// mid = state + dt k1
/// k2  = rhs(mid, t + dt)
/// new = (state + mid + dt k2) / 2
/// ```
///
/// Algebraically identical to the classic two-stage TVD average
/// `state + dt (k1 + k2) / 2`.
#[derive(Clone, Copy, Debug)]
pub struct SspRk2Integrator {
    dt: f64,
}

impl SspRk2Integrator {
    /// Create an SSP-RK2 integrator with step size `dt`.
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl TimeIntegrator for SspRk2Integrator {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn step(
        &self,
        state: &FieldState,
        t: f64,
        rhs: &mut RhsFn<'_>,
    ) -> Result<(FieldState, f64), SolverError> {
        let dt = self.dt;
        let k1 = rhs(state, t)?;
        let mid = advanced(state, &k1, dt)?;
        let k2 = rhs(&mid, t + dt)?;

        let mut next = FieldState::new();
        for (name, s) in state.iter() {
            let m = checked_array(&mid, name, s.len())?;
            let k = checked_array(&k2, name, s.len())?;
            next.insert(
                name,
                s.iter()
                    .zip(m)
                    .zip(k)
                    .map(|((sv, mv), kv)| 0.5 * (sv + mv + dt * kv))
                    .collect(),
            );
        }
        Ok((next, t + dt))
    }
}

/// Third-order strong-stability-preserving Runge–Kutta.
///
/// ```text
/// u1  = state + dt rhs(state, t)
/// u2  = 3/4 state + 1/4 (u1 + dt rhs(u1, t + dt))
/// new = 1/3 state + 2/3 (u2 + dt rhs(u2, t + dt/2))
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SspRk3Integrator {
    dt: f64,
}

impl SspRk3Integrator {
    /// Create an SSP-RK3 integrator with step size `dt`.
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl TimeIntegrator for SspRk3Integrator {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn step(
        &self,
        state: &FieldState,
        t: f64,
        rhs: &mut RhsFn<'_>,
    ) -> Result<(FieldState, f64), SolverError> {
        let dt = self.dt;
        let k1 = rhs(state, t)?;
        let u1 = advanced(state, &k1, dt)?;
        let k2 = rhs(&u1, t + dt)?;
        let k3_input = {
            let mut u2 = FieldState::new();
            for (name, s) in state.iter() {
                let u = checked_array(&u1, name, s.len())?;
                let k = checked_array(&k2, name, s.len())?;
                u2.insert(
                    name,
                    s.iter()
                        .zip(u)
                        .zip(k)
                        .map(|((sv, uv), kv)| 0.75 * sv + 0.25 * (uv + dt * kv))
                        .collect(),
                );
            }
            u2
        };
        let k3 = rhs(&k3_input, t + 0.5 * dt)?;

        let mut next = FieldState::new();
        for (name, s) in state.iter() {
            let u = checked_array(&k3_input, name, s.len())?;
            let k = checked_array(&k3, name, s.len())?;
            next.insert(
                name,
                s.iter()
                    .zip(u)
                    .zip(k)
                    .map(|((sv, uv), kv)| sv / 3.0 + 2.0 / 3.0 * (uv + dt * kv))
                    .collect(),
            );
        }
        Ok((next, t + dt))
    }
}

/// Classic fourth-order Runge–Kutta.
///
/// ```text
/// k1  = rhs(state, t)
/// k2  = rhs(state + dt/2 k1, t + dt/2)
/// k3  = rhs(state + dt/2 k2, t + dt/2)
/// k4  = rhs(state + dt k3, t + dt)
/// new = state + dt/6 (k1 + 2 k2 + 2 k3 + k4)
/// ```
///
/// Higher order than the SSP schemes but not strong-stability-preserving;
/// prefer it for smooth problems where accuracy, not monotonicity, is the
/// constraint.
#[derive(Clone, Copy, Debug)]
pub struct Rk4Integrator {
    dt: f64,
}

impl Rk4Integrator {
    /// Create an RK4 integrator with step size `dt`.
    pub fn new(dt: f64) -> Self {
        Self { dt }
    }
}

impl TimeIntegrator for Rk4Integrator {
    fn dt(&self) -> f64 {
        self.dt
    }

    fn step(
        &self,
        state: &FieldState,
        t: f64,
        rhs: &mut RhsFn<'_>,
    ) -> Result<(FieldState, f64), SolverError> {
        let dt = self.dt;
        let half = 0.5 * dt;
        let k1 = rhs(state, t)?;
        let k2 = rhs(&advanced(state, &k1, half)?, t + half)?;
        let k3 = rhs(&advanced(state, &k2, half)?, t + half)?;
        let k4 = rhs(&advanced(state, &k3, dt)?, t + dt)?;

        let mut next = FieldState::new();
        for (name, s) in state.iter() {
            let a = checked_array(&k1, name, s.len())?;
            let b = checked_array(&k2, name, s.len())?;
            let c = checked_array(&k3, name, s.len())?;
            let d = checked_array(&k4, name, s.len())?;
            next.insert(
                name,
                s.iter()
                    .zip(a)
                    .zip(b)
                    .zip(c)
                    .zip(d)
                    .map(|((((sv, av), bv), cv), dv)| {
                        sv + dt / 6.0 * (av + 2.0 * bv + 2.0 * cv + dv)
                    })
                    .collect::<Vec<_>>(),
            );
        }
        Ok((next, t + dt))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use littoral_core::FieldError;

    fn scalar_state(value: f64) -> FieldState {
        let mut state = FieldState::new();
        state.insert("u", vec![value; 4]);
        state
    }

    /// du/dt = u, the classic growth equation with known Taylor expansion.
    fn growth(state: &FieldState, _t: f64) -> Result<FieldState, SolverError> {
        let mut tend = FieldState::new();
        tend.insert("u", state.require("u")?.to_vec());
        Ok(tend)
    }

    #[test]
    fn euler_unit_tendency() {
        let state = scalar_state(0.0);
        let mut rhs = |_s: &FieldState, _t: f64| {
            let mut tend = FieldState::new();
            tend.insert("u", vec![1.0; 4]);
            Ok(tend)
        };
        let (next, t) = EulerIntegrator::new(0.1).step(&state, 0.0, &mut rhs).unwrap();
        assert!(next.get("u").unwrap().iter().all(|&v| (v - 0.1).abs() < 1e-15));
        assert!((t - 0.1).abs() < 1e-15);
        // Input untouched.
        assert!(state.get("u").unwrap().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rk2_matches_heun_on_growth() {
        let dt = 0.2;
        let state = scalar_state(1.0);
        let (next, t) = SspRk2Integrator::new(dt)
            .step(&state, 0.0, &mut growth)
            .unwrap();
        // Heun on u' = u: 1 + dt + dt^2/2 exactly.
        let exact = 1.0 + dt + 0.5 * dt * dt;
        for &v in next.get("u").unwrap() {
            assert!((v - exact).abs() < 1e-15, "{v} vs {exact}");
        }
        assert!((t - dt).abs() < 1e-15);
    }

    #[test]
    fn rk3_taylor_to_third_order_on_growth() {
        let dt = 0.2;
        let state = scalar_state(1.0);
        let (next, _) = SspRk3Integrator::new(dt)
            .step(&state, 0.0, &mut growth)
            .unwrap();
        let exact = 1.0 + dt + 0.5 * dt * dt + dt * dt * dt / 6.0;
        for &v in next.get("u").unwrap() {
            assert!((v - exact).abs() < 1e-14, "{v} vs {exact}");
        }
    }

    #[test]
    fn rk4_taylor_to_fourth_order_on_growth() {
        let dt = 0.2;
        let state = scalar_state(1.0);
        let (next, t) = Rk4Integrator::new(dt)
            .step(&state, 0.0, &mut growth)
            .unwrap();
        // RK4 on u' = u reproduces the Taylor series through dt^4 exactly.
        let exact = 1.0 + dt + dt * dt / 2.0 + dt * dt * dt / 6.0 + dt * dt * dt * dt / 24.0;
        for &v in next.get("u").unwrap() {
            assert!((v - exact).abs() < 1e-14, "{v} vs {exact}");
        }
        assert!((t - dt).abs() < 1e-15);
    }

    #[test]
    fn integrators_step_every_field() {
        let mut state = FieldState::new();
        state.insert("a", vec![1.0; 2]);
        state.insert("b", vec![2.0; 2]);
        let mut rhs = |s: &FieldState, _t: f64| {
            let mut tend = FieldState::new();
            for (name, arr) in s.iter() {
                tend.insert(name, arr.iter().map(|v| -v).collect::<Vec<_>>());
            }
            Ok(tend)
        };
        let (next, _) = EulerIntegrator::new(0.5).step(&state, 0.0, &mut rhs).unwrap();
        assert_eq!(next.get("a").unwrap(), &[0.5, 0.5]);
        assert_eq!(next.get("b").unwrap(), &[1.0, 1.0]);
    }

    #[test]
    fn missing_tendency_key_is_fatal() {
        let state = scalar_state(1.0);
        let mut rhs = |_s: &FieldState, _t: f64| Ok(FieldState::new());
        let err = EulerIntegrator::new(0.1)
            .step(&state, 0.0, &mut rhs)
            .unwrap_err();
        assert_eq!(
            err,
            SolverError::Physics(crate::PhysicsError::Field(FieldError::MissingField {
                name: "u".into()
            }))
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// The Shu–Osher form must match the classic two-stage TVD
            /// average `state + dt (k1 + k2) / 2` exactly, for any state.
            #[test]
            fn rk2_equals_classic_tvd_average(
                values in prop::collection::vec(-10.0f64..10.0, 1..32),
                dt in 0.01f64..0.5,
            ) {
                let mut state = FieldState::new();
                state.insert("u", values.clone());

                // Autonomous decay: du/dt = -u.
                let mut rhs = |s: &FieldState, _t: f64| {
                    let mut tend = FieldState::new();
                    tend.insert(
                        "u",
                        s.require("u")?.iter().map(|v| -v).collect::<Vec<_>>(),
                    );
                    Ok(tend)
                };

                let (next, _) = SspRk2Integrator::new(dt)
                    .step(&state, 0.0, &mut rhs)
                    .unwrap();

                for (&v0, &v1) in values.iter().zip(next.get("u").unwrap()) {
                    let k1 = -v0;
                    let k2 = -(v0 + dt * k1);
                    let classic = v0 + 0.5 * dt * (k1 + k2);
                    prop_assert!((v1 - classic).abs() < 1e-12);
                }
            }
        }
    }

    #[test]
    fn short_tendency_array_is_fatal() {
        let state = scalar_state(1.0);
        let mut rhs = |_s: &FieldState, _t: f64| {
            let mut tend = FieldState::new();
            tend.insert("u", vec![0.0; 3]);
            Ok(tend)
        };
        let err = SspRk2Integrator::new(0.1)
            .step(&state, 0.0, &mut rhs)
            .unwrap_err();
        assert!(matches!(
            err,
            SolverError::Physics(crate::PhysicsError::Field(FieldError::ShapeMismatch { .. }))
        ));
    }
}
