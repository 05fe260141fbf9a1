//! Fixed-step explicit (forward) Euler integration.
//!
//! Two variants share the stepping rule `y_{i} = y_{i-1} + h * f(previous point)`:
//! a single equation dy/dx = f(x, y), and a coupled pair dx/dt = g(t, x, y),
//! dy/dt = h(t, x, y) on a time grid anchored at t = 0.
//!
//! The derivative is always evaluated at the pre-update point. In the coupled
//! case both derivatives see the same (t, x, y) triple; x_i is never fed into
//! the y update of the same step.
//!
//! A step whose update overflows the state to a non-finite value also aborts,
//! as does a step count whose trajectory buffers cannot be allocated.

use crate::error::IntegrationError;
use crate::grid::{check_initial, StepParameters};
use crate::traits::{PlanarSystem, Scalar, ScalarEquation};
use crate::trajectory::{SystemTrajectory, Trajectory};
use anyhow::{anyhow, Result};

/// Integrates dy/dx = f(x, y) from (x0, y0) over `steps` steps of size `step`.
///
/// Returns `steps + 1` points; point 0 is exactly (x0, y0).
pub fn euler_method<T, F>(
    mut f: F,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<Trajectory<T>, IntegrationError>
where
    T: Scalar,
    F: FnMut(T, T) -> T,
{
    try_euler_method(|x, y| Ok(f(x, y)), x0, y0, step, steps)
}

/// Like [`euler_method`], for a derivative that can fail.
///
/// The first failure (or non-finite derivative value) aborts the integration.
pub fn try_euler_method<T, F>(
    mut f: F,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<Trajectory<T>, IntegrationError>
where
    T: Scalar,
    F: FnMut(T, T) -> Result<T>,
{
    let params = StepParameters::new(step, steps)?;
    check_initial("x", x0)?;
    check_initial("y", y0)?;

    let h = params.step();
    let mut trajectory = Trajectory::for_grid(&params)?;
    trajectory.push(x0, y0);

    let (mut x, mut y) = (x0, y0);
    for i in 1..=params.steps() {
        let dy = evaluate(i, "y", f(x, y))?;
        y = advance(i, "y", y + h * dy)?;
        x = advance(i, "x", x + h)?;
        trajectory.push(x, y);
    }

    Ok(trajectory)
}

/// Integrates the planar system dx/dt = dxdt(t, x, y), dy/dt = dydt(t, x, y)
/// from (x0, y0) at t = 0.
///
/// Times are t_i = i * step regardless of the initial state.
pub fn euler_system<T, G, H>(
    mut dxdt: G,
    mut dydt: H,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<SystemTrajectory<T>, IntegrationError>
where
    T: Scalar,
    G: FnMut(T, T, T) -> T,
    H: FnMut(T, T, T) -> T,
{
    try_euler_system(
        |t, x, y| Ok(dxdt(t, x, y)),
        |t, x, y| Ok(dydt(t, x, y)),
        x0,
        y0,
        step,
        steps,
    )
}

/// Like [`euler_system`], for derivatives that can fail.
pub fn try_euler_system<T, G, H>(
    mut dxdt: G,
    mut dydt: H,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<SystemTrajectory<T>, IntegrationError>
where
    T: Scalar,
    G: FnMut(T, T, T) -> Result<T>,
    H: FnMut(T, T, T) -> Result<T>,
{
    let params = StepParameters::new(step, steps)?;
    check_initial("x", x0)?;
    check_initial("y", y0)?;

    let h = params.step();
    let mut trajectory = SystemTrajectory::for_grid(&params)?;
    trajectory.push(params.time_at(0), x0, y0);

    let (mut x, mut y) = (x0, y0);
    for i in 1..=params.steps() {
        let t = params.time_at(i - 1);
        let dx = evaluate(i, "x", dxdt(t, x, y))?;
        let dy = evaluate(i, "y", dydt(t, x, y))?;
        x = advance(i, "x", x + h * dx)?;
        y = advance(i, "y", y + h * dy)?;
        trajectory.push(params.time_at(i), x, y);
    }

    Ok(trajectory)
}

/// Integrates a [`ScalarEquation`] model.
pub fn integrate_scalar<T, E>(
    equation: &E,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<Trajectory<T>, IntegrationError>
where
    T: Scalar,
    E: ScalarEquation<T> + ?Sized,
{
    euler_method(|x, y| equation.rate(x, y), x0, y0, step, steps)
}

/// Integrates a [`PlanarSystem`] model.
pub fn integrate_planar<T, S>(
    system: &S,
    x0: T,
    y0: T,
    step: T,
    steps: usize,
) -> Result<SystemTrajectory<T>, IntegrationError>
where
    T: Scalar,
    S: PlanarSystem<T> + ?Sized,
{
    euler_system(
        |t, x, y| system.dxdt(t, x, y),
        |t, x, y| system.dydt(t, x, y),
        x0,
        y0,
        step,
        steps,
    )
}

fn evaluate<T: Scalar>(
    step: usize,
    variable: &'static str,
    value: Result<T>,
) -> Result<T, IntegrationError> {
    let value = value.map_err(|source| IntegrationError::DerivativeEvaluation {
        step,
        variable,
        source,
    })?;
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntegrationError::DerivativeEvaluation {
            step,
            variable,
            source: anyhow!("derivative returned non-finite value {:?}", value),
        })
    }
}

fn advance<T: Scalar>(
    step: usize,
    variable: &'static str,
    value: T,
) -> Result<T, IntegrationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(IntegrationError::NonFiniteState {
            step,
            variable,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}
