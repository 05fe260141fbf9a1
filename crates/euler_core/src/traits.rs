use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars by the integrators.
/// Must support basic arithmetic, debug printing, and conversion from f64/usize.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// A single first-order equation dy/dx = f(x, y).
pub trait ScalarEquation<T: Scalar> {
    /// Evaluates the rate of change of y at (x, y).
    fn rate(&self, x: T, y: T) -> T;
}

/// A coupled pair of first-order equations sharing a time base.
pub trait PlanarSystem<T: Scalar> {
    /// dx/dt at (t, x, y).
    fn dxdt(&self, t: T, x: T, y: T) -> T;

    /// dy/dt at (t, x, y).
    fn dydt(&self, t: T, x: T, y: T) -> T;
}
