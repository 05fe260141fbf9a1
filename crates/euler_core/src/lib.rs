pub mod error;
pub mod euler;
pub mod grid;
pub mod models;
pub mod settings;
pub mod trajectory;
/// The `euler_core` crate provides fixed-step explicit Euler integration for
/// a single first-order ODE dy/dx = f(x, y) and for a coupled pair
/// dx/dt = g(t, x, y), dy/dt = h(t, x, y).
/// The integrators are generic over `Scalar` (any `num_traits::Float`), so they
/// run on `f64` and `f32` alike.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `ScalarEquation` and `PlanarSystem`.
/// - **Euler**: `euler_method` / `euler_system` and their fallible-derivative forms.
/// - **Grid**: step-size/step-count validation shared by both integrators.
/// - **Trajectory**: immutable result sequences with analytic-reference overlay.
/// - **Settings / Models**: serde-configurable runs, RC circuit and Van der Pol models.
pub mod traits;
