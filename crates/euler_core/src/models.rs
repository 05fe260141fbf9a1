//! Reference models for exercising the integrators: a charging RC circuit
//! (with a closed-form solution) and the Van der Pol oscillator.
//!
//! Parameters are carried by the model values; nothing here is global.

use crate::error::IntegrationError;
use crate::euler::{integrate_planar, integrate_scalar};
use crate::traits::{PlanarSystem, ScalarEquation};
use crate::trajectory::{SystemTrajectory, Trajectory};
use serde::{Deserialize, Serialize};

/// Capacitor voltage in a series RC circuit driven by a constant source:
/// dV/dt = (V_in - V) / (R C).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RcCircuit {
    /// Ohms.
    pub resistance: f64,
    /// Farads.
    pub capacitance: f64,
    /// Volts.
    pub input_voltage: f64,
}

impl Default for RcCircuit {
    fn default() -> Self {
        Self {
            resistance: 1000.0,
            capacitance: 0.001,
            input_voltage: 10.0,
        }
    }
}

impl RcCircuit {
    pub fn time_constant(&self) -> f64 {
        self.resistance * self.capacitance
    }

    /// Closed-form voltage at time `t` for an initially discharged capacitor.
    pub fn exact(&self, t: f64) -> f64 {
        self.input_voltage * (1.0 - (-t / self.time_constant()).exp())
    }

    /// Charges the capacitor from 0 V at t = 0.
    pub fn charge(&self, step: f64, steps: usize) -> Result<Trajectory<f64>, IntegrationError> {
        integrate_scalar(self, 0.0, 0.0, step, steps)
    }
}

impl ScalarEquation<f64> for RcCircuit {
    fn rate(&self, _t: f64, v: f64) -> f64 {
        (1.0 / self.time_constant()) * (self.input_voltage - v)
    }
}

/// x'' - mu (1 - x^2) x' + x = 0 written as a first-order pair:
/// dx/dt = y, dy/dt = mu (1 - x^2) y - x.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VanDerPol {
    pub mu: f64,
}

impl Default for VanDerPol {
    fn default() -> Self {
        Self { mu: 2.0 }
    }
}

impl VanDerPol {
    pub fn simulate(
        &self,
        x0: f64,
        y0: f64,
        step: f64,
        steps: usize,
    ) -> Result<SystemTrajectory<f64>, IntegrationError> {
        integrate_planar(self, x0, y0, step, steps)
    }
}

impl PlanarSystem<f64> for VanDerPol {
    fn dxdt(&self, _t: f64, _x: f64, y: f64) -> f64 {
        y
    }

    fn dydt(&self, _t: f64, x: f64, y: f64) -> f64 {
        self.mu * (1.0 - x * x) * y - x
    }
}

#[cfg(test)]
mod tests {
    use super::{RcCircuit, VanDerPol};
    use crate::grid::steps_in_span;
    use crate::traits::{PlanarSystem, ScalarEquation};

    #[test]
    fn rc_rate_and_exact_solution() {
        let circuit = RcCircuit::default();
        assert_eq!(circuit.time_constant(), 1.0);
        assert!((circuit.rate(0.0, 0.0) - 10.0).abs() < 1e-12);
        assert!((circuit.rate(1.0, 5.0) - 5.0).abs() < 1e-12);
        assert!(circuit.exact(0.0).abs() < 1e-12);
        assert!((circuit.exact(1.0) - 6.321205588285577).abs() < 1e-12);
    }

    #[test]
    fn rc_euler_tracks_exact_charge_curve() {
        let circuit = RcCircuit::default();
        let step = 0.01;
        // One step past the span, as the charging demo does.
        let steps = steps_in_span(0.0, 5.0, step).expect("valid span") + 1;
        let trajectory = circuit.charge(step, steps).expect("integration");
        assert_eq!(trajectory.len(), 502);

        let exact = trajectory.reference(|t| circuit.exact(t));
        let max_error = trajectory
            .y()
            .iter()
            .zip(&exact)
            .map(|(v, e)| (v - e).abs())
            .fold(0.0, f64::max);
        assert!(max_error < 0.02, "max error {max_error}");
        assert!(trajectory.y().windows(2).all(|w| w[1] >= w[0]));
        assert!(trajectory.last().1 < circuit.input_voltage);
    }

    #[test]
    fn van_der_pol_first_step_uses_initial_state() {
        let oscillator = VanDerPol::default();
        assert_eq!(oscillator.dxdt(0.0, 1.0, 0.0), 0.0);
        assert_eq!(oscillator.dydt(0.0, 1.0, 0.0), -1.0);

        let trajectory = oscillator.simulate(1.0, 0.0, 0.01, 1).expect("integration");
        assert_eq!(trajectory.x(), &[1.0, 1.0]);
        assert_eq!(trajectory.y(), &[0.0, -0.01]);
    }

    #[test]
    fn van_der_pol_settles_onto_bounded_cycle() {
        let oscillator = VanDerPol::default();
        let steps = steps_in_span(0.0, 20.0, 0.01).expect("valid span");
        let trajectory = oscillator.simulate(1.0, 0.0, 0.01, steps).expect("integration");
        assert_eq!(trajectory.len(), 2001);
        assert!((trajectory.last().0 - 20.0).abs() < 1e-9);

        let peak = trajectory.x().iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        assert!(peak > 1.8 && peak < 2.5, "peak {peak}");
    }

    #[test]
    fn models_deserialize_partial_configs() {
        let circuit: RcCircuit =
            serde_json::from_str(r#"{ "resistance": 2000.0 }"#).expect("config should parse");
        assert_eq!(circuit.time_constant(), 2.0);
        assert_eq!(circuit.input_voltage, 10.0);

        let oscillator: VanDerPol = serde_json::from_str("{}").expect("config should parse");
        assert_eq!(oscillator.mu, 2.0);
    }
}
