use crate::error::IntegrationError;
use crate::euler::{euler_method, euler_system};
use crate::grid::{steps_in_span, StepParameters};
use crate::trajectory::{SystemTrajectory, Trajectory};
use serde::{Deserialize, Serialize};

/// Step size, step count and initial state for one integration run.
///
/// `steps` is signed so that a negative count in a configuration file is
/// reported as [`IntegrationError::InvalidStepCount`] instead of failing to parse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IntegrationSettings {
    pub step: f64,
    pub steps: i64,
    pub x0: f64,
    pub y0: f64,
}

impl Default for IntegrationSettings {
    fn default() -> Self {
        Self {
            step: 0.01,
            steps: 0,
            x0: 0.0,
            y0: 0.0,
        }
    }
}

impl IntegrationSettings {
    /// Settings whose step count covers [start, end] with whole steps.
    ///
    /// `x0` is set to `start`, which makes it the starting grid value for
    /// [`integrate`](Self::integrate). [`integrate_system`](Self::integrate_system)
    /// always starts its time grid at zero and reads `x0` as the initial value of
    /// the first state variable, so a span starting away from zero is only
    /// meaningful there if `x0` is reassigned afterwards.
    pub fn spanning(start: f64, end: f64, step: f64, y0: f64) -> Result<Self, IntegrationError> {
        let steps = steps_in_span(start, end, step)?;
        Ok(Self {
            step,
            steps: i64::try_from(steps)
                .map_err(|_| IntegrationError::InvalidStepCount {
                    steps: steps as i128,
                    reason: "does not fit a signed 64-bit count",
                })?,
            x0: start,
            y0,
        })
    }

    pub fn validate(&self) -> Result<StepParameters<f64>, IntegrationError> {
        StepParameters::from_signed(self.step, self.steps)
    }

    /// Runs the scalar integrator with these settings.
    pub fn integrate<F>(&self, f: F) -> Result<Trajectory<f64>, IntegrationError>
    where
        F: FnMut(f64, f64) -> f64,
    {
        let params = self.validate()?;
        euler_method(f, self.x0, self.y0, params.step(), params.steps())
    }

    /// Runs the system integrator with these settings. The time grid starts at
    /// zero; `x0` and `y0` are the initial values of the two state variables,
    /// not a starting time.
    pub fn integrate_system<G, H>(
        &self,
        dxdt: G,
        dydt: H,
    ) -> Result<SystemTrajectory<f64>, IntegrationError>
    where
        G: FnMut(f64, f64, f64) -> f64,
        H: FnMut(f64, f64, f64) -> f64,
    {
        let params = self.validate()?;
        euler_system(dxdt, dydt, self.x0, self.y0, params.step(), params.steps())
    }
}
