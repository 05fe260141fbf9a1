use thiserror::Error;

/// Failures reported by the Euler integrators.
///
/// Every variant aborts the call; no partial trajectory is ever returned.
#[derive(Debug, Error)]
pub enum IntegrationError {
    #[error("invalid step count {steps}: {reason}")]
    InvalidStepCount { steps: i128, reason: &'static str },

    #[error("step size must be finite and nonzero, got {step}")]
    InvalidStepSize { step: f64 },

    #[error("initial condition for {variable} must be finite, got {value}")]
    NonFiniteInitialCondition { variable: &'static str, value: f64 },

    #[error("derivative of {variable} failed while computing step {step}: {source}")]
    DerivativeEvaluation {
        step: usize,
        variable: &'static str,
        #[source]
        source: anyhow::Error,
    },

    #[error("{variable} became non-finite ({value}) at step {step}")]
    NonFiniteState {
        step: usize,
        variable: &'static str,
        value: f64,
    },
}

impl IntegrationError {
    /// Step index (1-based, i.e. the trajectory element being computed) at which
    /// the integration failed, for failures that happen while stepping.
    pub fn failed_step(&self) -> Option<usize> {
        match self {
            IntegrationError::DerivativeEvaluation { step, .. }
            | IntegrationError::NonFiniteState { step, .. } => Some(*step),
            _ => None,
        }
    }
}
