//! Validation and grid construction shared by both integrators.

use crate::error::IntegrationError;
use crate::traits::Scalar;

/// Validated step size and step count.
///
/// Together with the starting point these fully determine the
/// independent-variable grid of a trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParameters<T: Scalar> {
    step: T,
    steps: usize,
}

impl<T: Scalar> StepParameters<T> {
    pub fn new(step: T, steps: usize) -> Result<Self, IntegrationError> {
        if !step.is_finite() || step.is_zero() {
            return Err(IntegrationError::InvalidStepSize {
                step: step.to_f64().unwrap_or(f64::NAN),
            });
        }
        if steps.checked_add(1).is_none() {
            return Err(IntegrationError::InvalidStepCount {
                steps: steps as i128,
                reason: "trajectory length overflows usize",
            });
        }
        Ok(Self { step, steps })
    }

    /// Accepts a signed step count, as read from configuration.
    pub fn from_signed(step: T, steps: i64) -> Result<Self, IntegrationError> {
        let steps = usize::try_from(steps).map_err(|_| IntegrationError::InvalidStepCount {
            steps: i128::from(steps),
            reason: "must be non-negative",
        })?;
        Self::new(step, steps)
    }

    pub fn step(&self) -> T {
        self.step
    }

    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Number of points in the resulting trajectory.
    pub fn points(&self) -> usize {
        self.steps + 1
    }

    /// Reserves room for every point of the grid in `buffer`, failing instead
    /// of aborting when the allocation is impossible.
    pub(crate) fn reserve<U>(&self, buffer: &mut Vec<U>) -> Result<(), IntegrationError> {
        buffer
            .try_reserve_exact(self.points())
            .map_err(|_| IntegrationError::InvalidStepCount {
                steps: self.steps as i128,
                reason: "trajectory buffers cannot be allocated",
            })
    }

    /// Time of grid point `i` on a grid anchored at zero: t_i = i * step.
    pub fn time_at(&self, i: usize) -> T {
        // usize -> Float never fails for the Float types num-traits ships.
        T::from_usize(i).unwrap_or_else(T::nan) * self.step
    }

    /// Length of the interval covered, steps * step.
    pub fn span(&self) -> T {
        self.time_at(self.steps)
    }
}

/// Number of whole steps of size `step` that fit in [start, end].
pub fn steps_in_span<T: Scalar>(start: T, end: T, step: T) -> Result<usize, IntegrationError> {
    StepParameters::new(step, 0)?;
    let count = ((end - start) / step).floor();
    match count.to_i64() {
        Some(n) => StepParameters::from_signed(step, n).map(|p| p.steps()),
        None => Err(IntegrationError::InvalidStepCount {
            steps: i128::MIN,
            reason: "span is not a finite number of steps",
        }),
    }
}

pub(crate) fn check_initial<T: Scalar>(
    variable: &'static str,
    value: T,
) -> Result<(), IntegrationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(IntegrationError::NonFiniteInitialCondition {
            variable,
            value: value.to_f64().unwrap_or(f64::NAN),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::{check_initial, steps_in_span, StepParameters};
    use crate::error::IntegrationError;

    #[test]
    fn rejects_zero_and_non_finite_step() {
        for step in [0.0, -0.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = StepParameters::new(step, 10).expect_err("step should be rejected");
            assert!(matches!(err, IntegrationError::InvalidStepSize { .. }));
        }
    }

    #[test]
    fn accepts_negative_step() {
        let params = StepParameters::new(-0.5, 4).expect("negative step is valid");
        assert_eq!(params.points(), 5);
        assert_eq!(params.span(), -2.0);
    }

    #[test]
    fn rejects_negative_signed_count() {
        let err = StepParameters::from_signed(0.1, -1).expect_err("negative count");
        assert!(matches!(err, IntegrationError::InvalidStepCount { steps: -1, .. }));

        let params = StepParameters::from_signed(0.1, 0).expect("zero count is valid");
        assert_eq!(params.points(), 1);
    }

    #[test]
    fn rejects_count_whose_length_overflows() {
        let err = StepParameters::new(0.1, usize::MAX).expect_err("length overflows");
        assert!(matches!(err, IntegrationError::InvalidStepCount { .. }));
        assert!(err.to_string().contains("overflows usize"));

        let params = StepParameters::new(0.1, usize::MAX - 1).expect("length fits");
        assert_eq!(params.points(), usize::MAX);
    }

    #[test]
    fn reserve_reports_impossible_allocation() {
        let params = StepParameters::new(0.1, 1usize << 61).expect("count is representable");
        let mut buffer: Vec<f64> = Vec::new();
        let err = params.reserve(&mut buffer).expect_err("allocation is too large");
        assert!(err.to_string().contains("cannot be allocated"));

        let params = StepParameters::new(0.1, 10).expect("small count");
        params.reserve(&mut buffer).expect("small allocation");
        assert!(buffer.capacity() >= 11);
    }

    #[test]
    fn time_at_is_index_times_step() {
        let params = StepParameters::new(0.1, 10).unwrap();
        for i in 0..=10 {
            assert_eq!(params.time_at(i), i as f64 * 0.1);
        }
    }

    #[test]
    fn steps_in_span_floors() {
        assert_eq!(steps_in_span(0.0, 20.0, 0.5).unwrap(), 40);
        assert_eq!(steps_in_span(0.0, 1.0, 0.3).unwrap(), 3);
        assert_eq!(steps_in_span(1.0, 0.0, -0.25).unwrap(), 4);
    }

    #[test]
    fn steps_in_span_rejects_wrong_direction() {
        let err = steps_in_span(0.0, 1.0, -0.1).expect_err("span runs the other way");
        assert!(matches!(err, IntegrationError::InvalidStepCount { .. }));
    }

    #[test]
    fn initial_conditions_must_be_finite() {
        assert!(check_initial("y", 1.0).is_ok());
        let err = check_initial("y", f64::INFINITY).expect_err("infinite initial value");
        assert!(err.to_string().contains("initial condition for y"));
    }
}
