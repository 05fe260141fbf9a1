//! Result sequences produced by the integrators.
//!
//! A trajectory is filled in simulation order by the integrator that built it
//! and is read-only afterwards. It always holds at least the initial condition.

use crate::error::IntegrationError;
use crate::grid::StepParameters;
use crate::traits::Scalar;
use serde::Serialize;

/// Solution of a single equation: grid values `x` and states `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory<T: Scalar> {
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Scalar> Trajectory<T> {
    pub(crate) fn for_grid(params: &StepParameters<T>) -> Result<Self, IntegrationError> {
        let mut trajectory = Self {
            x: Vec::new(),
            y: Vec::new(),
        };
        params.reserve(&mut trajectory.x)?;
        params.reserve(&mut trajectory.y)?;
        Ok(trajectory)
    }

    pub(crate) fn push(&mut self, x: T, y: T) {
        self.x.push(x);
        self.y.push(y);
    }

    pub fn x(&self) -> &[T] {
        &self.x
    }

    pub fn y(&self) -> &[T] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn initial(&self) -> (T, T) {
        (self.x[0], self.y[0])
    }

    pub fn last(&self) -> (T, T) {
        let i = self.len() - 1;
        (self.x[i], self.y[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, T)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Evaluates an analytic solution over this trajectory's grid, for overlay
    /// against the computed states.
    pub fn reference<F>(&self, exact: F) -> Vec<T>
    where
        F: Fn(T) -> T,
    {
        self.x.iter().map(|&x| exact(x)).collect()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.x, self.y)
    }
}

/// Solution of a planar system: times `t` and states `x`, `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemTrajectory<T: Scalar> {
    t: Vec<T>,
    x: Vec<T>,
    y: Vec<T>,
}

impl<T: Scalar> SystemTrajectory<T> {
    pub(crate) fn for_grid(params: &StepParameters<T>) -> Result<Self, IntegrationError> {
        let mut trajectory = Self {
            t: Vec::new(),
            x: Vec::new(),
            y: Vec::new(),
        };
        params.reserve(&mut trajectory.t)?;
        params.reserve(&mut trajectory.x)?;
        params.reserve(&mut trajectory.y)?;
        Ok(trajectory)
    }

    pub(crate) fn push(&mut self, t: T, x: T, y: T) {
        self.t.push(t);
        self.x.push(x);
        self.y.push(y);
    }

    pub fn t(&self) -> &[T] {
        &self.t
    }

    pub fn x(&self) -> &[T] {
        &self.x
    }

    pub fn y(&self) -> &[T] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn initial(&self) -> (T, T, T) {
        (self.t[0], self.x[0], self.y[0])
    }

    pub fn last(&self) -> (T, T, T) {
        let i = self.len() - 1;
        (self.t[i], self.x[i], self.y[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, T, T)> + '_ {
        self.t
            .iter()
            .zip(self.x.iter())
            .zip(self.y.iter())
            .map(|((&t, &x), &y)| (t, x, y))
    }

    /// Evaluates an analytic `(x(t), y(t))` over this trajectory's time grid.
    pub fn reference<F>(&self, exact: F) -> (Vec<T>, Vec<T>)
    where
        F: Fn(T) -> (T, T),
    {
        self.t.iter().map(|&t| exact(t)).unzip()
    }

    pub fn into_parts(self) -> (Vec<T>, Vec<T>, Vec<T>) {
        (self.t, self.x, self.y)
    }
}
