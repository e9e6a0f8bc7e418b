//! Fixed linear model for the filter
//!
//! Holds the transition, control, observation and noise matrices. The model
//! is immutable after construction and can be shared across several tracked
//! targets via `Arc` without duplicating it or risking one track's belief
//! leaking into another's.

use crate::error::{FilterError, FilterResult};
use crate::types::ModelMatrix;

/// Immutable model matrices (A, B, C, Q, R) with mutually consistent shapes.
///
/// With state dimension n, control dimension m and measurement dimension k:
/// A and Q are n×n, B is n×m, C is k×n, R is k×k. Consistency is checked
/// once here, so the per-step operations only need to validate u and z.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterModel {
    transition: ModelMatrix,
    control: ModelMatrix,
    observation: ModelMatrix,
    process_noise: ModelMatrix,
    measurement_noise: ModelMatrix,
}

impl FilterModel {
    /// Build a model from the five matrices, validating every shape.
    ///
    /// Q and R are expected to be symmetric positive semi-definite; this is
    /// not checked algebraically, only their shapes are.
    pub fn new(
        transition: ModelMatrix,
        control: ModelMatrix,
        observation: ModelMatrix,
        process_noise: ModelMatrix,
        measurement_noise: ModelMatrix,
    ) -> FilterResult<Self> {
        let n = transition.nrows();
        if n == 0 {
            return Err(FilterError::DimensionMismatch(
                "transition matrix A must be non-empty".to_string(),
            ));
        }
        if transition.ncols() != n {
            return Err(FilterError::bad_matrix(
                "transition matrix A",
                (n, n),
                transition.shape(),
            ));
        }
        if process_noise.shape() != (n, n) {
            return Err(FilterError::bad_matrix(
                "process noise Q",
                (n, n),
                process_noise.shape(),
            ));
        }
        if control.nrows() != n {
            return Err(FilterError::bad_matrix(
                "control matrix B",
                (n, control.ncols()),
                control.shape(),
            ));
        }
        let k = observation.nrows();
        if k == 0 || observation.ncols() != n {
            return Err(FilterError::bad_matrix(
                "observation matrix C",
                (k.max(1), n),
                observation.shape(),
            ));
        }
        if measurement_noise.shape() != (k, k) {
            return Err(FilterError::bad_matrix(
                "measurement noise R",
                (k, k),
                measurement_noise.shape(),
            ));
        }

        Ok(FilterModel {
            transition,
            control,
            observation,
            process_noise,
            measurement_noise,
        })
    }

    /// State dimension n
    pub fn state_dim(&self) -> usize {
        self.transition.nrows()
    }

    /// Control dimension m
    pub fn control_dim(&self) -> usize {
        self.control.ncols()
    }

    /// Measurement dimension k
    pub fn measurement_dim(&self) -> usize {
        self.observation.nrows()
    }

    /// Transition matrix A
    pub fn transition(&self) -> &ModelMatrix {
        &self.transition
    }

    /// Control matrix B
    pub fn control(&self) -> &ModelMatrix {
        &self.control
    }

    /// Observation matrix C
    pub fn observation(&self) -> &ModelMatrix {
        &self.observation
    }

    /// Process noise covariance Q
    pub fn process_noise(&self) -> &ModelMatrix {
        &self.process_noise
    }

    /// Measurement noise covariance R
    pub fn measurement_noise(&self) -> &ModelMatrix {
        &self.measurement_noise
    }
}
