//! Linear algebra type aliases for the filter
//!
//! State, control and measurement dimensions (n, m, k) are runtime inputs,
//! so everything is dynamically sized.

use nalgebra::{DMatrix, DVector};

/// State estimate x, n×1
pub type StateVector = DVector<f64>;

/// State covariance P, n×n
pub type CovarianceMatrix = DMatrix<f64>;

/// Control input u, m×1
pub type ControlVector = DVector<f64>;

/// Measurement z, k×1
pub type MeasurementVector = DVector<f64>;

/// Any of the fixed model matrices (A, B, C, Q, R)
pub type ModelMatrix = DMatrix<f64>;
