//! Discrete-time linear Kalman filter
//!
//! The mutable belief (x, P) lives here; the fixed model matrices live in
//! [`FilterModel`](crate::model::FilterModel) and are shared read-only.

use std::sync::Arc;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{FilterError, FilterResult};
use crate::model::FilterModel;
use crate::types::{
    ControlVector, CovarianceMatrix, MeasurementVector, ModelMatrix, StateVector,
};

/// Gaussian belief over the hidden state: mean x and covariance P.
///
/// Both fields are replaced wholesale by every predict and update. P must be
/// symmetric positive semi-definite for the estimate to be meaningful; the
/// constructor checks shapes only.
#[derive(Clone, Debug, PartialEq)]
pub struct Belief {
    mean: StateVector,
    covariance: CovarianceMatrix,
}

impl Belief {
    /// Build a belief from an initial mean and covariance.
    pub fn new(mean: StateVector, covariance: CovarianceMatrix) -> FilterResult<Self> {
        let n = mean.len();
        if covariance.shape() != (n, n) {
            return Err(FilterError::bad_matrix(
                "covariance P",
                (n, n),
                covariance.shape(),
            ));
        }
        Ok(Belief { mean, covariance })
    }

    /// State estimate x
    pub fn mean(&self) -> &StateVector {
        &self.mean
    }

    /// State covariance P
    pub fn covariance(&self) -> &CovarianceMatrix {
        &self.covariance
    }

    /// Sum of the covariance diagonal, a scalar uncertainty summary
    pub fn covariance_trace(&self) -> f64 {
        self.covariance.trace()
    }
}

/// Serializable snapshot of the current belief for reporting
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FilterSnapshot {
    /// State estimate as a flat vector
    pub state: Vec<f64>,

    /// Diagonal of the covariance (per-component variances)
    pub covariance_diag: Vec<f64>,

    /// Covariance trace for uncertainty
    pub covariance_trace: f64,
}

/// Recursive linear estimator over a shared [`FilterModel`].
///
/// Every mutating operation takes `&mut self`, so a filter used from one
/// thread at a time needs no further synchronization; sharing one instance
/// across threads is the caller's job (external mutex, or one filter per
/// tracked target).
#[derive(Clone, Debug)]
pub struct KalmanFilter {
    model: Arc<FilterModel>,
    belief: Belief,
}

impl KalmanFilter {
    /// Create a filter from a shared model and an initial belief.
    ///
    /// Fails if the belief dimension does not match the model's state
    /// dimension, before any arithmetic runs.
    pub fn new(model: Arc<FilterModel>, belief: Belief) -> FilterResult<Self> {
        let n = model.state_dim();
        if belief.mean.len() != n {
            return Err(FilterError::bad_vector(
                "initial state x0",
                n,
                belief.mean.len(),
            ));
        }
        Ok(KalmanFilter { model, belief })
    }

    /// Convenience constructor taking the raw matrices, for callers that do
    /// not share the model across filters.
    #[allow(clippy::too_many_arguments)]
    pub fn from_matrices(
        x0: StateVector,
        p0: CovarianceMatrix,
        transition: ModelMatrix,
        control: ModelMatrix,
        observation: ModelMatrix,
        process_noise: ModelMatrix,
        measurement_noise: ModelMatrix,
    ) -> FilterResult<Self> {
        let model = FilterModel::new(
            transition,
            control,
            observation,
            process_noise,
            measurement_noise,
        )?;
        let belief = Belief::new(x0, p0)?;
        KalmanFilter::new(Arc::new(model), belief)
    }

    /// Advance the belief one time step with control input u, no measurement.
    ///
    /// x ← A·x + B·u, P ← A·P·Aᵀ + Q.
    pub fn predict(&mut self, u: &ControlVector) -> FilterResult<()> {
        let m = self.model.control_dim();
        if u.len() != m {
            return Err(FilterError::bad_vector("control input u", m, u.len()));
        }

        let a = self.model.transition();
        let mean = a * &self.belief.mean + self.model.control() * u;
        let covariance = a * &self.belief.covariance * a.transpose() + self.model.process_noise();

        self.belief.mean = mean;
        self.belief.covariance = covariance;

        trace!(
            "predict: covariance trace {:.6}",
            self.belief.covariance_trace()
        );
        Ok(())
    }

    /// Fold a measurement z into the current belief.
    ///
    /// S = C·P·Cᵀ + R, K = P·Cᵀ·S⁻¹, x ← x + K·(z − C·x), P ← P − K·C·P.
    /// A singular S is reported as [`FilterError::SingularInnovation`] and
    /// leaves the belief untouched; no pseudo-inverse is substituted, since
    /// that would mask a misconfigured model.
    pub fn update(&mut self, z: &MeasurementVector) -> FilterResult<()> {
        let k_dim = self.model.measurement_dim();
        if z.len() != k_dim {
            return Err(FilterError::bad_vector("measurement z", k_dim, z.len()));
        }

        let c = self.model.observation();
        let p = &self.belief.covariance;

        let innovation_cov = c * p * c.transpose() + self.model.measurement_noise();
        let innovation_cov_inv = innovation_cov
            .try_inverse()
            .ok_or(FilterError::SingularInnovation)?;

        let gain = p * c.transpose() * innovation_cov_inv;
        let residual = z - c * &self.belief.mean;

        // Both new values are computed before either field is assigned, so
        // a failure above leaves the belief at its pre-call values.
        let mean = &self.belief.mean + &gain * &residual;
        let covariance = p - &gain * c * p;

        self.belief.mean = mean;
        self.belief.covariance = covariance;

        debug!(
            "update: residual norm {:.6}, covariance trace {:.6}",
            residual.norm(),
            self.belief.covariance_trace()
        );
        Ok(())
    }

    /// One full cycle: predict with u, then update with z.
    pub fn step(&mut self, u: &ControlVector, z: &MeasurementVector) -> FilterResult<()> {
        self.predict(u)?;
        self.update(z)
    }

    /// Residual z − C·x against the current belief, without updating it.
    pub fn innovation(&self, z: &MeasurementVector) -> FilterResult<MeasurementVector> {
        let k_dim = self.model.measurement_dim();
        if z.len() != k_dim {
            return Err(FilterError::bad_vector("measurement z", k_dim, z.len()));
        }
        Ok(z - self.model.observation() * &self.belief.mean)
    }

    /// Current state estimate x
    pub fn state(&self) -> &StateVector {
        &self.belief.mean
    }

    /// Current state covariance P
    pub fn covariance(&self) -> &CovarianceMatrix {
        &self.belief.covariance
    }

    /// Current belief (x, P)
    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    /// Shared model matrices
    pub fn model(&self) -> &FilterModel {
        &self.model
    }

    /// Get current belief snapshot for reporting
    pub fn snapshot(&self) -> FilterSnapshot {
        let n = self.model.state_dim();
        FilterSnapshot {
            state: self.belief.mean.iter().copied().collect(),
            covariance_diag: (0..n).map(|i| self.belief.covariance[(i, i)]).collect(),
            covariance_trace: self.belief.covariance_trace(),
        }
    }
}
