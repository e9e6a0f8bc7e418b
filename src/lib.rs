//! Discrete-time linear Kalman filter.
//!
//! Maintains a Gaussian belief (mean and covariance) over a hidden state,
//! driven by noisy control inputs and noisy measurements through fixed
//! linear model matrices. The fixed model ([`FilterModel`]) is a separate
//! immutable value from the mutable belief, so one model can be shared
//! across many tracked targets.
//!
//! Non-finite inputs (NaN, infinities) are not detected; callers needing
//! that guard should validate before calling.

pub mod error;
pub mod filter;
pub mod model;
pub mod types;

pub use error::{FilterError, FilterResult};
pub use filter::{Belief, FilterSnapshot, KalmanFilter};
pub use model::FilterModel;
