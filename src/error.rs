use thiserror::Error;

/// Filter error types
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    /// Shapes of the model matrices, belief, or a per-call input are
    /// mutually inconsistent. Raised before any arithmetic runs; inputs
    /// are never reshaped or truncated to fit.
    #[error("dimension mismatch: {0}")]
    DimensionMismatch(String),

    /// The innovation covariance S = C·P·Cᵀ + R could not be inverted.
    /// The belief is left at its pre-call values.
    #[error("innovation covariance is singular")]
    SingularInnovation,
}

impl FilterError {
    pub(crate) fn bad_matrix(
        what: &str,
        expected: (usize, usize),
        actual: (usize, usize),
    ) -> Self {
        FilterError::DimensionMismatch(format!(
            "{what} must be {}x{}, got {}x{}",
            expected.0, expected.1, actual.0, actual.1
        ))
    }

    pub(crate) fn bad_vector(what: &str, expected: usize, actual: usize) -> Self {
        FilterError::DimensionMismatch(format!(
            "{what} must have length {expected}, got {actual}"
        ))
    }
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
