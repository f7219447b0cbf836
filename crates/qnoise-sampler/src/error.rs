//! Validation errors for series generation.

use thiserror::Error;

/// Errors raised when a series specification cannot be integrated.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum SpecError {
    /// Step size must be positive and finite.
    #[error("Integration step must be positive and finite, got {0}")]
    InvalidStepSize(f64),

    /// A parameter is NaN or infinite.
    #[error("Parameter {name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    /// Variance normalization requested where no finite variance exists.
    #[error("Stationary variance diverges for q = {0} (requires q < 5/3), cannot normalize")]
    DivergentVariance(f64),
}

/// Result type for series generation.
pub type SpecResult<T> = Result<T, SpecError>;
