use thiserror::Error;

/// All errors returned by `sraffa-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes do not match the required layout.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: Vec<usize>,
        got: Vec<usize>,
    },

    /// Elimination met a pivot below tolerance at step `step`.
    #[error("singular matrix: no usable pivot in column {step}")]
    SingularMatrix { step: usize },
}

/// Convenience alias used throughout `sraffa-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
