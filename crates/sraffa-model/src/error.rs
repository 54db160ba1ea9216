use sraffa_core::CoreError;
use thiserror::Error;

/// All errors returned by `sraffa-model`.
///
/// Singular price systems and invalid price regimes are *not* errors; they
/// are reported through [`PriceOutcome`](crate::PriceOutcome).
#[derive(Debug, Error)]
pub enum ModelError {
    /// A numeric routine rejected its input.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The input matrix is not `n x n` for `n` commodities.
    #[error("input matrix is {rows}x{cols} but there are {commodities} commodities")]
    DimensionMismatch {
        rows: usize,
        cols: usize,
        commodities: usize,
    },

    /// A per-commodity vector has the wrong length.
    #[error("{what}: expected {expected} entries, got {got}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },

    /// A commodity has zero total output and the configured policy rejects it.
    #[error("commodity {index} has zero total output")]
    ZeroOutput { index: usize },

    #[error("commodity index {index} out of range for {len} commodities")]
    CommodityOutOfRange { index: usize, len: usize },

    /// A scalar parameter is negative or not finite.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("failed to parse {what}: {source}")]
    Parse {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience alias used throughout `sraffa-model`.
pub type Result<T> = std::result::Result<T, ModelError>;

pub(crate) fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(ModelError::LengthMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ModelError::InvalidParameter { name, value });
    }
    Ok(())
}
