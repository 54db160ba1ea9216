//! Model configuration.
//!
//! Every field has a default, so a config file only needs to name what it
//! overrides:
//!
//! ```
//! # use sraffa_model::{ModelConfig, ZeroOutputPolicy};
//! let cfg = ModelConfig::from_json_str(r#"{ "zero_output": "reject" }"#).unwrap();
//! assert_eq!(cfg.zero_output, ZeroOutputPolicy::Reject);
//! assert_eq!(cfg.power.max_iterations, 1000);
//! ```

use serde::{Deserialize, Serialize};
use sraffa_core::linalg::{PIVOT_TOLERANCE, PowerIterationOptions};

use crate::error::{ModelError, Result, check_non_negative};

/// Prices must exceed `-PRICE_TOLERANCE` to count as valid.
pub const PRICE_TOLERANCE: f64 = 1e-6;

/// Dominant eigenvalues at or below this are treated as zero.
pub const DEGENERATE_EIGENVALUE: f64 = 1e-9;

/// Maximum profit rate reported when the coefficient matrix has no
/// positive dominant eigenvalue. A display cap, not an economic quantity.
pub const UNBOUNDED_RATE: f64 = 100.0;

/// What to do with a commodity whose total output is zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZeroOutputPolicy {
    /// Treat its coefficients and labor intensity as zero.
    #[default]
    Tolerate,
    /// Fail with [`ModelError::ZeroOutput`].
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// Pivot magnitude below which the price system is singular.
    pub pivot_tolerance: f64,
    pub price_tolerance: f64,
    pub degenerate_eigenvalue: f64,
    pub unbounded_rate: f64,
    pub power: PowerIterationOptions,
    pub zero_output: ZeroOutputPolicy,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: PIVOT_TOLERANCE,
            price_tolerance: PRICE_TOLERANCE,
            degenerate_eigenvalue: DEGENERATE_EIGENVALUE,
            unbounded_rate: UNBOUNDED_RATE,
            power: PowerIterationOptions::default(),
            zero_output: ZeroOutputPolicy::default(),
        }
    }
}

impl ModelConfig {
    /// Parse a JSON config and validate it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|source| ModelError::Parse {
            what: "model config",
            source,
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Tolerances must be finite and non-negative, the iteration budget
    /// non-zero.
    pub fn validate(&self) -> Result<()> {
        check_non_negative("pivot_tolerance", self.pivot_tolerance)?;
        check_non_negative("price_tolerance", self.price_tolerance)?;
        check_non_negative("degenerate_eigenvalue", self.degenerate_eigenvalue)?;
        check_non_negative("unbounded_rate", self.unbounded_rate)?;
        check_non_negative("power.zero_norm", self.power.zero_norm)?;
        if let Some(tol) = self.power.convergence_tol {
            check_non_negative("power.convergence_tol", tol)?;
        }
        if self.power.max_iterations == 0 {
            return Err(ModelError::InvalidParameter {
                name: "power.max_iterations",
                value: 0.0,
            });
        }
        Ok(())
    }
}
