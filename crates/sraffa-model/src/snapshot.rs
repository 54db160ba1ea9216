//! Immutable input snapshots.
//!
//! The editing layer owns commodities and the input table and hands the core
//! a [`Snapshot`] on every recomputation. Nothing in this crate mutates one.

use serde::{Deserialize, Serialize};
use sraffa_core::Matrix;

use crate::commodity::{self, Commodity};
use crate::error::{ModelError, Result, check_non_negative};

/// Everything one evaluation needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub commodities: Vec<Commodity>,
    /// `input_matrix[(i, j)]`: quantity of commodity `i` used by industry `j`.
    pub input_matrix: Matrix<f64>,
    /// Uniform rate of profit `r`.
    pub profit_rate: f64,
    /// Wage rate `w`, the numeraire.
    pub wage: f64,
}

impl Snapshot {
    /// Build and validate a snapshot.
    pub fn new(
        commodities: Vec<Commodity>,
        input_matrix: Matrix<f64>,
        profit_rate: f64,
        wage: f64,
    ) -> Result<Self> {
        let snapshot = Self {
            commodities,
            input_matrix,
            profit_rate,
            wage,
        };
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Parse a JSON snapshot and validate it.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let snapshot: Self = serde_json::from_str(s).map_err(|source| ModelError::Parse {
            what: "snapshot",
            source,
        })?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    /// Check the shape invariant and the scalar parameters.
    ///
    /// Matrix entries are deliberately not inspected: negative or
    /// economically meaningless tables still evaluate.
    pub fn validate(&self) -> Result<()> {
        let n = self.commodities.len();
        let (rows, cols) = self.input_matrix.shape();
        if rows != n || cols != n {
            return Err(ModelError::DimensionMismatch {
                rows,
                cols,
                commodities: n,
            });
        }
        check_non_negative("profit rate", self.profit_rate)?;
        check_non_negative("wage", self.wage)?;
        for c in &self.commodities {
            check_non_negative("total output", c.total_output)?;
            check_non_negative("labor input", c.labor_input)?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.commodities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commodities.is_empty()
    }

    pub fn total_outputs(&self) -> Vec<f64> {
        commodity::total_outputs(&self.commodities)
    }

    pub fn labor_inputs(&self) -> Vec<f64> {
        commodity::labor_inputs(&self.commodities)
    }
}
