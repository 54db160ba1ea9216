//! Prices across the admissible range of profit rates.

use serde::{Deserialize, Serialize};

use crate::coefficients::build_labor_vector;
use crate::error::{ModelError, Result};
use crate::model::EconomicModel;
use crate::snapshot::Snapshot;

/// One sample of a profit-rate sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub profit_rate: f64,
    /// `None` when the price system is singular at this rate.
    pub min_price: Option<f64>,
    pub is_valid: bool,
}

impl EconomicModel {
    /// Evaluate prices at `steps + 1` evenly spaced rates from `0` to the
    /// maximum profit rate `R`, inclusive.
    ///
    /// The snapshot's own profit rate is ignored. At `r = R` the price
    /// system is singular up to rounding, so the last point is expected to
    /// come back singular.
    ///
    /// Fails with [`ModelError::InvalidParameter`] when `R <= 0`: the
    /// economy is not productive and there is no admissible rate to sample.
    pub fn sweep(&self, snapshot: &Snapshot, steps: usize) -> Result<Vec<SweepPoint>> {
        if steps == 0 {
            return Err(ModelError::InvalidParameter {
                name: "sweep steps",
                value: 0.0,
            });
        }
        snapshot.validate()?;
        let outputs = snapshot.total_outputs();
        let a = self.coefficients(&snapshot.input_matrix, &outputs)?;
        let l = build_labor_vector(&snapshot.labor_inputs(), &outputs, snapshot.wage)?;
        let max_rate = self.max_profit_rate_of(&a)?;
        if max_rate <= 0.0 {
            return Err(ModelError::InvalidParameter {
                name: "maximum profit rate",
                value: max_rate,
            });
        }

        (0..=steps)
            .map(|k| {
                let profit_rate = max_rate * k as f64 / steps as f64;
                let outcome = self.prices_of(&a, &l, profit_rate)?;
                Ok(SweepPoint {
                    profit_rate,
                    min_price: outcome.min_price(),
                    is_valid: outcome.is_valid(),
                })
            })
            .collect()
    }
}
