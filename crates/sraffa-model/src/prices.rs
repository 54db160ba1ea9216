//! Maximum profit rate and prices of production.
//!
//! With coefficient matrix `A`, unit labor `l` (wage included) and profit
//! rate `r`, prices satisfy
//!
//! ```text
//! p_j = (1 + r) * sum_i A[i][j] * p_i + l_j
//! ```
//!
//! i.e. `(I - (1 + r) A^T) p = l`. Commodity `j`'s cost sums down column `j`
//! of `A`, so the system matrix reads `A` transposed.

use serde::{Deserialize, Serialize};
use sraffa_core::linalg::{PowerIteration, try_solve_with_tolerance};
use sraffa_core::{CoreError, Matrix};
use tracing::{debug, warn};

use crate::coefficients::build_labor_vector;
use crate::error::Result;
use crate::model::EconomicModel;

/// Outcome of solving the price system.
///
/// Distinguishes "no numeric solution" from "a solution that is not
/// economically meaningful".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", content = "prices", rename_all = "snake_case")]
pub enum PriceOutcome {
    /// Every price exceeds `-price_tolerance`.
    Valid(Vec<f64>),
    /// Some price is at or below `-price_tolerance`, typically because `r`
    /// exceeds the maximum profit rate. Prices are kept for inspection.
    Invalid(Vec<f64>),
    /// The system matrix is singular.
    Singular,
}

impl PriceOutcome {
    /// The computed prices; empty for a singular system.
    pub fn prices(&self) -> &[f64] {
        match self {
            Self::Valid(p) | Self::Invalid(p) => p,
            Self::Singular => &[],
        }
    }

    pub fn into_prices(self) -> Vec<f64> {
        match self {
            Self::Valid(p) | Self::Invalid(p) => p,
            Self::Singular => Vec::new(),
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular)
    }

    /// Smallest price, if any were computed.
    pub fn min_price(&self) -> Option<f64> {
        self.prices().iter().copied().reduce(f64::min)
    }
}

/// System matrix `S = I - (1 + r) A^T`.
pub fn price_system_matrix(a: &Matrix<f64>, profit_rate: f64) -> Matrix<f64> {
    let at = a.transpose();
    let markup = 1.0 + profit_rate;
    Matrix::from_fn(at.nrows(), at.ncols(), |row, col| {
        let delta = if row == col { 1.0 } else { 0.0 };
        delta - markup * at[(row, col)]
    })
}

impl EconomicModel {
    /// Maximum uniform profit rate `R = 1/lambda - 1`, where `lambda` is the
    /// dominant eigenvalue of the coefficient matrix.
    ///
    /// Returns the configured `unbounded_rate` when `lambda` is (near) zero.
    pub fn max_profit_rate(&self, input: &Matrix<f64>, total_outputs: &[f64]) -> Result<f64> {
        let a = self.coefficients(input, total_outputs)?;
        self.max_profit_rate_of(&a)
    }

    /// [`max_profit_rate`](Self::max_profit_rate) for an already built `A`.
    pub fn max_profit_rate_of(&self, a: &Matrix<f64>) -> Result<f64> {
        let eig = PowerIteration::new(self.config().power).run(a)?;
        let lambda = eig.value;
        if lambda <= self.config().degenerate_eigenvalue {
            debug!(lambda, "degenerate dominant eigenvalue; profit rate unbounded");
            return Ok(self.config().unbounded_rate);
        }
        Ok(lambda.recip() - 1.0)
    }

    /// Prices of production at profit rate `r` and wage `w`.
    ///
    /// `labor_inputs` are the raw industry labor totals `L`.
    pub fn sraffian_prices(
        &self,
        input: &Matrix<f64>,
        labor_inputs: &[f64],
        total_outputs: &[f64],
        profit_rate: f64,
        wage: f64,
    ) -> Result<PriceOutcome> {
        let a = self.coefficients(input, total_outputs)?;
        let l = build_labor_vector(labor_inputs, total_outputs, wage)?;
        self.prices_of(&a, &l, profit_rate)
    }

    /// Solve `(I - (1 + r) A^T) p = l` for already derived `A` and `l`.
    pub fn prices_of(&self, a: &Matrix<f64>, l: &[f64], profit_rate: f64) -> Result<PriceOutcome> {
        let s = price_system_matrix(a, profit_rate);
        let prices = match try_solve_with_tolerance(&s, l, self.config().pivot_tolerance) {
            Ok(p) => p,
            Err(CoreError::SingularMatrix { step }) => {
                debug!(profit_rate, step, "price system is singular");
                return Ok(PriceOutcome::Singular);
            }
            Err(e) => return Err(e.into()),
        };

        let floor = -self.config().price_tolerance;
        if prices.iter().all(|&p| p > floor) {
            Ok(PriceOutcome::Valid(prices))
        } else {
            warn!(profit_rate, ?prices, "non-positive price; invalid price regime");
            Ok(PriceOutcome::Invalid(prices))
        }
    }
}

/// [`EconomicModel::max_profit_rate`] with the default configuration.
pub fn max_profit_rate(input: &Matrix<f64>, total_outputs: &[f64]) -> Result<f64> {
    EconomicModel::default().max_profit_rate(input, total_outputs)
}

/// [`EconomicModel::sraffian_prices`] with the default configuration.
pub fn sraffian_prices(
    input: &Matrix<f64>,
    labor_inputs: &[f64],
    total_outputs: &[f64],
    profit_rate: f64,
    wage: f64,
) -> Result<PriceOutcome> {
    EconomicModel::default().sraffian_prices(input, labor_inputs, total_outputs, profit_rate, wage)
}
