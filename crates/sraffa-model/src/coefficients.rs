//! Technical coefficients and unit labor requirements.
//!
//! Both are derived fresh from the raw table on every call:
//!
//! - `A[i][j] = input[i][j] / X[j]`
//! - `l[j] = (L[j] / X[j]) * w`
//!
//! A zero gross output `X[j]` yields a zero column of `A` and `l[j] = 0`.
//! Whether that is acceptable is decided by [`ZeroOutputPolicy`] at the
//! [`EconomicModel`] level; the builders here always tolerate it.

use sraffa_core::Matrix;
use tracing::warn;

use crate::commodity::per_unit;
use crate::config::ZeroOutputPolicy;
use crate::error::{ModelError, Result, check_len};
use crate::model::EconomicModel;

/// Input-output coefficient matrix `A`.
///
/// ```
/// # use sraffa_core::Matrix;
/// # use sraffa_model::build_coefficient_matrix;
/// let input = Matrix::from_rows(&[vec![280.0, 120.0], vec![12.0, 8.0]]).unwrap();
/// let a = build_coefficient_matrix(&input, &[575.0, 20.0]).unwrap();
/// assert!((a[(0, 1)] - 6.0).abs() < 1e-12);
/// ```
pub fn build_coefficient_matrix(input: &Matrix<f64>, total_outputs: &[f64]) -> Result<Matrix<f64>> {
    let n = total_outputs.len();
    input.check_square(n)?;
    Ok(Matrix::from_fn(n, n, |i, j| {
        per_unit(input[(i, j)], total_outputs[j])
    }))
}

/// Unit labor vector `l`, already multiplied by the wage.
pub fn build_labor_vector(labor_inputs: &[f64], total_outputs: &[f64], wage: f64) -> Result<Vec<f64>> {
    check_len("labor inputs", total_outputs.len(), labor_inputs.len())?;
    Ok(labor_inputs
        .iter()
        .zip(total_outputs)
        .map(|(&l, &x)| per_unit(l, x) * wage)
        .collect())
}

/// Indices of commodities with zero gross output.
pub fn zero_output_columns(total_outputs: &[f64]) -> Vec<usize> {
    total_outputs
        .iter()
        .enumerate()
        .filter(|&(_, &x)| x == 0.0)
        .map(|(j, _)| j)
        .collect()
}

impl EconomicModel {
    /// Apply the configured [`ZeroOutputPolicy`] to a gross output vector.
    pub fn check_outputs(&self, total_outputs: &[f64]) -> Result<()> {
        let zeros = zero_output_columns(total_outputs);
        let Some(&first) = zeros.first() else {
            return Ok(());
        };
        match self.config().zero_output {
            ZeroOutputPolicy::Tolerate => {
                warn!(columns = ?zeros, "zero total output; coefficients set to zero");
                Ok(())
            }
            ZeroOutputPolicy::Reject => Err(ModelError::ZeroOutput { index: first }),
        }
    }

    /// Coefficient matrix after the zero-output policy check.
    pub fn coefficients(&self, input: &Matrix<f64>, total_outputs: &[f64]) -> Result<Matrix<f64>> {
        self.check_outputs(total_outputs)?;
        build_coefficient_matrix(input, total_outputs)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::config::ModelConfig;

    fn wheat_iron() -> Matrix<f64> {
        Matrix::from_rows(&[vec![280.0, 120.0], vec![12.0, 8.0]]).unwrap()
    }

    #[test]
    fn test_coefficient_matrix() {
        let a = build_coefficient_matrix(&wheat_iron(), &[575.0, 20.0]).unwrap();
        assert!((a[(0, 0)] - 0.4870).abs() < 1e-4);
        assert_eq!(a[(0, 1)], 6.0);
        assert!((a[(1, 0)] - 0.02087).abs() < 1e-5);
        assert_eq!(a[(1, 1)], 0.4);
    }

    #[test]
    fn test_zero_output_column_is_zero() {
        let a = build_coefficient_matrix(&wheat_iron(), &[575.0, 0.0]).unwrap();
        assert_eq!(a[(0, 1)], 0.0);
        assert_eq!(a[(1, 1)], 0.0);
        assert!(a[(0, 0)] > 0.0);
    }

    #[test]
    fn test_coefficient_shape_mismatch() {
        assert!(build_coefficient_matrix(&wheat_iron(), &[575.0]).is_err());
    }

    #[test]
    fn test_labor_vector() {
        let l = build_labor_vector(&[18.0, 12.0], &[575.0, 20.0], 2.0).unwrap();
        assert!((l[0] - 36.0 / 575.0).abs() < 1e-15);
        assert!((l[1] - 1.2).abs() < 1e-15);
    }

    #[test]
    fn test_labor_vector_zero_output() {
        let l = build_labor_vector(&[18.0, 12.0], &[0.0, 20.0], 1.0).unwrap();
        assert_eq!(l[0], 0.0);
    }

    #[test]
    fn test_labor_vector_length_mismatch() {
        assert!(matches!(
            build_labor_vector(&[18.0], &[575.0, 20.0], 1.0),
            Err(ModelError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn test_zero_output_columns() {
        assert_eq!(zero_output_columns(&[1.0, 0.0, 3.0, 0.0]), vec![1, 3]);
        assert!(zero_output_columns(&[1.0]).is_empty());
    }

    #[test]
    fn test_policy_tolerate() {
        let model = EconomicModel::default();
        assert!(model.coefficients(&wheat_iron(), &[575.0, 0.0]).is_ok());
    }

    #[test]
    fn test_policy_reject() {
        let model = EconomicModel::new(ModelConfig {
            zero_output: ZeroOutputPolicy::Reject,
            ..Default::default()
        })
        .unwrap();
        assert!(matches!(
            model.coefficients(&wheat_iron(), &[575.0, 0.0]),
            Err(ModelError::ZeroOutput { index: 1 })
        ));
        assert!(model.coefficients(&wheat_iron(), &[575.0, 20.0]).is_ok());
    }
}
