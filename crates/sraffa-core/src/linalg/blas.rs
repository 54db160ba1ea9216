//! BLAS-style kernels on slices and [`Matrix`].
//!
//! Every function validates lengths and returns [`Result`] on mismatch, so
//! the solvers built on top can propagate with `?`.

use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::{Float, Scalar};

// ======================================================================
// Level 1 — vector operations, O(n)
// ======================================================================

/// Inner product `sum(x_i * y_i)`.
///
/// ```
/// # use sraffa_core::linalg::dot;
/// let d = dot(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap();
/// assert!((d - 32.0).abs() < 1e-10);
/// ```
pub fn dot<T: Scalar>(x: &[T], y: &[T]) -> Result<T> {
    check_lengths(x.len(), y.len())?;
    Ok(x.iter()
        .zip(y.iter())
        .fold(T::zero(), |acc, (&a, &b)| acc + a * b))
}

/// Euclidean norm `sqrt(sum(x_i^2))`.
///
/// ```
/// # use sraffa_core::linalg::nrm2;
/// assert!((nrm2(&[3.0_f64, 4.0]) - 5.0).abs() < 1e-10);
/// ```
pub fn nrm2<T: Float>(x: &[T]) -> T {
    x.iter().fold(T::zero(), |acc, &v| acc + v * v).sqrt()
}

/// Scale a vector in place: `x = alpha * x`.
pub fn scal<T: Scalar>(alpha: T, x: &mut [T]) {
    for v in x {
        *v *= alpha;
    }
}

/// Index of the element with the largest absolute value among `x[from..]`.
///
/// Ties keep the earliest index. Returns `None` when the range is empty.
pub fn iamax<T: Float>(x: &[T], from: usize) -> Option<usize> {
    let mut best: Option<(usize, T)> = None;
    for (i, &v) in x.iter().enumerate().skip(from) {
        let a = v.abs();
        match best {
            Some((_, b)) if a <= b => {}
            _ => best = Some((i, a)),
        }
    }
    best.map(|(i, _)| i)
}

// ======================================================================
// Level 2 — matrix-vector operations, O(n^2)
// ======================================================================

/// `y = alpha * A * x + beta * y`.
pub fn gemv<T: Scalar>(alpha: T, a: &Matrix<T>, x: &[T], beta: T, y: &mut [T]) -> Result<()> {
    let (m, n) = a.shape();
    if x.len() != n {
        return Err(CoreError::DimensionMismatch {
            expected: vec![n],
            got: vec![x.len()],
        });
    }
    if y.len() != m {
        return Err(CoreError::DimensionMismatch {
            expected: vec![m],
            got: vec![y.len()],
        });
    }

    for (i, yi) in y.iter_mut().enumerate() {
        let sum = a
            .row(i)
            .iter()
            .zip(x.iter())
            .fold(T::zero(), |acc, (&aij, &xj)| acc + aij * xj);
        *yi = alpha * sum + beta * *yi;
    }
    Ok(())
}

/// Matrix-vector product `A * x` into a fresh vector.
///
/// ```
/// # use sraffa_core::{Matrix, linalg::matvec};
/// let a = Matrix::from_vec(vec![2.0_f64, 0.0, 1.0, 3.0], 2, 2).unwrap();
/// assert_eq!(matvec(&a, &[1.0, 1.0]).unwrap(), vec![2.0, 4.0]);
/// ```
pub fn matvec<T: Scalar>(a: &Matrix<T>, x: &[T]) -> Result<Vec<T>> {
    let mut y = vec![T::zero(); a.nrows()];
    gemv(T::one(), a, x, T::zero(), &mut y)?;
    Ok(y)
}

fn check_lengths(a: usize, b: usize) -> Result<()> {
    if a != b {
        return Err(CoreError::DimensionMismatch {
            expected: vec![a],
            got: vec![b],
        });
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_basic() {
        assert_eq!(dot(&[1.0_f64, 2.0, 3.0], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
    }

    #[test]
    fn test_dot_length_mismatch() {
        assert!(dot(&[1.0_f64, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_dot_empty() {
        assert_eq!(dot::<f64>(&[], &[]).unwrap(), 0.0);
    }

    #[test]
    fn test_nrm2() {
        assert_eq!(nrm2(&[3.0_f64, 4.0]), 5.0);
        assert_eq!(nrm2::<f64>(&[]), 0.0);
    }

    #[test]
    fn test_scal() {
        let mut x = [1.0_f64, 2.0, 3.0];
        scal(10.0, &mut x);
        assert_eq!(x, [10.0, 20.0, 30.0]);
    }

    #[test]
    fn test_iamax() {
        let x = [1.0_f64, -5.0, 3.0, 5.0];
        assert_eq!(iamax(&x, 0), Some(1));
        assert_eq!(iamax(&x, 2), Some(3));
        assert_eq!(iamax(&x, 4), None);
    }

    #[test]
    fn test_gemv_alpha_beta() {
        let a = Matrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0, 5.0, 6.0], 2, 3).unwrap();
        let mut y = [1.0_f64, 1.0];
        gemv(2.0, &a, &[1.0, 0.0, 1.0], 3.0, &mut y).unwrap();
        assert_eq!(y, [11.0, 23.0]);
    }

    #[test]
    fn test_gemv_dimension_mismatch() {
        let a = Matrix::<f64>::eye(2);
        let mut y = [0.0_f64; 2];
        assert!(gemv(1.0, &a, &[1.0], 0.0, &mut y).is_err());
        let mut short = [0.0_f64; 1];
        assert!(gemv(1.0, &a, &[1.0, 1.0], 0.0, &mut short).is_err());
    }
}
