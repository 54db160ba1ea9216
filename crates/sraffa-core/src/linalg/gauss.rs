//! Gaussian elimination with partial pivoting.
//!
//! Solves a single dense system `Ax = b` by reducing the augmented matrix
//! `[A | b]` to upper-triangular form and back-substituting. The caller's
//! matrix and right-hand side are only read; all elimination happens in a
//! private working buffer, so repeated calls with the same arguments return
//! bit-identical results.

use tracing::{debug, trace};

use crate::Float;
use crate::error::{CoreError, Result};
use crate::linalg::blas::iamax;
use crate::matrix::Matrix;

/// Pivots with magnitude below this are treated as zero.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// Solve `Ax = b`, returning `None` when `A` is singular.
///
/// A shape mismatch between `a` and `b` is also reported as `None`; use
/// [`try_solve`] to tell the two apart.
///
/// ```
/// # use sraffa_core::{Matrix, linalg};
/// let a = Matrix::from_vec(vec![2.0_f64, 1.0, 1.0, 4.0], 2, 2).unwrap();
/// let x = linalg::solve(&a, &[5.0, 6.0]).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-10);
/// assert!((x[1] - 1.0).abs() < 1e-10);
/// ```
pub fn solve<T: Float>(a: &Matrix<T>, b: &[T]) -> Option<Vec<T>> {
    try_solve(a, b).ok()
}

/// Solve `Ax = b` with the default [`PIVOT_TOLERANCE`].
pub fn try_solve<T: Float>(a: &Matrix<T>, b: &[T]) -> Result<Vec<T>> {
    try_solve_with_tolerance(a, b, T::from_f64(PIVOT_TOLERANCE))
}

/// Solve `Ax = b`, treating any pivot with `|pivot| < tol` as singular.
///
/// # Errors
///
/// - [`CoreError::DimensionMismatch`] if `a` is not `n x n` with `b.len() == n`.
/// - [`CoreError::SingularMatrix`] with the elimination step at which no
///   usable pivot was found.
pub fn try_solve_with_tolerance<T: Float>(a: &Matrix<T>, b: &[T], tol: T) -> Result<Vec<T>> {
    let n = b.len();
    a.check_square(n)?;

    // Augmented working copy [A | b], row-major with width n + 1.
    let w = n + 1;
    let mut aug: Vec<T> = Vec::with_capacity(n * w);
    for (row, &bi) in a.rows().take(n).zip(b.iter()) {
        aug.extend_from_slice(row);
        aug.push(bi);
    }

    let mut column = vec![T::zero(); n];
    for k in 0..n {
        // Pivot: row with largest |aug[i, k]| for i >= k
        for (i, c) in column.iter_mut().enumerate().skip(k) {
            *c = aug[i * w + k];
        }
        let max_row = iamax(&column, k).unwrap_or(k);
        if max_row != k {
            for j in 0..w {
                aug.swap(k * w + j, max_row * w + j);
            }
        }

        let pivot = aug[k * w + k];
        if pivot.abs() < tol {
            debug!(step = k, pivot = pivot.to_f64(), "singular system: pivot below tolerance");
            return Err(CoreError::SingularMatrix { step: k });
        }
        trace!(step = k, row = max_row, pivot = pivot.to_f64(), "pivot selected");

        // Eliminate below the pivot across columns k..=n
        for i in (k + 1)..n {
            let factor = aug[i * w + k] / pivot;
            for j in k..w {
                let akj = aug[k * w + j];
                aug[i * w + j] -= factor * akj;
            }
        }
    }

    // Back substitution. x[j] for j > i is already resolved when row i is
    // processed, so index loops read more clearly than iterators here.
    let mut x = vec![T::zero(); n];
    #[allow(clippy::needless_range_loop)]
    for i in (0..n).rev() {
        let mut sum = aug[i * w + n];
        for j in (i + 1)..n {
            sum -= aug[i * w + j] * x[j];
        }
        x[i] = sum / aug[i * w + i];
    }

    Ok(x)
}
