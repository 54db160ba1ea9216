//! Dense square-or-rectangular matrix with contiguous row-major storage.
//!
//! [`Matrix`] is the value type every solver in this crate reads. It owns its
//! data, clones deeply, and is never mutated by the routines that consume it:
//! solvers copy into their own working buffers.

mod display;

use core::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense `nrows x ncols` matrix stored in row-major order.
///
/// Serializes as a list of rows (`[[a, b], [c, d]]`), the natural shape of an
/// input-output table in a snapshot file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<Vec<T>>",
    into = "Vec<Vec<T>>",
    bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>")
)]
pub struct Matrix<T: Scalar> {
    data: Vec<T>,
    nrows: usize,
    ncols: usize,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Create a matrix from flat row-major data.
    ///
    /// ```
    /// # use sraffa_core::Matrix;
    /// let m = Matrix::from_vec(vec![1.0_f64, 2.0, 3.0, 4.0], 2, 2).unwrap();
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_vec(data: Vec<T>, nrows: usize, ncols: usize) -> Result<Self> {
        if nrows * ncols != data.len() {
            return Err(CoreError::DimensionMismatch {
                expected: vec![nrows, ncols],
                got: vec![data.len()],
            });
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Create a matrix from a list of equally long rows.
    ///
    /// An empty list yields the `0 x 0` matrix.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self> {
        let nrows = rows.len();
        let ncols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(nrows * ncols);
        for row in rows {
            if row.len() != ncols {
                return Err(CoreError::DimensionMismatch {
                    expected: vec![ncols],
                    got: vec![row.len()],
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { data, nrows, ncols })
    }

    /// Build an `nrows x ncols` matrix by evaluating `f(row, col)`.
    pub fn from_fn<F>(nrows: usize, ncols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let mut data = Vec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }
        Self { data, nrows, ncols }
    }

    /// Create a matrix filled with zeros.
    pub fn zeros(nrows: usize, ncols: usize) -> Self {
        Self {
            data: vec![T::zero(); nrows * ncols],
            nrows,
            ncols,
        }
    }

    /// Create an `n x n` identity matrix.
    ///
    /// ```
    /// # use sraffa_core::Matrix;
    /// let eye = Matrix::<f64>::eye(3);
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn eye(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Create an `n x n` matrix with `diag` on the diagonal.
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m.data[i * n + i] = d;
        }
        m
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    #[inline]
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// `(nrows, ncols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Checked element access.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.nrows && col < self.ncols {
            Some(&self.data[row * self.ncols + col])
        } else {
            None
        }
    }

    /// Row `i` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `i >= nrows`.
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.nrows, "row {i} out of bounds for {} rows", self.nrows);
        &self.data[i * self.ncols..(i + 1) * self.ncols]
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks_exact(0) panics; a 0-column matrix has no row storage anyway
        self.data.chunks_exact(self.ncols.max(1))
    }

    /// Iterate over the entries of column `j`, top to bottom.
    pub fn column(&self, j: usize) -> impl Iterator<Item = T> + '_ {
        (0..self.nrows).map(move |i| self.data[i * self.ncols + j])
    }

    /// The transposed matrix (a new allocation).
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    /// Error unless the matrix is `n x n`.
    pub fn check_square(&self, n: usize) -> Result<()> {
        if self.nrows != n || self.ncols != n {
            return Err(CoreError::DimensionMismatch {
                expected: vec![n, n],
                got: vec![self.nrows, self.ncols],
            });
        }
        Ok(())
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        debug_assert!(row < self.nrows && col < self.ncols);
        &self.data[row * self.ncols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        debug_assert!(row < self.nrows && col < self.ncols);
        &mut self.data[row * self.ncols + col]
    }
}

impl<T: Scalar> TryFrom<Vec<Vec<T>>> for Matrix<T> {
    type Error = CoreError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl<T: Scalar> From<Matrix<T>> for Vec<Vec<T>> {
    fn from(m: Matrix<T>) -> Self {
        (0..m.nrows).map(|i| m.row(i).to_vec()).collect()
    }
}
