//! Dominant eigenvalue by power iteration.
//!
//! For a non-negative irreducible matrix the iteration converges to the
//! Perron root and its positive eigenvector. Nothing here checks that
//! precondition: on other inputs the routine returns whatever the iteration
//! settles on after its budget.
//!
//! The eigenvalue is read off with the Rayleigh quotient `v^T A v` of the
//! final unit vector `v`.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::Float;
use crate::error::Result;
use crate::linalg::blas::{dot, matvec, nrm2, scal};
use crate::matrix::Matrix;

/// Default iteration ceiling.
pub const MAX_ITERATIONS: usize = 1000;

/// Iterates whose norm falls below this are treated as annihilated.
pub const ZERO_NORM: f64 = 1e-12;

/// Tuning knobs for [`PowerIteration`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PowerIterationOptions {
    /// Hard ceiling on the number of `A * v` products.
    pub max_iterations: usize,
    /// Norm below which `A * v` counts as the zero vector.
    pub zero_norm: f64,
    /// Stop early once successive Rayleigh estimates differ by less than
    /// this. `None` always runs the full `max_iterations`.
    pub convergence_tol: Option<f64>,
}

impl Default for PowerIterationOptions {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            zero_norm: ZERO_NORM,
            convergence_tol: None,
        }
    }
}

/// Why the iteration stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// `A * v` vanished; the eigenvalue is reported as zero.
    Annihilated,
    /// Successive estimates agreed within `convergence_tol`.
    Converged,
    /// Ran the full iteration budget.
    Exhausted,
}

/// Result of a power iteration run.
#[derive(Debug, Clone, PartialEq)]
pub struct DominantEigen<T: Float> {
    /// Estimated dominant eigenvalue.
    pub value: T,
    /// Unit-norm estimate of the associated eigenvector.
    pub vector: Vec<T>,
    /// Number of matrix-vector products performed.
    pub iterations: usize,
    pub termination: Termination,
}

/// Power iteration driver.
///
/// ```
/// # use sraffa_core::{Matrix, linalg::PowerIteration};
/// let a = Matrix::from_diag(&[0.6_f64, 0.3]);
/// let eig = PowerIteration::default().run(&a).unwrap();
/// assert!((eig.value - 0.6).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerIteration {
    options: PowerIterationOptions,
}

impl PowerIteration {
    pub fn new(options: PowerIterationOptions) -> Self {
        Self { options }
    }

    /// Run the iteration on a square matrix.
    ///
    /// Starts from the uniform unit vector `1/sqrt(n)`. An empty matrix has
    /// dominant eigenvalue zero.
    pub fn run<T: Float>(&self, a: &Matrix<T>) -> Result<DominantEigen<T>> {
        let n = a.nrows();
        a.check_square(n)?;
        if n == 0 {
            return Ok(DominantEigen {
                value: T::zero(),
                vector: Vec::new(),
                iterations: 0,
                termination: Termination::Annihilated,
            });
        }

        let zero_norm = T::from_f64(self.options.zero_norm);
        let tol = self.options.convergence_tol.map(T::from_f64);

        let mut v = vec![T::from_usize(n).sqrt().recip(); n];
        let mut previous: Option<T> = None;
        let mut termination = Termination::Exhausted;
        let mut iterations = 0;

        while iterations < self.options.max_iterations {
            iterations += 1;
            let mut w = matvec(a, &v)?;
            let norm = nrm2(&w);
            if norm < zero_norm {
                debug!(iterations, "power iteration annihilated the iterate");
                return Ok(DominantEigen {
                    value: T::zero(),
                    vector: v,
                    iterations,
                    termination: Termination::Annihilated,
                });
            }

            // Rayleigh estimate for the current v, only needed for early exit.
            let estimate = match tol {
                Some(_) => Some(dot(&v, &w)?),
                None => None,
            };

            scal(norm.recip(), &mut w);
            v = w;

            if let (Some(tol), Some(lambda), Some(prev)) = (tol, estimate, previous) {
                if (lambda - prev).abs() < tol {
                    termination = Termination::Converged;
                    break;
                }
            }
            previous = estimate;
        }

        let av = matvec(a, &v)?;
        let value = dot(&v, &av)?;
        trace!(
            iterations,
            value = value.to_f64(),
            ?termination,
            "power iteration finished"
        );

        Ok(DominantEigen {
            value,
            vector: v,
            iterations,
            termination,
        })
    }
}

/// Dominant eigenvalue of `a` with the default 1000-step budget.
///
/// ```
/// # use sraffa_core::{Matrix, linalg::dominant_eigenvalue};
/// let eye = Matrix::<f64>::eye(4);
/// assert!((dominant_eigenvalue(&eye).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn dominant_eigenvalue<T: Float>(a: &Matrix<T>) -> Result<T> {
    PowerIteration::default().run(a).map(|eig| eig.value)
}
