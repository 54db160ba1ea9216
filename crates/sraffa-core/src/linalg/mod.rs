//! Linear algebra used by the price model.
//!
//! Everything is implemented from scratch over [`Matrix`](crate::Matrix) and
//! plain slices:
//!
//! | Module     | Operations                                 | Complexity     |
//! |------------|--------------------------------------------|----------------|
//! | [`blas`]   | `dot`, `nrm2`, `scal`, `iamax`, `gemv`     | O(n), O(n^2)   |
//! | [`gauss`]  | `solve` (Gaussian elimination, pivoting)   | O(n^3)         |
//! | [`power`]  | `dominant_eigenvalue` (power iteration)    | O(k n^2)       |

pub mod blas;
pub mod gauss;
pub mod power;

pub use blas::{dot, gemv, iamax, matvec, nrm2, scal};
pub use gauss::{PIVOT_TOLERANCE, solve, try_solve, try_solve_with_tolerance};
pub use power::{
    DominantEigen, PowerIteration, PowerIterationOptions, Termination, dominant_eigenvalue,
};
