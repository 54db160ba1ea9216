//! `sraffa-core` — numeric foundation for the sraffa price engine.
//!
//! Provides the scalar trait hierarchy, a dense [`Matrix`] value type, and
//! the two solvers the economic model composes: Gaussian elimination with
//! partial pivoting and a power-iteration estimate of the dominant
//! eigenvalue.
//!
//! # Design
//!
//! - Every routine is a pure function of its arguments. Inputs are borrowed
//!   immutably and copied before any in-place work.
//! - Generic over `f32`/`f64` via the [`Scalar`] / [`Float`] traits.
//! - Numerically singular systems are reported as values, never panics.

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;

// Re-export key types at crate root for convenience.
pub use dtype::{Float, Scalar};
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use sraffa_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{PowerIteration, PowerIterationOptions, dominant_eigenvalue, solve};
    pub use crate::matrix::Matrix;
}
