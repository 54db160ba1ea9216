//! # Sraffa
//!
//! A classical input-output price engine: maximum profit rate, prices of
//! production and income distribution from an inter-industry table.
//!
//! One `use sraffa::prelude::*;` gives you the matrix type, the solvers and
//! the economic model.
//!
//! | Crate          | Provides                                              |
//! |----------------|-------------------------------------------------------|
//! | [`core`]       | `Matrix`, Gaussian elimination, power iteration        |
//! | [`model`]      | Snapshots, prices, distribution, sweeps, commentary    |
//!
//! The `cli` feature (on by default) builds the `sraffa` binary, which
//! evaluates a JSON snapshot file.

pub use sraffa_core as core;
pub use sraffa_model as model;

/// Glob-import convenience: `use sraffa::prelude::*;`
pub mod prelude {
    pub use sraffa_core::prelude::*;
    pub use sraffa_model::prelude::*;
}
