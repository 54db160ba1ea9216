//! `sraffa-model` — classical input-output price model.
//!
//! Given commodity outputs, an inter-industry input table, labor inputs, a
//! profit rate and a wage, computes:
//!
//! - the maximum profit rate `R = 1/lambda - 1` from the dominant eigenvalue
//!   of the coefficient matrix,
//! - prices of production solving `p = (1 + r) A^T p + l`,
//! - per-commodity cost breakdowns and the aggregate wage/profit split.
//!
//! Everything is recomputed from an immutable [`Snapshot`] on each call. No
//! state survives between evaluations, so concurrent evaluations of
//! different snapshots need no coordination.
//!
//! ```
//! use sraffa_core::Matrix;
//! use sraffa_model::{Commodity, EconomicModel, Snapshot};
//!
//! let snapshot = Snapshot::new(
//!     vec![
//!         Commodity::new(1, "wheat", 575.0, 18.0),
//!         Commodity::new(2, "iron", 20.0, 12.0),
//!     ],
//!     Matrix::from_rows(&[vec![280.0, 120.0], vec![12.0, 8.0]]).unwrap(),
//!     0.15,
//!     1.0,
//! )
//! .unwrap();
//! let ev = EconomicModel::default().evaluate(&snapshot).unwrap();
//! assert!(ev.is_valid());
//! assert!((ev.max_profit_rate - 0.25).abs() < 1e-9);
//! ```

pub mod basics;
pub mod coefficients;
pub mod commentary;
pub mod commodity;
pub mod config;
pub mod distribution;
pub mod error;
pub mod model;
pub mod prices;
pub mod snapshot;
pub mod sweep;

pub use basics::basic_commodities;
pub use coefficients::{build_coefficient_matrix, build_labor_vector, zero_output_columns};
pub use commentary::{Commentary, CommentaryError, NoCommentary, annotate, summary};
pub use commodity::{Commodity, CommodityId};
pub use config::{ModelConfig, ZeroOutputPolicy};
pub use distribution::{
    CostBreakdown, Distribution, aggregate_distribution, cost_breakdown, cost_breakdowns,
};
pub use error::{ModelError, Result};
pub use model::{EconomicModel, Evaluation};
pub use prices::{PriceOutcome, max_profit_rate, price_system_matrix, sraffian_prices};
pub use snapshot::Snapshot;
pub use sweep::SweepPoint;

/// Items intended for glob-import: `use sraffa_model::prelude::*;`
pub mod prelude {
    pub use crate::commodity::{Commodity, CommodityId};
    pub use crate::config::{ModelConfig, ZeroOutputPolicy};
    pub use crate::error::{ModelError, Result};
    pub use crate::model::{EconomicModel, Evaluation};
    pub use crate::prices::PriceOutcome;
    pub use crate::snapshot::Snapshot;
}
