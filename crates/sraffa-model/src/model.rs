//! The economic model: one full evaluation per snapshot.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::basics::basic_commodities;
use crate::coefficients::build_labor_vector;
use crate::config::ModelConfig;
use crate::distribution::{CostBreakdown, Distribution, aggregate_distribution, cost_breakdowns};
use crate::error::Result;
use crate::prices::PriceOutcome;
use crate::snapshot::Snapshot;

/// Stateless evaluator parameterised by a [`ModelConfig`].
///
/// Holding a model across recomputations is safe: it carries only
/// configuration, and every method is a pure function of its arguments.
#[derive(Debug, Clone, Default)]
pub struct EconomicModel {
    config: ModelConfig,
}

/// Everything derived from one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub profit_rate: f64,
    pub wage: f64,
    pub max_profit_rate: f64,
    pub prices: PriceOutcome,
    /// `None` when the price system is singular.
    pub distribution: Option<Distribution>,
    /// One entry per commodity; empty when the price system is singular.
    pub breakdowns: Vec<CostBreakdown>,
    /// Basic/non-basic flag per commodity.
    pub basics: Vec<bool>,
}

impl Evaluation {
    pub fn is_valid(&self) -> bool {
        self.prices.is_valid()
    }
}

impl EconomicModel {
    /// Build a model after checking `config` with [`ModelConfig::validate`].
    pub fn new(config: ModelConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    /// Evaluate a snapshot: maximum profit rate, prices, distribution and
    /// per-commodity cost breakdowns.
    ///
    /// Runs the eigenvalue estimate once and the linear solve once.
    pub fn evaluate(&self, snapshot: &Snapshot) -> Result<Evaluation> {
        snapshot.validate()?;
        let outputs = snapshot.total_outputs();
        let a = self.coefficients(&snapshot.input_matrix, &outputs)?;
        let l = build_labor_vector(&snapshot.labor_inputs(), &outputs, snapshot.wage)?;

        let max_profit_rate = self.max_profit_rate_of(&a)?;
        let prices = self.prices_of(&a, &l, snapshot.profit_rate)?;

        let (distribution, breakdowns) = match &prices {
            PriceOutcome::Singular => (None, Vec::new()),
            PriceOutcome::Valid(p) | PriceOutcome::Invalid(p) => {
                let Snapshot {
                    commodities,
                    input_matrix,
                    profit_rate,
                    wage,
                } = snapshot;
                let d = aggregate_distribution(commodities, input_matrix, p, *profit_rate, *wage)?;
                let b = cost_breakdowns(commodities, input_matrix, p, *profit_rate, *wage)?;
                (Some(d), b)
            }
        };

        debug!(
            commodities = snapshot.len(),
            profit_rate = snapshot.profit_rate,
            max_profit_rate,
            valid = prices.is_valid(),
            "snapshot evaluated"
        );

        Ok(Evaluation {
            profit_rate: snapshot.profit_rate,
            wage: snapshot.wage,
            max_profit_rate,
            prices,
            distribution,
            breakdowns,
            basics: basic_commodities(&snapshot.input_matrix),
        })
    }
}
