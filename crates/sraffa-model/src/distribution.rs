//! Income distribution and per-commodity cost decomposition.

use serde::{Deserialize, Serialize};
use sraffa_core::Matrix;

use crate::commodity::{Commodity, per_unit};
use crate::error::{ModelError, Result, check_len};

/// Aggregate wages, profits and their shares of the net product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Distribution {
    /// `sum_j w * L[j]`.
    pub total_wages: f64,
    /// `total_capital * r`.
    pub total_profits: f64,
    /// `total_wages + total_profits`.
    pub net_product: f64,
    /// Value of the means of production, `sum_j sum_i p[i] * input[i][j]`.
    pub total_capital: f64,
    /// Percent of the net product going to wages.
    pub wage_share: f64,
    /// Percent of the net product going to profits.
    pub profit_share: f64,
}

/// How one unit of a commodity's price splits into cost components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Value of the inputs used per unit, `sum_i p[i] * A[i][idx]`.
    pub constant_capital_value: f64,
    /// `constant_capital_value * r`.
    pub profit: f64,
    /// `(L[idx] / X[idx]) * w`.
    pub wage_cost: f64,
    pub price: f64,
}

impl CostBreakdown {
    /// Sum of the three components; equals `price` whenever prices solve
    /// the price system.
    pub fn total_cost(&self) -> f64 {
        self.constant_capital_value + self.profit + self.wage_cost
    }
}

/// Aggregate distribution for a set of prices.
///
/// When the net product is exactly zero both shares read zero.
pub fn aggregate_distribution(
    commodities: &[Commodity],
    input: &Matrix<f64>,
    prices: &[f64],
    profit_rate: f64,
    wage: f64,
) -> Result<Distribution> {
    let n = commodities.len();
    check_shapes(n, input, prices)?;

    let total_wages: f64 = commodities.iter().map(|c| wage * c.labor_input).sum();
    let total_capital: f64 = (0..n)
        .map(|j| {
            input
                .column(j)
                .zip(prices)
                .map(|(q, &p)| p * q)
                .sum::<f64>()
        })
        .sum();
    let total_profits = total_capital * profit_rate;
    let net_product = total_wages + total_profits;
    let denominator = if net_product == 0.0 { 1.0 } else { net_product };

    Ok(Distribution {
        total_wages,
        total_profits,
        net_product,
        total_capital,
        wage_share: total_wages / denominator * 100.0,
        profit_share: total_profits / denominator * 100.0,
    })
}

/// Cost decomposition of commodity `idx`.
pub fn cost_breakdown(
    commodities: &[Commodity],
    input: &Matrix<f64>,
    prices: &[f64],
    profit_rate: f64,
    wage: f64,
    idx: usize,
) -> Result<CostBreakdown> {
    let n = commodities.len();
    let commodity = commodities
        .get(idx)
        .ok_or(ModelError::CommodityOutOfRange { index: idx, len: n })?;
    check_shapes(n, input, prices)?;

    let output = commodity.total_output;
    let constant_capital_value: f64 = input
        .column(idx)
        .zip(prices)
        .map(|(q, &p)| p * per_unit(q, output))
        .sum();

    Ok(CostBreakdown {
        constant_capital_value,
        profit: constant_capital_value * profit_rate,
        wage_cost: commodity.labor_per_unit() * wage,
        price: prices[idx],
    })
}

/// Breakdowns for every commodity, in order.
pub fn cost_breakdowns(
    commodities: &[Commodity],
    input: &Matrix<f64>,
    prices: &[f64],
    profit_rate: f64,
    wage: f64,
) -> Result<Vec<CostBreakdown>> {
    (0..commodities.len())
        .map(|idx| cost_breakdown(commodities, input, prices, profit_rate, wage, idx))
        .collect()
}

fn check_shapes(n: usize, input: &Matrix<f64>, prices: &[f64]) -> Result<()> {
    let (rows, cols) = input.shape();
    if rows != n || cols != n {
        return Err(ModelError::DimensionMismatch {
            rows,
            cols,
            commodities: n,
        });
    }
    check_len("prices", n, prices.len())
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn commodities() -> Vec<Commodity> {
        vec![
            Commodity::new(1, "wheat", 575.0, 18.0),
            Commodity::new(2, "iron", 20.0, 12.0),
        ]
    }

    fn input() -> Matrix<f64> {
        Matrix::from_rows(&[vec![280.0, 120.0], vec![12.0, 8.0]]).unwrap()
    }

    // Prices of the wheat/iron system at r = 0.15, w = 1.
    const PRICES: [f64; 2] = [10.0 / 23.0, 20.0 / 3.0];

    #[test]
    fn test_distribution_totals() {
        let d = aggregate_distribution(&commodities(), &input(), &PRICES, 0.15, 1.0).unwrap();
        assert_eq!(d.total_wages, 30.0);
        let capital = PRICES[0] * 400.0 + PRICES[1] * 20.0;
        assert!((d.total_capital - capital).abs() < 1e-9);
        assert!((d.total_profits - capital * 0.15).abs() < 1e-9);
        assert!((d.net_product - (30.0 + capital * 0.15)).abs() < 1e-9);
        assert!((d.wage_share + d.profit_share - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_distribution_zero_net_product() {
        let d = aggregate_distribution(&commodities(), &input(), &PRICES, 0.0, 0.0).unwrap();
        assert_eq!(d.net_product, 0.0);
        assert_eq!(d.wage_share, 0.0);
        assert_eq!(d.profit_share, 0.0);
    }

    #[test]
    fn test_distribution_shape_errors() {
        assert!(aggregate_distribution(&commodities(), &input(), &[1.0], 0.1, 1.0).is_err());
        assert!(
            aggregate_distribution(&commodities(), &Matrix::zeros(3, 3), &PRICES, 0.1, 1.0)
                .is_err()
        );
    }

    #[test]
    fn test_breakdown_sums_to_price() {
        for idx in 0..2 {
            let b = cost_breakdown(&commodities(), &input(), &PRICES, 0.15, 1.0, idx).unwrap();
            assert!((b.total_cost() - b.price).abs() < 1e-9);
        }
    }

    #[test]
    fn test_breakdown_components() {
        let b = cost_breakdown(&commodities(), &input(), &PRICES, 0.15, 1.0, 1).unwrap();
        let ccv = PRICES[0] * 6.0 + PRICES[1] * 0.4;
        assert!((b.constant_capital_value - ccv).abs() < 1e-12);
        assert!((b.profit - ccv * 0.15).abs() < 1e-12);
        assert!((b.wage_cost - 0.6).abs() < 1e-12);
        assert_eq!(b.price, PRICES[1]);
    }

    #[test]
    fn test_breakdown_zero_output() {
        let mut cs = commodities();
        cs[1].total_output = 0.0;
        let b = cost_breakdown(&cs, &input(), &PRICES, 0.15, 1.0, 1).unwrap();
        assert_eq!(b.constant_capital_value, 0.0);
        assert_eq!(b.wage_cost, 0.0);
    }

    #[test]
    fn test_breakdown_out_of_range() {
        assert!(matches!(
            cost_breakdown(&commodities(), &input(), &PRICES, 0.15, 1.0, 2),
            Err(ModelError::CommodityOutOfRange { index: 2, len: 2 })
        ));
    }

    #[test]
    fn test_all_breakdowns() {
        let all = cost_breakdowns(&commodities(), &input(), &PRICES, 0.15, 1.0).unwrap();
        assert_eq!(all.len(), 2);
    }
}
