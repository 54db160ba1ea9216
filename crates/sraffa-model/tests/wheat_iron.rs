//! End-to-end checks on the two-commodity wheat/iron economy.

use approx::{assert_abs_diff_eq, assert_relative_eq};
use sraffa_core::Matrix;
use sraffa_core::linalg::{dominant_eigenvalue, matvec, solve};
use sraffa_model::prelude::*;
use sraffa_model::{
    build_coefficient_matrix, build_labor_vector, cost_breakdown, max_profit_rate,
    price_system_matrix, sraffian_prices,
};

const OUTPUTS: [f64; 2] = [575.0, 20.0];
const LABOR: [f64; 2] = [18.0, 12.0];

fn input() -> Matrix<f64> {
    Matrix::from_rows(&[vec![280.0, 120.0], vec![12.0, 8.0]]).unwrap()
}

fn snapshot(r: f64) -> Snapshot {
    Snapshot::new(
        vec![
            Commodity::new(1, "wheat", OUTPUTS[0], LABOR[0]),
            Commodity::new(2, "iron", OUTPUTS[1], LABOR[1]),
        ],
        input(),
        r,
        1.0,
    )
    .unwrap()
}

#[test]
fn coefficient_matrix_matches_reference() {
    let a = build_coefficient_matrix(&input(), &OUTPUTS).unwrap();
    assert_abs_diff_eq!(a[(0, 0)], 0.4870, epsilon = 1e-4);
    assert_abs_diff_eq!(a[(0, 1)], 6.0, epsilon = 1e-12);
    assert_abs_diff_eq!(a[(1, 0)], 0.02087, epsilon = 1e-5);
    assert_abs_diff_eq!(a[(1, 1)], 0.4, epsilon = 1e-12);
}

#[test]
fn dominant_eigenvalue_and_max_rate() {
    let a = build_coefficient_matrix(&input(), &OUTPUTS).unwrap();
    let lambda = dominant_eigenvalue(&a).unwrap();
    assert_relative_eq!(lambda, 0.8, epsilon = 1e-10);
    let r_max = max_profit_rate(&input(), &OUTPUTS).unwrap();
    assert_relative_eq!(r_max, 1.0 / lambda - 1.0, epsilon = 1e-12);
    assert_relative_eq!(r_max, 0.25, epsilon = 1e-9);
}

#[test]
fn prices_positive_below_max_rate() {
    let out = sraffian_prices(&input(), &LABOR, &OUTPUTS, 0.15, 1.0).unwrap();
    assert!(out.is_valid());
    let p = out.prices();
    assert_eq!(p.len(), 2);
    assert!(p.iter().all(|&x| x > 0.0));
    assert_relative_eq!(p[0], 10.0 / 23.0, epsilon = 1e-9);
    assert_relative_eq!(p[1], 20.0 / 3.0, epsilon = 1e-9);
}

#[test]
fn prices_solve_the_price_system() {
    let a = build_coefficient_matrix(&input(), &OUTPUTS).unwrap();
    let l = build_labor_vector(&LABOR, &OUTPUTS, 1.0).unwrap();
    let s = price_system_matrix(&a, 0.15);
    let p = solve(&s, &l).unwrap();
    let sp = matvec(&s, &p).unwrap();
    for (lhs, rhs) in sp.iter().zip(&l) {
        assert_abs_diff_eq!(*lhs, *rhs, epsilon = 1e-6);
    }
}

#[test]
fn invalid_at_and_beyond_max_rate() {
    let r_max = max_profit_rate(&input(), &OUTPUTS).unwrap();
    for r in [r_max, r_max + 0.01, 0.5, 1.0] {
        let out = sraffian_prices(&input(), &LABOR, &OUTPUTS, r, 1.0).unwrap();
        assert!(!out.is_valid(), "r = {r} should not be valid");
    }
    let beyond = sraffian_prices(&input(), &LABOR, &OUTPUTS, r_max + 0.05, 1.0).unwrap();
    assert!(matches!(beyond, PriceOutcome::Invalid(_)));
    assert!(beyond.min_price().unwrap() < 0.0);
}

#[test]
fn breakdowns_sum_to_prices() {
    let s = snapshot(0.15);
    let p = sraffian_prices(&input(), &LABOR, &OUTPUTS, 0.15, 1.0)
        .unwrap()
        .into_prices();
    for idx in 0..2 {
        let b = cost_breakdown(&s.commodities, &s.input_matrix, &p, 0.15, 1.0, idx).unwrap();
        assert_relative_eq!(b.total_cost(), p[idx], epsilon = 1e-9);
    }
}

#[test]
fn evaluation_is_consistent() {
    let ev = EconomicModel::default().evaluate(&snapshot(0.15)).unwrap();
    assert!(ev.is_valid());
    let d = ev.distribution.unwrap();
    assert_relative_eq!(d.total_wages, 30.0);
    assert_relative_eq!(d.wage_share + d.profit_share, 100.0, epsilon = 1e-9);
    assert_relative_eq!(d.total_profits, d.total_capital * 0.15, epsilon = 1e-12);
    for (b, &p) in ev.breakdowns.iter().zip(ev.prices.prices()) {
        assert_relative_eq!(b.price, p);
        assert_relative_eq!(b.total_cost(), p, epsilon = 1e-9);
    }
}

#[test]
fn evaluation_is_idempotent() {
    let model = EconomicModel::default();
    let s = snapshot(0.2);
    assert_eq!(model.evaluate(&s).unwrap(), model.evaluate(&s).unwrap());
}

#[test]
fn early_exit_agrees_with_fixed_budget() {
    let fixed = EconomicModel::default().evaluate(&snapshot(0.15)).unwrap();
    let mut cfg = ModelConfig::default();
    cfg.power.convergence_tol = Some(1e-14);
    let early = EconomicModel::new(cfg).unwrap().evaluate(&snapshot(0.15)).unwrap();
    assert_relative_eq!(early.max_profit_rate, fixed.max_profit_rate, epsilon = 1e-10);
    assert_eq!(early.prices, fixed.prices);
}

#[test]
fn sweep_crosses_the_boundary() {
    let points = EconomicModel::default().sweep(&snapshot(0.0), 20).unwrap();
    let (last, below) = points.split_last().unwrap();
    assert!(below.iter().all(|p| p.is_valid));
    assert!(!last.is_valid);
}

#[test]
fn zero_output_tolerated_by_default() {
    let mut s = snapshot(0.1);
    s.commodities[1].total_output = 0.0;
    let ev = EconomicModel::default().evaluate(&s).unwrap();
    // Iron drops out: no inputs, no labor, so its price is zero.
    assert_eq!(ev.prices.prices()[1], 0.0);
    assert_eq!(ev.breakdowns[1].wage_cost, 0.0);
}

#[test]
fn zero_output_rejected_when_configured() {
    let mut s = snapshot(0.1);
    s.commodities[1].total_output = 0.0;
    let model = EconomicModel::new(ModelConfig {
        zero_output: ZeroOutputPolicy::Reject,
        ..Default::default()
    })
    .unwrap();
    let err = model.evaluate(&s).unwrap_err();
    assert!(matches!(err, ModelError::ZeroOutput { index: 1 }));
    assert_eq!(err.to_string(), "commodity 1 has zero total output");
}

#[test]
fn snapshot_from_json_evaluates() {
    let json = serde_json::to_string(&snapshot(0.15)).unwrap();
    let s = Snapshot::from_json_str(&json).unwrap();
    let ev = EconomicModel::default().evaluate(&s).unwrap();
    let back: Evaluation = serde_json::from_str(&serde_json::to_string(&ev).unwrap()).unwrap();
    assert_eq!(back.prices.prices().len(), 2);
    assert!(back.is_valid());
}
