//! Basic / non-basic classification.
//!
//! Commodity `i` is basic when it enters, directly or through other inputs,
//! into the production of every commodity, itself included. Only the
//! non-zero pattern of the input table matters.

use sraffa_core::Matrix;

/// `true` at index `i` when commodity `i` is basic.
///
/// ```
/// # use sraffa_core::Matrix;
/// # use sraffa_model::basic_commodities;
/// // Wheat feeds both industries; luxury feeds nothing.
/// let input = Matrix::from_rows(&[vec![5.0, 3.0], vec![0.0, 0.0]]).unwrap();
/// assert_eq!(basic_commodities(&input), vec![true, false]);
/// ```
pub fn basic_commodities(input: &Matrix<f64>) -> Vec<bool> {
    let n = input.nrows().min(input.ncols());
    (0..n).map(|i| reaches_all(input, n, i)).collect()
}

/// Whether every industry is reachable from `start` along `input[i][j] != 0`
/// edges, using paths of length at least one.
fn reaches_all(input: &Matrix<f64>, n: usize, start: usize) -> bool {
    let mut seen = vec![false; n];
    let mut stack = vec![start];
    while let Some(i) = stack.pop() {
        for j in 0..n {
            if input[(i, j)] != 0.0 && !seen[j] {
                seen[j] = true;
                stack.push(j);
            }
        }
    }
    seen.into_iter().all(|s| s)
}
