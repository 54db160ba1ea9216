//! Commodity records supplied by the editing layer.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of a commodity, independent of its position in the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CommodityId(pub u64);

impl fmt::Display for CommodityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A produced good, standing for its single-product industry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Commodity {
    pub id: CommodityId,
    pub name: String,
    /// Gross output `X` of the industry. Zero is tolerated.
    pub total_output: f64,
    /// Labor `L` employed by the industry.
    pub labor_input: f64,
}

impl Commodity {
    pub fn new(id: u64, name: impl Into<String>, total_output: f64, labor_input: f64) -> Self {
        Self {
            id: CommodityId(id),
            name: name.into(),
            total_output,
            labor_input,
        }
    }

    /// Labor per unit of output, `L / X`, or zero when nothing is produced.
    pub fn labor_per_unit(&self) -> f64 {
        per_unit(self.labor_input, self.total_output)
    }
}

/// `x / output`, defined as zero for a zero output.
#[inline]
pub(crate) fn per_unit(x: f64, output: f64) -> f64 {
    if output == 0.0 { 0.0 } else { x / output }
}

/// Gross outputs `X` in commodity order.
pub fn total_outputs(commodities: &[Commodity]) -> Vec<f64> {
    commodities.iter().map(|c| c.total_output).collect()
}

/// Labor inputs `L` in commodity order.
pub fn labor_inputs(commodities: &[Commodity]) -> Vec<f64> {
    commodities.iter().map(|c| c.labor_input).collect()
}
