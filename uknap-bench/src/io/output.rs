use serde::{Deserialize, Serialize};

use crate::measure::Measurement;

/// Measurements of both solvers on a dataset, stored as `result.json`
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct MeasurementRecord {
    /// Number of item types in the dataset
    pub size: usize,
    /// Branch and bound
    pub bnb: Measurement,
    /// Dynamic programming
    pub dp: Measurement,
}
