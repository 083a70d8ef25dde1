use serde::{Deserialize, Serialize};

/// Unbounded knapsack instance as it is stored on disk.
///
/// Numbers are signed so that invalid instances are rejected by [`import`](crate::io::import)
/// with a descriptive error instead of failing to deserialize.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Capacity of the knapsack
    pub capacity: i64,
    /// Value of each item type
    pub values: Vec<i64>,
    /// Weight of each item type, `weights[i]` belongs to `values[i]`
    pub weights: Vec<i64>,
}

/// Unbounded knapsack solution
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtSolution {
    /// Total value of the packed copies
    pub value: u64,
    /// Total weight of the packed copies
    pub weight: u64,
    /// Copies of each item type, in the order of the instance
    pub assignment: Vec<u64>,
    /// The time it took to generate the solution in milliseconds
    pub run_time_ms: u64,
}
