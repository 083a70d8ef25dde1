use serde::{Deserialize, Serialize};

/// Configuration of the branch-and-bound solver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Default)]
pub struct BnbConfig {
    /// Storage of the memoization table used for pruning
    #[serde(default)]
    pub memo: MemoConfig,
}

/// Storage strategy of the `(position, residual capacity)` memoization table.
/// The table is only used for pruning, none of the strategies change the optimal value.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MemoConfig {
    /// No memoization, every node is developed
    Disabled,
    /// A dense `n x (W + 1)` table
    Dense,
    /// A hash map holding only the visited states
    Sparse,
    /// Dense if the table has at most `max_dense_cells` cells, sparse otherwise
    Auto { max_dense_cells: usize },
}

impl Default for MemoConfig {
    fn default() -> Self {
        MemoConfig::Auto {
            max_dense_cells: 1 << 22,
        }
    }
}
