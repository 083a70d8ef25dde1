//! Branch-and-bound search for the unbounded knapsack problem.

use rayon::prelude::*;

use crate::entities::Instance;
use crate::util::BnbConfig;

/// Exact upper bounds used for pruning
pub mod bound;
mod engine;
mod incumbent;
mod memo;
mod outcome;
/// Dominance elimination and ratio ordering of the item types
pub mod preprocess;
mod stats;

#[doc(inline)]
pub use engine::{Action, BnbSolver, SearchState};
#[doc(inline)]
pub use incumbent::Incumbent;
#[doc(inline)]
pub use memo::MemoTable;
#[doc(inline)]
pub use outcome::{BnbOutcome, TerminationReason};
#[doc(inline)]
pub use stats::SearchStatistics;

/// Solves independent instances in parallel, outcomes are returned in input order.
pub fn solve_batch(instances: &[Instance], config: BnbConfig) -> Vec<BnbOutcome> {
    instances
        .par_iter()
        .map(|instance| BnbSolver::new(instance, config).solve())
        .collect()
}
