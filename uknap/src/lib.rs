//! `uknap`: an exact branch-and-bound solver for the unbounded knapsack problem.
//!
//! Items are first reduced to a dominance-free set sorted by decreasing value/weight ratio,
//! after which an implicit enumeration with a two-term relaxation bound and a memoization table
//! searches for the optimal multiset of item copies.
//!
//! ```
//! let solution = uknap::solve(50, &[(60, 10), (100, 20), (120, 30)]).unwrap();
//! assert_eq!(solution.value, 300);
//! ```

/// The branch-and-bound engine and its building blocks
pub mod bnb;

/// Dynamic programming reference solver, used to cross-check the engine
pub mod baseline;

/// Entities to model the unbounded knapsack problem
pub mod entities;

/// Importing problem instances into and exporting solutions out of this library
pub mod io;

/// Helper functions which do not belong to any specific module
pub mod util;

use anyhow::Result;

use crate::bnb::BnbSolver;
use crate::entities::{Instance, Solution};
use crate::util::BnbConfig;

#[doc(inline)]
pub use bnb::solve_batch;

/// Solves the unbounded knapsack problem for `capacity` and a list of `(value, weight)` pairs
/// using the default [`BnbConfig`].
///
/// Fails if any value or weight is zero. The returned [`Solution`] is expressed over the
/// surviving (non-dominated, ratio-sorted) items, see [`Solution::assignment_by_id`] to map it
/// back onto the order of `items`.
pub fn solve(capacity: u64, items: &[(u64, u64)]) -> Result<Solution> {
    let instance = Instance::from_pairs(capacity, items)?;
    let outcome = BnbSolver::new(&instance, BnbConfig::default()).solve();
    Ok(outcome.solution)
}
