use crate::bnb::SearchStatistics;
use crate::entities::Solution;

/// Why the search stopped. Both reasons imply the returned solution is optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerminationReason {
    /// The incumbent reached the root upper bound.
    OptimalityProven,
    /// Every branch was explored or pruned.
    SearchExhausted,
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "optimality proven by the root bound"),
            TerminationReason::SearchExhausted => write!(f, "search space exhausted"),
        }
    }
}

/// Result of a [`BnbSolver`](crate::bnb::BnbSolver) run.
#[derive(Debug, Clone)]
pub struct BnbOutcome {
    pub solution: Solution,
    pub termination_reason: TerminationReason,
    pub statistics: SearchStatistics,
    /// Upper bound on the optimal value computed at the root
    pub root_bound: u64,
}

impl BnbOutcome {
    #[inline]
    pub fn value(&self) -> u64 {
        self.solution.value
    }
}
