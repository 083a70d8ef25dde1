use std::time::Duration;

/// Counters collected during a single branch-and-bound run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchStatistics {
    /// Forward moves committed by the develop transition.
    pub nodes_developed: u64,
    pub backtracks: u64,
    /// Replace transitions entered.
    pub replacements: u64,
    /// Nodes discarded because their upper bound could not beat the incumbent.
    pub prunings_bound: u64,
    /// Nodes discarded because the memoization table held an equal or better state.
    pub prunings_memo: u64,
    /// Strict improvements of the incumbent after the greedy seed.
    pub solutions_found: u64,
    /// Distinct states stored in the memoization table.
    pub memo_entries: usize,
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_developed(&mut self) {
        self.nodes_developed = self.nodes_developed.saturating_add(1);
    }

    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks = self.backtracks.saturating_add(1);
    }

    #[inline]
    pub fn on_replace(&mut self) {
        self.replacements = self.replacements.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_pruning_memo(&mut self) {
        self.prunings_memo = self.prunings_memo.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn set_memo_entries(&mut self, n_entries: usize) {
        self.memo_entries = n_entries;
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Branch-and-bound statistics:")?;
        writeln!(f, "  Nodes developed:   {}", self.nodes_developed)?;
        writeln!(f, "  Backtracks:        {}", self.backtracks)?;
        writeln!(f, "  Replacements:      {}", self.replacements)?;
        writeln!(f, "  Prunings (bound):  {}", self.prunings_bound)?;
        writeln!(f, "  Prunings (memo):   {}", self.prunings_memo)?;
        writeln!(f, "  Solutions found:   {}", self.solutions_found)?;
        writeln!(f, "  Memo entries:      {}", self.memo_entries)?;
        writeln!(f, "  Total time:        {:.2?}", self.time_total)?;
        Ok(())
    }
}
