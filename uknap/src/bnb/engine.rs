use std::time::Instant;

use log::{debug, trace};

use crate::bnb::bound;
use crate::bnb::incumbent::Incumbent;
use crate::bnb::memo::MemoTable;
use crate::bnb::preprocess::{min_weight_after, preprocess};
use crate::bnb::{BnbOutcome, SearchStatistics, TerminationReason};
use crate::entities::{Instance, Item, Solution};
use crate::util::BnbConfig;
use crate::util::assertions;

/// Transition of the depth-first search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Extend the partial solution with the next item that fits.
    Develop,
    /// Give back one copy of the last item on the path.
    Backtrack,
    /// Swap the last removed copy for an item of different weight.
    Replace,
    End(TerminationReason),
}

/// Partial solution on the current search path.
///
/// Items after `position` are never part of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    /// Copies of each (sorted) item type
    pub counts: Vec<u64>,
    /// Last item type the search touched
    pub position: usize,
    pub value: u64,
    /// Capacity still available
    pub residual: u64,
}

/// Exact branch-and-bound solver for a single unbounded knapsack instance.
///
/// The solver works on the preprocessed item list: dominated item types are removed and the
/// survivors are sorted by decreasing value/weight ratio. It starts from the greedy solution
/// using only the most efficient item and walks the search tree depth-first, in a
/// develop/backtrack/replace cycle, until the incumbent reaches the root bound or the tree
/// is exhausted.
pub struct BnbSolver {
    capacity: u64,
    items: Vec<Item>,
    state: SearchState,
    min_weight_after: Vec<u64>,
    root_bound: u64,
    memo: MemoTable,
    incumbent: Incumbent,
    stats: SearchStatistics,
}

impl BnbSolver {
    pub fn new(instance: &Instance, config: BnbConfig) -> Self {
        let items = preprocess(&instance.items);
        let capacity = instance.capacity;
        let n = items.len();

        let mut counts = vec![0; n];
        let (value, residual) = match items.first() {
            Some(first) => {
                counts[0] = capacity / first.weight;
                (counts[0] * first.value, capacity - counts[0] * first.weight)
            }
            None => (0, capacity),
        };
        let root_bound = bound::root_bound(&items, value, residual, capacity);
        debug_assert!(value <= root_bound);

        debug!(
            "[BNB] {} of {} item types survived preprocessing, greedy seed: {value}, root bound: {root_bound}",
            n,
            instance.n_items()
        );

        Self {
            capacity,
            min_weight_after: min_weight_after(&items),
            memo: MemoTable::new(config.memo, n, capacity),
            incumbent: Incumbent::new(&counts, value),
            state: SearchState {
                counts,
                position: 0,
                value,
                residual,
            },
            items,
            root_bound,
            stats: SearchStatistics::default(),
        }
    }

    /// Runs the search to completion and returns the optimal solution.
    pub fn solve(mut self) -> BnbOutcome {
        let start = Instant::now();

        let mut action = match self.incumbent.reaches(self.root_bound) {
            true => Action::End(TerminationReason::OptimalityProven),
            false => Action::Develop,
        };
        let termination_reason = loop {
            match action {
                Action::End(reason) => break reason,
                _ => action = self.step(action),
            }
        };

        self.stats.set_memo_entries(self.memo.len());
        self.stats.set_total_time(start.elapsed());

        let value = self.incumbent.value();
        let solution = Solution::new(self.items, self.incumbent.into_assignment());
        assert_eq!(solution.value, value, "incumbent value out of sync with its assignment");
        debug_assert!(assertions::solution_consistent(&solution, self.capacity));
        debug_assert!(solution.value <= self.root_bound);

        debug!(
            "[BNB] finished ({termination_reason}), value: {}, weight: {}/{}, nodes: {}, time: {:.2?}",
            solution.value, solution.weight, self.capacity, self.stats.nodes_developed, self.stats.time_total
        );

        BnbOutcome {
            solution,
            termination_reason,
            statistics: self.stats,
            root_bound: self.root_bound,
        }
    }

    /// Executes a single transition and returns the next one.
    pub fn step(&mut self, action: Action) -> Action {
        trace!(
            "[BNB] {action:?} at position {}, value: {}, residual: {}",
            self.state.position, self.state.value, self.state.residual
        );
        let next = match action {
            Action::Develop => self.develop(),
            Action::Backtrack => self.backtrack(),
            Action::Replace => self.replace(),
            Action::End(reason) => Action::End(reason),
        };
        debug_assert!(assertions::search_state_consistent(
            &self.items,
            &self.state.counts,
            self.state.value,
            self.state.residual,
            self.capacity
        ));
        next
    }

    fn develop(&mut self) -> Action {
        let i = self.state.position;
        let (value, residual) = (self.state.value, self.state.residual);

        if residual < self.min_weight_after[i] {
            //nothing fits anymore, the partial solution is complete
            if self.incumbent.offer(&self.state.counts, value) {
                self.stats.on_solution_found();
                debug!("[BNB] improved solution: {value}");
                if self.incumbent.reaches(self.root_bound) {
                    return Action::End(TerminationReason::OptimalityProven);
                }
            }
            return Action::Backtrack;
        }

        let Some(j) = (i + 1..self.items.len()).find(|&k| self.items[k].weight <= residual) else {
            return Action::Backtrack;
        };
        let item = self.items[j];
        let best = self.incumbent.value();

        if bound::ratio_bound(value, residual, &item) <= best {
            self.stats.on_pruning_bound();
            return Action::Backtrack;
        }

        let copies = residual / item.weight;
        let next_value = value + copies * item.value;
        let next_residual = residual - copies * item.weight;

        if j + 2 < self.items.len()
            && bound::upper_bound(&self.items, j, next_value, next_residual) <= best
        {
            self.stats.on_pruning_bound();
            return Action::Backtrack;
        }

        if self.memo.dominates(i, residual, value) {
            self.stats.on_pruning_memo();
            return Action::Backtrack;
        }

        self.state.counts[j] = copies;
        self.state.value = next_value;
        self.state.residual = next_residual;
        self.state.position = j;
        self.memo.record(i, next_residual, next_value);
        self.stats.on_node_developed();

        Action::Develop
    }

    fn backtrack(&mut self) -> Action {
        self.stats.on_backtrack();

        let Some(j) = (0..=self.state.position)
            .rev()
            .find(|&k| self.state.counts[k] > 0)
        else {
            return Action::End(TerminationReason::SearchExhausted);
        };
        let item = self.items[j];
        let state = &mut self.state;

        state.position = j;
        state.counts[j] -= 1;
        state.value -= item.value;
        state.residual += item.weight;

        if state.residual < self.min_weight_after[j] {
            return Action::Backtrack;
        }

        //an item after j fits in the residual, so j + 1 exists
        let next = self.items[j + 1];
        if bound::ratio_bound(state.value, state.residual, &next) <= self.incumbent.value() {
            //no number of copies of j left on the path can lead to an improvement
            state.value -= state.counts[j] * item.value;
            state.residual += state.counts[j] * item.weight;
            state.counts[j] = 0;
            self.stats.on_pruning_bound();
            return Action::Backtrack;
        }

        match state.residual >= item.weight.saturating_add(self.min_weight_after[j]) {
            true => Action::Develop,
            false => Action::Replace,
        }
    }

    fn replace(&mut self) -> Action {
        self.stats.on_replace();

        let n = self.items.len();
        let mut j = self.state.position;
        let mut h = j + 1;

        loop {
            if h >= n {
                return Action::Backtrack;
            }
            let candidate = self.items[h];
            let (value, residual) = (self.state.value, self.state.residual);

            if self.incumbent.value() >= bound::ratio_bound(value, residual, &candidate) {
                self.stats.on_pruning_bound();
                return Action::Backtrack;
            }

            if candidate.weight >= self.items[j].weight {
                if candidate.weight == self.items[j].weight
                    || candidate.weight > residual
                    || self.incumbent.value() >= value + candidate.value
                {
                    h += 1;
                    continue;
                }
                //a single copy of the heavier item improves the incumbent
                let improved = self
                    .incumbent
                    .offer_with_extra(&self.state.counts, value + candidate.value, h);
                debug_assert!(improved);
                self.stats.on_solution_found();
                debug!("[BNB] improved solution: {}", self.incumbent.value());

                if self.incumbent.reaches(self.root_bound) {
                    return Action::End(TerminationReason::OptimalityProven);
                }
                j = h;
                h += 1;
                continue;
            }

            if residual < candidate.weight.saturating_add(self.min_weight_after[h - 1]) {
                h += 1;
                continue;
            }

            let copies = residual / candidate.weight;
            self.state.position = h;
            self.state.counts[h] = copies;
            self.state.value += copies * candidate.value;
            self.state.residual -= copies * candidate.weight;
            return Action::Develop;
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn incumbent(&self) -> &Incumbent {
        &self.incumbent
    }

    pub fn root_bound(&self) -> u64 {
        self.root_bound
    }

    pub fn statistics(&self) -> &SearchStatistics {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solver(capacity: u64, items: &[(u64, u64)]) -> BnbSolver {
        let instance = Instance::from_pairs(capacity, items).unwrap();
        BnbSolver::new(&instance, BnbConfig::default())
    }

    #[test]
    fn greedy_seed_fills_with_best_ratio() {
        let solver = solver(37, &[(11, 6), (7, 4), (20, 11), (3, 2)]);
        let state = solver.state();

        assert_eq!(solver.items()[0].id, 0);
        assert_eq!(state.counts, vec![6, 0, 0, 0]);
        assert_eq!(state.value, 66);
        assert_eq!(state.residual, 1);
        assert_eq!(state.position, 0);
        assert_eq!(solver.incumbent().value(), 66);
        assert!(solver.root_bound() >= 67);
    }

    #[test]
    fn backtrack_gives_back_one_copy() {
        let mut solver = solver(37, &[(11, 6), (7, 4), (20, 11), (3, 2)]);

        //nothing fits in a residual of 1
        assert_eq!(solver.step(Action::Develop), Action::Backtrack);
        let next = solver.step(Action::Backtrack);

        let state = solver.state();
        assert_eq!(state.counts[0], 5);
        assert_eq!(state.value, 55);
        assert_eq!(state.residual, 7);
        assert_eq!(state.position, 0);
        assert_ne!(next, Action::Backtrack);
    }

    #[test]
    fn backtrack_on_empty_path_exhausts_search() {
        //the 5-weight item does not fit, the greedy seed is empty
        let mut solver = solver(4, &[(9, 5)]);

        assert_eq!(
            solver.step(Action::Backtrack),
            Action::End(TerminationReason::SearchExhausted)
        );
    }

    #[test]
    fn replace_records_heavier_item_without_touching_path() {
        //sorted: (36, 28) then (5, 9), only the lighter item fits
        let mut solver = solver(25, &[(5, 9), (36, 28), (5, 24)]);
        assert_eq!(solver.state().counts, vec![0, 0]);
        assert_eq!(solver.incumbent().value(), 0);

        let mut action = Action::Develop;
        while !matches!(action, Action::End(_)) {
            action = solver.step(action);
        }

        assert_eq!(solver.incumbent().value(), 10);
        assert_eq!(solver.incumbent().assignment(), &[0, 2]);
    }

    #[test]
    fn end_is_absorbing() {
        let mut solver = solver(10, &[(3, 2)]);
        let end = Action::End(TerminationReason::OptimalityProven);

        assert_eq!(solver.step(end), end);
    }
}
