use itertools::Itertools;
use log::error;

use crate::entities::{Item, Solution};
//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks

pub fn instance_item_ids_correct(items: &[Item]) -> bool {
    items.iter().enumerate().all(|(i, item)| item.id == i)
}

pub fn items_sorted_by_ratio(items: &[Item]) -> bool {
    items
        .iter()
        .tuple_windows()
        .all(|(a, b)| a.cmp_ratio(b).is_ge())
}

pub fn items_dominance_free(items: &[Item]) -> bool {
    for (a, b) in items.iter().tuple_combinations() {
        if a.is_dominated_by(b) || b.is_dominated_by(a) {
            error!("item {} and item {} survived preprocessing, but one dominates the other", a.id, b.id);
            return false;
        }
    }
    true
}

/// Checks whether `value` and `residual` match the partial solution encoded by `counts`.
pub fn search_state_consistent(
    items: &[Item],
    counts: &[u64],
    value: u64,
    residual: u64,
    capacity: u64,
) -> bool {
    let (v, w) = items
        .iter()
        .zip(counts)
        .fold((0, 0), |(v, w), (i, &c)| (v + i.value * c, w + i.weight * c));

    if v != value || w > capacity || capacity - w != residual {
        error!(
            "search state out of sync: value {value} (expected {v}), residual {residual} (expected {})",
            capacity.saturating_sub(w)
        );
        return false;
    }
    true
}

pub fn solution_consistent(solution: &Solution, capacity: u64) -> bool {
    let Solution {
        items,
        assignment,
        value,
        weight,
        time_stamp: _,
    } = solution;

    assert_eq!(items.len(), assignment.len());
    assert_eq!(*value, items.iter().zip(assignment).map(|(i, &c)| i.value * c).sum::<u64>());
    assert_eq!(*weight, items.iter().zip(assignment).map(|(i, &c)| i.weight * c).sum::<u64>());

    solution.is_feasible(capacity)
}
