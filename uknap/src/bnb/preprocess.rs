use itertools::Itertools;

use crate::entities::Item;
use crate::util::assertions;

/// Reduces `items` to the non-dominated item types, sorted by decreasing value/weight ratio.
pub fn preprocess(items: &[Item]) -> Vec<Item> {
    let mut survivors = eliminate_dominated(items);
    sort_by_ratio(&mut survivors);

    debug_assert!(assertions::items_dominance_free(&survivors));
    debug_assert!(assertions::items_sorted_by_ratio(&survivors));
    survivors
}

/// Removes every item type that is weakly dominated by another one.
///
/// All pairs `(j, k)`, `j < k`, are visited once in index order. Item `k` is removed if whole
/// copies of `j` fitting in `k`'s weight are worth at least as much as `k`; otherwise item `j`
/// is removed if the reverse holds, which ends the comparisons for `j`. Removed items take part
/// in no further comparison. The relative order of the survivors is preserved.
pub fn eliminate_dominated(items: &[Item]) -> Vec<Item> {
    let n = items.len();
    let mut alive = vec![true; n];

    for j in 0..n.saturating_sub(1) {
        if !alive[j] {
            continue;
        }
        for k in (j + 1)..n {
            if !alive[k] {
                continue;
            }
            if items[k].is_dominated_by(&items[j]) {
                alive[k] = false;
            } else if items[j].is_dominated_by(&items[k]) {
                alive[j] = false;
                break;
            }
        }
    }

    items
        .iter()
        .zip(alive)
        .filter_map(|(item, alive)| alive.then_some(*item))
        .collect_vec()
}

/// Sorts by strictly decreasing value/weight ratio (exact, by cross-multiplication).
/// Items with equal ratios keep ascending id order.
pub fn sort_by_ratio(items: &mut [Item]) {
    items.sort_by(|a, b| b.cmp_ratio(a).then(a.id.cmp(&b.id)));
}

/// `min_weights[k]` is the smallest weight among the items after position `k`,
/// `u64::MAX` if there are none.
pub fn min_weight_after(items: &[Item]) -> Vec<u64> {
    let mut min_weights = vec![u64::MAX; items.len()];
    for k in (0..items.len().saturating_sub(1)).rev() {
        min_weights[k] = min_weights[k + 1].min(items[k + 1].weight);
    }
    min_weights
}
