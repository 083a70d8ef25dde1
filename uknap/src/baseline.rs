use crate::entities::Instance;

/// Optimal value of the unbounded knapsack instance, by dynamic programming over all
/// capacities `0..=capacity`.
///
/// Runs in `O(n * W)` time and `O(W)` memory, independent of the dominance structure of the
/// items. Pairs with a zero weight are ignored.
pub fn optimal_value(capacity: u64, values: &[u64], weights: &[u64]) -> u64 {
    assert_eq!(values.len(), weights.len());
    let capacity = capacity as usize;
    let mut best = vec![0u64; capacity + 1];

    for c in 1..=capacity {
        for (&v, &w) in values.iter().zip(weights) {
            let w = w as usize;
            if w > 0 && w <= c {
                best[c] = best[c].max(best[c - w] + v);
            }
        }
    }
    best[capacity]
}

/// [`optimal_value`] of an [`Instance`].
pub fn solve_instance(instance: &Instance) -> u64 {
    optimal_value(instance.capacity, &instance.values(), &instance.weights())
}
