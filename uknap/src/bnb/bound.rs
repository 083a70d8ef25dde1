//! Upper bounds on the value reachable from a search node.
//!
//! All arithmetic is exact: products are widened to 128 bits and divisions round towards
//! negative infinity, so no pruning decision depends on floating point rounding.

use crate::entities::Item;

/// `value + floor(residual * item.value / item.weight)`: the fractional relaxation when
/// `item` is the most efficient item still available.
pub fn ratio_bound(value: u64, residual: u64, item: &Item) -> u64 {
    let extension = residual as u128 * item.value as u128 / item.weight as u128;
    value.saturating_add(u64::try_from(extension).unwrap_or(u64::MAX))
}

/// Upper bound on the value reachable by extending a partial solution of `value`, with
/// `residual` capacity left, using only the items after position `i`.
///
/// `items` must be sorted by decreasing ratio and the partial solution must hold the maximum
/// number of copies of item `i` that fit, as is the case right after a greedy fill with item `i`.
/// With fewer than two items after `i` the bound degenerates to `value`.
///
/// Item `p = i + 1` is packed greedily, after which the bound is the best of two relaxations:
/// * `U0`: the remaining capacity is filled fractionally with item `q = i + 2`.
/// * `U1`: just enough copies of item `i` are given back to fit one more copy of `p`,
///   and the resulting capacity is filled fractionally with `p`.
pub fn upper_bound(items: &[Item], i: usize, value: u64, residual: u64) -> u64 {
    if i + 2 >= items.len() {
        return value;
    }
    let (item_i, p, q) = (&items[i], &items[i + 1], &items[i + 2]);

    let take_p = residual / p.weight;
    let z0 = value + take_p * p.value;
    let w1 = residual - take_p * p.weight;

    let u0 = ratio_bound(z0, w1, q);

    //copies of item i to remove to make room for one more copy of p (w1 < p.weight)
    let extra = (p.weight - w1).div_ceil(item_i.weight);
    let tmp = (w1 + extra * item_i.weight) as i128;
    let numerator = tmp * p.value as i128 - extra as i128 * item_i.value as i128 * p.weight as i128;
    let u1 = z0 as i128 + numerator.div_euclid(p.weight as i128);

    match u64::try_from(u1) {
        Ok(u1) => u0.max(u1),
        Err(_) => u0,
    }
}

/// Upper bound on the optimal value of the whole instance, given the greedy root node
/// (`value`, `residual`) holding the maximum number of copies of `items[0]`.
pub fn root_bound(items: &[Item], value: u64, residual: u64, capacity: u64) -> u64 {
    match items.len() {
        0 => 0,
        //a single item type is solved exactly by the greedy fill
        1 => value,
        //not enough items for the two-term bound, fall back to the fractional relaxation
        2 => ratio_bound(0, capacity, &items[0]),
        _ => upper_bound(items, 0, value, residual),
    }
}
