use std::cmp::Ordering;

use anyhow::{Result, ensure};

use crate::entities::InstanceError;

/// An item type of which any number of copies can be put into the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Item {
    /// Index of the item in the sequence the instance was created from
    pub id: usize,
    pub value: u64,
    pub weight: u64,
}

impl Item {
    pub fn new(id: usize, value: u64, weight: u64) -> Result<Item> {
        ensure!(value > 0, InstanceError::ZeroValue { item_id: id });
        ensure!(weight > 0, InstanceError::ZeroWeight { item_id: id });
        Ok(Item { id, value, weight })
    }

    /// Compares the value/weight ratios of two items by cross-multiplication.
    /// [`Ordering::Greater`] means `self` is the more efficient item.
    pub fn cmp_ratio(&self, other: &Item) -> Ordering {
        let lhs = self.value as u128 * other.weight as u128;
        let rhs = other.value as u128 * self.weight as u128;
        lhs.cmp(&rhs)
    }

    /// Whether `self` is weakly dominated by `other`: the number of whole copies of `other`
    /// fitting in `self.weight` is worth at least `self.value`.
    pub fn is_dominated_by(&self, other: &Item) -> bool {
        let copies = (self.weight / other.weight) as u128;
        copies * other.value as u128 >= self.value as u128
    }
}
