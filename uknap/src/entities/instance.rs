use anyhow::{Result, ensure};
use itertools::Itertools;
use log::warn;

use crate::entities::{InstanceError, Item};
use crate::util::assertions;

/// Instance of the unbounded knapsack problem: a capacity and a set of item types,
/// each of which can be packed any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    pub capacity: u64,
    /// Item types, `items[i].id == i`
    pub items: Vec<Item>,
}

impl Instance {
    pub fn new(capacity: u64, items: Vec<Item>) -> Result<Self> {
        for (position, item) in items.iter().enumerate() {
            ensure!(
                item.id == position,
                InstanceError::NonConsecutiveIds {
                    position,
                    item_id: item.id
                }
            );
            ensure!(item.value > 0, InstanceError::ZeroValue { item_id: item.id });
            ensure!(item.weight > 0, InstanceError::ZeroWeight { item_id: item.id });
        }
        debug_assert!(assertions::instance_item_ids_correct(&items));

        let n_oversized = items.iter().filter(|i| i.weight > capacity).count();
        if n_oversized > 0 && n_oversized == items.len() {
            warn!("none of the {n_oversized} item types fit in a capacity of {capacity}");
        }

        Ok(Self { capacity, items })
    }

    /// Creates an instance from `(value, weight)` pairs, ids follow the order of `pairs`.
    pub fn from_pairs(capacity: u64, pairs: &[(u64, u64)]) -> Result<Self> {
        let items = pairs
            .iter()
            .enumerate()
            .map(|(id, &(value, weight))| Item::new(id, value, weight))
            .collect::<Result<Vec<Item>>>()?;
        Self::new(capacity, items)
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn n_items(&self) -> usize {
        self.items.len()
    }

    pub fn values(&self) -> Vec<u64> {
        self.items.iter().map(|i| i.value).collect_vec()
    }

    pub fn weights(&self) -> Vec<u64> {
        self.items.iter().map(|i| i.weight).collect_vec()
    }
}
