use std::time::Instant;

use crate::entities::Item;

/// An assignment of item copies found by a solver, together with its value and weight.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The item types the search ran on: the non-dominated items in decreasing ratio order
    pub items: Vec<Item>,
    /// Number of copies of `items[k]`
    pub assignment: Vec<u64>,
    pub value: u64,
    pub weight: u64,
    /// Instant the solution was created
    pub time_stamp: Instant,
}

impl Solution {
    pub fn new(items: Vec<Item>, assignment: Vec<u64>) -> Self {
        assert_eq!(items.len(), assignment.len());
        let value = items.iter().zip(&assignment).map(|(i, &c)| i.value * c).sum();
        let weight = items.iter().zip(&assignment).map(|(i, &c)| i.weight * c).sum();
        Self {
            items,
            assignment,
            value,
            weight,
            time_stamp: Instant::now(),
        }
    }

    /// Number of copies of the item with the given id (0 if it was eliminated as dominated).
    pub fn copies_of(&self, item_id: usize) -> u64 {
        self.items
            .iter()
            .zip(&self.assignment)
            .find(|(item, _)| item.id == item_id)
            .map_or(0, |(_, &c)| c)
    }

    /// The assignment in the order of the original instance of `n_items` item types.
    pub fn assignment_by_id(&self, n_items: usize) -> Vec<u64> {
        let mut by_id = vec![0; n_items];
        for (item, &copies) in self.items.iter().zip(&self.assignment) {
            by_id[item.id] = copies;
        }
        by_id
    }

    pub fn is_feasible(&self, capacity: u64) -> bool {
        self.weight <= capacity
    }

    pub fn n_copies(&self) -> u64 {
        self.assignment.iter().sum()
    }
}
