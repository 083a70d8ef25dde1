use log::{debug, warn};
use rustc_hash::FxHashMap;

use crate::util::MemoConfig;

/// Best partial solution value recorded per `(position, residual capacity)` pair.
///
/// A node is redundant if the same pair was reached before with at least the same value:
/// every completion of the node was already available to the earlier one.
/// Pairs that were never recorded never prune.
#[derive(Debug, Clone)]
pub struct MemoTable {
    storage: MemoStorage,
    n_entries: usize,
}

#[derive(Debug, Clone)]
enum MemoStorage {
    Disabled,
    Dense {
        /// `W + 1`, one cell per residual capacity
        stride: usize,
        cells: Vec<Option<u64>>,
    },
    Sparse(FxHashMap<(usize, u64), u64>),
}

impl MemoTable {
    pub fn new(config: MemoConfig, n_positions: usize, capacity: u64) -> Self {
        let stride = usize::try_from(capacity).ok().and_then(|c| c.checked_add(1));
        let n_cells = stride.and_then(|s| s.checked_mul(n_positions));

        let storage = match (config, stride, n_cells) {
            (MemoConfig::Disabled, _, _) => MemoStorage::Disabled,
            (MemoConfig::Sparse, _, _) => MemoStorage::Sparse(FxHashMap::default()),
            (MemoConfig::Dense, Some(stride), Some(n_cells)) => MemoStorage::Dense {
                stride,
                cells: vec![None; n_cells],
            },
            (MemoConfig::Dense, _, _) => {
                warn!("[MEMO] dense table for {n_positions} items and capacity {capacity} is not addressable, using a sparse table instead");
                MemoStorage::Sparse(FxHashMap::default())
            }
            (MemoConfig::Auto { max_dense_cells }, Some(stride), Some(n_cells))
                if n_cells <= max_dense_cells =>
            {
                MemoStorage::Dense {
                    stride,
                    cells: vec![None; n_cells],
                }
            }
            (MemoConfig::Auto { .. }, _, _) => MemoStorage::Sparse(FxHashMap::default()),
        };
        debug!(
            "[MEMO] {} table for {n_positions} items, capacity {capacity}",
            match &storage {
                MemoStorage::Disabled => "disabled",
                MemoStorage::Dense { .. } => "dense",
                MemoStorage::Sparse(_) => "sparse",
            }
        );

        Self {
            storage,
            n_entries: 0,
        }
    }

    /// Value recorded for the pair, if any.
    pub fn get(&self, position: usize, residual: u64) -> Option<u64> {
        match &self.storage {
            MemoStorage::Disabled => None,
            MemoStorage::Dense { stride, cells } => {
                cells[position * stride + residual as usize]
            }
            MemoStorage::Sparse(map) => map.get(&(position, residual)).copied(),
        }
    }

    /// Whether a value of at least `value` was recorded for the pair.
    pub fn dominates(&self, position: usize, residual: u64, value: u64) -> bool {
        self.get(position, residual)
            .is_some_and(|recorded| recorded >= value)
    }

    /// Records `value` for the pair, overwriting any earlier record.
    pub fn record(&mut self, position: usize, residual: u64, value: u64) {
        let previous = match &mut self.storage {
            MemoStorage::Disabled => return,
            MemoStorage::Dense { stride, cells } => {
                cells[position * *stride + residual as usize].replace(value)
            }
            MemoStorage::Sparse(map) => map.insert((position, residual), value),
        };
        if previous.is_none() {
            self.n_entries += 1;
        }
    }

    /// Number of distinct pairs recorded
    pub fn len(&self) -> usize {
        self.n_entries
    }

    pub fn is_empty(&self) -> bool {
        self.n_entries == 0
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.storage, MemoStorage::Disabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unrecorded_pair_never_prunes() {
        for config in [MemoConfig::Dense, MemoConfig::Sparse, MemoConfig::Disabled] {
            let memo = MemoTable::new(config, 3, 10);
            assert!(!memo.dominates(1, 4, 0));
            assert!(memo.is_empty());
        }
    }

    #[test]
    fn records_overwrite_and_count_distinct_pairs() {
        for config in [MemoConfig::Dense, MemoConfig::Sparse] {
            let mut memo = MemoTable::new(config, 3, 10);
            memo.record(1, 4, 20);
            memo.record(1, 4, 15);
            memo.record(2, 10, 7);

            assert_eq!(memo.get(1, 4), Some(15));
            assert!(memo.dominates(1, 4, 15));
            assert!(!memo.dominates(1, 4, 16));
            assert_eq!(memo.len(), 2);
        }
    }

    #[test]
    fn disabled_table_records_nothing() {
        let mut memo = MemoTable::new(MemoConfig::Disabled, 3, 10);
        memo.record(0, 0, 1);

        assert!(!memo.is_enabled());
        assert_eq!(memo.get(0, 0), None);
        assert_eq!(memo.len(), 0);
    }

    #[test]
    fn auto_falls_back_to_sparse_for_large_tables() {
        let memo = MemoTable::new(MemoConfig::Auto { max_dense_cells: 100 }, 10, 1_000_000);
        assert!(matches!(memo.storage, MemoStorage::Sparse(_)));

        let memo = MemoTable::new(MemoConfig::Auto { max_dense_cells: 100 }, 3, 10);
        assert!(matches!(memo.storage, MemoStorage::Dense { .. }));
    }
}
