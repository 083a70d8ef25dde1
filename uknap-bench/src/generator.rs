use anyhow::{Result, ensure};
use itertools::Itertools;
use rand::Rng;

use uknap::io::ext_repr::ExtInstance;

use crate::config::BenchConfig;

/// Generates a random dataset with `size` item types.
///
/// The capacity is `size / capacity_divisor`, values and weights are drawn uniformly from
/// `1..=max(1, floor(capacity * range_factor))`.
pub fn generate_dataset(size: usize, config: &BenchConfig, rng: &mut impl Rng) -> Result<ExtInstance> {
    ensure!(config.capacity_divisor > 0, "capacity divisor must be positive");
    ensure!(
        config.range_factor.is_finite() && config.range_factor > 0.0,
        "range factor must be positive, got {}",
        config.range_factor
    );

    let capacity = size as u64 / config.capacity_divisor;
    let max = ((capacity as f64 * config.range_factor) as u64).max(1);

    let values = (0..size).map(|_| rng.random_range(1..=max) as i64).collect_vec();
    let weights = (0..size).map(|_| rng.random_range(1..=max) as i64).collect_vec();

    Ok(ExtInstance {
        capacity: capacity as i64,
        values,
        weights,
    })
}
