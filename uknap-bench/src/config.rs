use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use uknap::util::BnbConfig;

/// Configuration of the benchmark harness
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct BenchConfig {
    /// Seed for the PRNG. If undefined, datasets are generated from entropy
    pub prng_seed: Option<u64>,
    /// Folder holding a subfolder per dataset size
    pub dataset_dir: PathBuf,
    /// The capacity of a dataset of size `s` is `s / capacity_divisor`
    pub capacity_divisor: u64,
    /// Values and weights are drawn from `1..=floor(capacity * range_factor)`.
    /// A factor above 1 generates items that do not fit.
    pub range_factor: f64,
    /// Dataset sizes printed by the report when none are given
    pub report_sizes: Vec<usize>,
    /// Configuration of the branch-and-bound solver under test
    #[serde(default)]
    pub solver: BnbConfig,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            prng_seed: None,
            dataset_dir: PathBuf::from("dataset"),
            capacity_divisor: 5,
            range_factor: 1.1,
            report_sizes: vec![100, 1_000, 10_000],
            solver: BnbConfig::default(),
        }
    }
}
