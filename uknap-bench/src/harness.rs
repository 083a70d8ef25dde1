use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Result, ensure};
use log::{debug, info};
use thousands::Separable;

use uknap::baseline;
use uknap::bnb::BnbSolver;
use uknap::io::ext_repr::{ExtInstance, ExtSolution};

use crate::EPOCH;
use crate::config::BenchConfig;
use crate::io;
use crate::io::output::MeasurementRecord;
use crate::measure::measure;

/// Folder holding the files of the dataset with `size` item types
pub fn dataset_folder(dataset_dir: &Path, size: usize) -> PathBuf {
    dataset_dir.join(size.to_string())
}

pub fn dataset_path(dataset_dir: &Path, size: usize) -> PathBuf {
    dataset_folder(dataset_dir, size).join("dataset.json")
}

pub fn result_path(dataset_dir: &Path, size: usize) -> PathBuf {
    dataset_folder(dataset_dir, size).join("result.json")
}

pub fn solution_path(dataset_dir: &Path, size: usize) -> PathBuf {
    dataset_folder(dataset_dir, size).join("solution.json")
}

/// Result of a benchmark run on a single dataset
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    pub record: MeasurementRecord,
    /// The branch-and-bound solution, in the item order of the dataset
    pub solution: ExtSolution,
}

/// Solves `ext_instance` with the branch-and-bound solver and with dynamic programming,
/// one after the other, measuring both.
///
/// Fails if the instance is invalid or if the two solvers disagree on the optimal value.
pub fn run_benchmark(size: usize, ext_instance: &ExtInstance, config: &BenchConfig) -> Result<BenchmarkRun> {
    let instance = uknap::io::import(ext_instance)?;
    info!(
        "[BENCH] dataset of size {}: {} item types, capacity {}",
        size.separate_with_commas(),
        instance.n_items().separate_with_commas(),
        instance.capacity.separate_with_commas()
    );

    let (bnb, outcome) = measure(|| BnbSolver::new(&instance, config.solver).solve());
    info!(
        "[BENCH] branch and bound: value {} in {:.3}s, peak {} bytes ({})",
        outcome.value().separate_with_commas(),
        bnb.time,
        bnb.memory.separate_with_commas(),
        outcome.termination_reason
    );
    debug!("{}", outcome.statistics);

    let (dp, dp_value) = measure(|| baseline::solve_instance(&instance));
    info!(
        "[BENCH] dynamic programming: value {} in {:.3}s, peak {} bytes",
        dp_value.separate_with_commas(),
        dp.time,
        dp.memory.separate_with_commas()
    );

    ensure!(
        outcome.value() == dp_value,
        "inconsistent result for size {size}: branch and bound found {}, dynamic programming {dp_value}",
        outcome.value()
    );

    Ok(BenchmarkRun {
        record: MeasurementRecord { size, bnb, dp },
        solution: uknap::io::export(&instance, &outcome.solution, *EPOCH),
    })
}

/// Stores the dataset, the measurements and the solution of a run.
pub fn persist(dataset_dir: &Path, run: &BenchmarkRun, ext_instance: &ExtInstance) -> Result<()> {
    let size = run.record.size;
    fs::create_dir_all(dataset_folder(dataset_dir, size))?;

    io::write_json(&run.record, &result_path(dataset_dir, size))?;
    io::write_json(ext_instance, &dataset_path(dataset_dir, size))?;
    io::write_json(&run.solution, &solution_path(dataset_dir, size))?;
    Ok(())
}

/// Loads the dataset stored by an earlier run.
pub fn load_dataset(dataset_dir: &Path, size: usize) -> Result<ExtInstance> {
    let path = dataset_path(dataset_dir, size);
    ensure!(
        path.exists(),
        "no dataset of size {size} found at {}, run without --reuse first",
        path.display()
    );
    let ext_instance: ExtInstance = io::read_json(&path)?;
    ensure!(
        ext_instance.values.len() == size,
        "dataset at {} holds {} item types, expected {size}",
        path.display(),
        ext_instance.values.len()
    );
    Ok(ext_instance)
}
