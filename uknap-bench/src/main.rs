use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use log::{info, warn};
use rand::SeedableRng;
use rand::prelude::SmallRng;

use uknap_bench::config::BenchConfig;
use uknap_bench::io::cli::{Cli, Command};
use uknap_bench::{generator, harness, io, report};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            BenchConfig::default()
        }
        Some(config_file) => {
            io::read_json::<BenchConfig>(&config_file).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed BenchConfig: {config:?}");

    match args.command {
        Command::Run { size, reuse } => main_run(size, reuse, &config),
        Command::Report { sizes } => {
            let sizes = sizes.unwrap_or_else(|| config.report_sizes.clone());
            report::render(&config.dataset_dir, &sizes, &mut std::io::stdout().lock())
        }
    }
}

fn main_run(size: usize, reuse: bool, config: &BenchConfig) -> Result<()> {
    let ext_instance = match reuse {
        true => harness::load_dataset(&config.dataset_dir, size)?,
        false => {
            let mut rng = match config.prng_seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_os_rng(),
            };
            generator::generate_dataset(size, config, &mut rng)?
        }
    };

    let run = harness::run_benchmark(size, &ext_instance, config)?;
    harness::persist(&config.dataset_dir, &run, &ext_instance)
}
