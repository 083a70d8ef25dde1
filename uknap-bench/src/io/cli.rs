use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info",
        global = true
    )]
    pub log_level: LevelFilter,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Solve a dataset with both solvers and store the measurements
    Run {
        /// Number of item types in the dataset
        #[arg(short, long)]
        size: usize,
        /// Load the dataset stored by a previous run instead of generating a new one
        #[arg(long)]
        reuse: bool,
    },
    /// Print the stored measurements
    Report {
        /// Dataset sizes to report on, defaults to the configured report sizes
        #[arg(short, long, num_args = 1..)]
        sizes: Option<Vec<usize>>,
    },
}
