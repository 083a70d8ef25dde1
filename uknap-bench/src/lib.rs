use std::sync::LazyLock;
use std::time::Instant;

use crate::alloc::CountingAlloc;

pub mod alloc;
pub mod config;
pub mod generator;
pub mod harness;
pub mod io;
pub mod measure;
pub mod report;

#[global_allocator]
pub static GLOBAL: CountingAlloc = CountingAlloc::new(); //tracks peak heap usage

pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
