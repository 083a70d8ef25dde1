use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::GLOBAL;

/// Resources used by a single solver call
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct Measurement {
    /// Peak heap usage during the call in bytes, above the level before the call
    pub memory: u64,
    /// Wall time in seconds
    pub time: f64,
}

/// Runs `f` and measures its wall time and peak heap usage.
///
/// Allocations of other threads running at the same time are counted as well.
pub fn measure<T>(f: impl FnOnce() -> T) -> (Measurement, T) {
    let baseline = GLOBAL.reset_peak();
    let start = Instant::now();

    let result = f();

    let time = start.elapsed().as_secs_f64();
    let memory = GLOBAL.peak().saturating_sub(baseline) as u64;

    (Measurement { memory, time }, result)
}
