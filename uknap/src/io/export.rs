use std::time::Instant;

use crate::entities::{Instance, Solution};
use crate::io::ext_repr::ExtSolution;

/// Exports a solution out of the library
pub fn export(instance: &Instance, solution: &Solution, epoch: Instant) -> ExtSolution {
    ExtSolution {
        value: solution.value,
        weight: solution.weight,
        assignment: solution.assignment_by_id(instance.n_items()),
        run_time_ms: solution.time_stamp.saturating_duration_since(epoch).as_millis() as u64,
    }
}
