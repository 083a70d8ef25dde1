use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::harness::result_path;
use crate::io;
use crate::io::output::MeasurementRecord;
use crate::measure::Measurement;

pub const SEPARATOR: &str = "------------------";
pub const MISSING_RESULT: &str = "ERR: Cannot found result file, did the test fail?";

/// Writes a comparison of the stored measurements for every size in `sizes` to `out`.
pub fn render(dataset_dir: &Path, sizes: &[usize], out: &mut impl Write) -> Result<()> {
    for &size in sizes {
        writeln!(out, "{size}")?;
        let path = result_path(dataset_dir, size);
        if path.exists() {
            let record: MeasurementRecord = io::read_json(&path)?;
            writeln!(out, "Branch and Bound {}", format_measurement(&record.bnb))?;
            writeln!(out, "Dynamic Programming {}", format_measurement(&record.dp))?;
        } else {
            writeln!(out, "{MISSING_RESULT}")?;
        }
        writeln!(out, "{SEPARATOR}")?;
    }
    Ok(())
}

/// `<milliseconds>ms <KiB>KiB`, milliseconds rounded to an integer and KiB to three decimals
pub fn format_measurement(measurement: &Measurement) -> String {
    let ms = (measurement.time * 1000.0).round() as u64;
    let kib = (measurement.memory as f64 / 1024.0 * 1000.0).round() / 1000.0;
    format!("{ms}ms {kib}KiB")
}
