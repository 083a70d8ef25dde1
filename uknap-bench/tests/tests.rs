#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use rand::SeedableRng;
    use rand::prelude::SmallRng;
    use test_case::test_case;

    use uknap::io::ext_repr::ExtInstance;
    use uknap_bench::config::BenchConfig;
    use uknap_bench::io::output::MeasurementRecord;
    use uknap_bench::measure::{Measurement, measure};
    use uknap_bench::{generator, harness, io, report};

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("uknap-bench-{name}-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test_case(100, 20, 22; "size 100")]
    #[test_case(1_000, 200, 220; "size 1000")]
    #[test_case(3, 0, 1; "capacity rounds down to zero")]
    fn generated_dataset_ranges(size: usize, capacity: i64, max: i64) {
        let mut rng = SmallRng::seed_from_u64(0);
        let ext = generator::generate_dataset(size, &BenchConfig::default(), &mut rng).unwrap();

        assert_eq!(ext.capacity, capacity);
        assert_eq!(ext.values.len(), size);
        assert_eq!(ext.weights.len(), size);
        assert!(ext.values.iter().chain(&ext.weights).all(|&x| (1..=max).contains(&x)));
    }

    #[test]
    fn generation_is_reproducible_with_a_seed() {
        let config = BenchConfig::default();
        let first = generator::generate_dataset(500, &config, &mut SmallRng::seed_from_u64(7)).unwrap();
        let second = generator::generate_dataset(500, &config, &mut SmallRng::seed_from_u64(7)).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn invalid_divisor_is_rejected() {
        let config = BenchConfig {
            capacity_divisor: 0,
            ..BenchConfig::default()
        };

        assert!(generator::generate_dataset(10, &config, &mut SmallRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn measure_counts_allocations() {
        let (measurement, buffer) = measure(|| vec![0u8; 1 << 20]);

        assert_eq!(buffer.len(), 1 << 20);
        //other test threads allocate and free concurrently
        assert!(measurement.memory >= 1 << 19);
        assert!(measurement.time >= 0.0);
    }

    #[test_case(100; "size 100")]
    #[test_case(1_000; "size 1000")]
    fn benchmark_cross_checks_solvers(size: usize) {
        let config = BenchConfig::default();
        let ext = generator::generate_dataset(size, &config, &mut SmallRng::seed_from_u64(size as u64)).unwrap();

        let run = harness::run_benchmark(size, &ext, &config).unwrap();

        assert_eq!(run.record.size, size);
        assert_eq!(run.solution.assignment.len(), size);
        assert!(run.solution.weight <= ext.capacity as u64);
    }

    #[test]
    fn benchmark_rejects_invalid_dataset() {
        let ext = ExtInstance {
            capacity: 10,
            values: vec![1, 2],
            weights: vec![3],
        };

        assert!(harness::run_benchmark(2, &ext, &BenchConfig::default()).is_err());
    }

    #[test]
    fn persisted_dataset_can_be_reused() {
        let dir = scratch_dir("reuse");
        let config = BenchConfig::default();
        let ext = generator::generate_dataset(50, &config, &mut SmallRng::seed_from_u64(1)).unwrap();
        let run = harness::run_benchmark(50, &ext, &config).unwrap();

        harness::persist(&dir, &run, &ext).unwrap();

        assert_eq!(harness::load_dataset(&dir, 50).unwrap(), ext);
        let record: MeasurementRecord = io::read_json(&harness::result_path(&dir, 50)).unwrap();
        assert_eq!(record.size, 50);
        assert!(harness::solution_path(&dir, 50).exists());
        assert!(harness::load_dataset(&dir, 60).is_err());

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn report_renders_stored_and_missing_results() {
        let dir = scratch_dir("report");
        std::fs::create_dir_all(harness::dataset_folder(&dir, 100)).unwrap();
        let record = MeasurementRecord {
            size: 100,
            bnb: Measurement {
                memory: 1536,
                time: 0.0123,
            },
            dp: Measurement {
                memory: 2048,
                time: 0.5,
            },
        };
        io::write_json(&record, &harness::result_path(&dir, 100)).unwrap();

        let mut out = Vec::new();
        report::render(&dir, &[100, 1_000], &mut out).unwrap();
        let rendered = String::from_utf8(out).unwrap();

        let expected = [
            "100",
            "Branch and Bound 12ms 1.5KiB",
            "Dynamic Programming 500ms 2KiB",
            report::SEPARATOR,
            "1000",
            report::MISSING_RESULT,
            report::SEPARATOR,
        ];
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn config_reads_partial_solver_section() {
        let json = r#"{
            "prng_seed": 3,
            "dataset_dir": "data",
            "capacity_divisor": 5,
            "range_factor": 1.1,
            "report_sizes": [10],
            "solver": {"memo": {"type": "sparse"}}
        }"#;
        let config: BenchConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.prng_seed, Some(3));
        assert_eq!(config.solver.memo, uknap::util::MemoConfig::Sparse);
    }
}
