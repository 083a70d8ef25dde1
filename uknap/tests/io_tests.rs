#[cfg(test)]
mod tests {
    use std::time::Instant;

    use test_case::test_case;

    use uknap::bnb::BnbSolver;
    use uknap::entities::InstanceError;
    use uknap::io;
    use uknap::io::ext_repr::{ExtInstance, ExtSolution};
    use uknap::util::BnbConfig;

    fn ext_instance(capacity: i64, values: &[i64], weights: &[i64]) -> ExtInstance {
        ExtInstance {
            capacity,
            values: values.to_vec(),
            weights: weights.to_vec(),
        }
    }

    #[test]
    fn import_valid_instance() {
        let ext = ext_instance(37, &[11, 7, 20, 3], &[6, 4, 11, 2]);
        let instance = io::import(&ext).unwrap();

        assert_eq!(instance.capacity, 37);
        assert_eq!(instance.values(), vec![11, 7, 20, 3]);
        assert_eq!(instance.weights(), vec![6, 4, 11, 2]);
        assert!(instance.items.iter().enumerate().all(|(i, item)| item.id == i));
    }

    #[test_case(ext_instance(-1, &[1], &[1]), InstanceError::NegativeCapacity { capacity: -1 }; "negative capacity")]
    #[test_case(ext_instance(10, &[1, 2], &[1]), InstanceError::LengthMismatch { values: 2, weights: 1 }; "length mismatch")]
    #[test_case(ext_instance(10, &[4, -3], &[1, 1]), InstanceError::NegativeValue { item_id: 1, value: -3 }; "negative value")]
    #[test_case(ext_instance(10, &[4, 3], &[-2, 1]), InstanceError::NegativeWeight { item_id: 0, weight: -2 }; "negative weight")]
    #[test_case(ext_instance(10, &[4, 0], &[2, 1]), InstanceError::ZeroValue { item_id: 1 }; "zero value")]
    #[test_case(ext_instance(10, &[4, 3], &[2, 0]), InstanceError::ZeroWeight { item_id: 1 }; "zero weight")]
    fn import_rejects(ext: ExtInstance, expected: InstanceError) {
        let err = io::import(&ext).unwrap_err();

        assert_eq!(err.downcast_ref::<InstanceError>(), Some(&expected));
    }

    #[test]
    fn instance_from_json() {
        let json = r#"{"capacity": 50, "values": [60, 100, 120], "weights": [10, 20, 30]}"#;
        let ext: ExtInstance = serde_json::from_str(json).unwrap();
        let instance = io::import(&ext).unwrap();

        let outcome = BnbSolver::new(&instance, BnbConfig::default()).solve();
        assert_eq!(outcome.value(), 300);
    }

    #[test]
    fn export_uses_instance_order() {
        let epoch = Instant::now();
        let ext = ext_instance(37, &[11, 7, 20, 3], &[6, 4, 11, 2]);
        let instance = io::import(&ext).unwrap();
        let solution = BnbSolver::new(&instance, BnbConfig::default()).solve().solution;

        let ext_solution = io::export(&instance, &solution, epoch);

        assert_eq!(
            ext_solution,
            ExtSolution {
                value: 67,
                weight: 37,
                assignment: vec![4, 0, 1, 1],
                run_time_ms: ext_solution.run_time_ms,
            }
        );
        let json = serde_json::to_string(&ext_solution).unwrap();
        assert!(json.contains("\"assignment\":[4,0,1,1]"));
    }
}
