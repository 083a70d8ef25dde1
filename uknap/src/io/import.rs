use anyhow::{Result, ensure};

use crate::entities::{Instance, InstanceError, Item};
use crate::io::ext_repr::ExtInstance;

/// Imports an instance into the library
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let ExtInstance {
        capacity,
        values,
        weights,
    } = ext_instance;

    ensure!(
        values.len() == weights.len(),
        InstanceError::LengthMismatch {
            values: values.len(),
            weights: weights.len()
        }
    );
    let capacity =
        u64::try_from(*capacity).map_err(|_| InstanceError::NegativeCapacity { capacity: *capacity })?;

    let items = values
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(item_id, (&value, &weight))| {
            let value =
                u64::try_from(value).map_err(|_| InstanceError::NegativeValue { item_id, value })?;
            let weight =
                u64::try_from(weight).map_err(|_| InstanceError::NegativeWeight { item_id, weight })?;
            Item::new(item_id, value, weight)
        })
        .collect::<Result<Vec<Item>>>()?;

    Instance::new(capacity, items)
}
