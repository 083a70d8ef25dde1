use std::fmt::{Display, Formatter};

/// Reasons an instance is rejected before any search state is built.
///
/// Returned wrapped in an [`anyhow::Error`]; use `err.downcast_ref::<InstanceError>()` to
/// identify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceError {
    ZeroValue { item_id: usize },
    ZeroWeight { item_id: usize },
    NegativeValue { item_id: usize, value: i64 },
    NegativeWeight { item_id: usize, weight: i64 },
    NegativeCapacity { capacity: i64 },
    LengthMismatch { values: usize, weights: usize },
    NonConsecutiveIds { position: usize, item_id: usize },
}

impl Display for InstanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::ZeroValue { item_id } => {
                write!(f, "item {item_id} has a value of 0, values must be positive")
            }
            InstanceError::ZeroWeight { item_id } => {
                write!(f, "item {item_id} has a weight of 0, weights must be positive")
            }
            InstanceError::NegativeValue { item_id, value } => {
                write!(f, "item {item_id} has a negative value ({value})")
            }
            InstanceError::NegativeWeight { item_id, weight } => {
                write!(f, "item {item_id} has a negative weight ({weight})")
            }
            InstanceError::NegativeCapacity { capacity } => {
                write!(f, "capacity must be non-negative, got {capacity}")
            }
            InstanceError::LengthMismatch { values, weights } => {
                write!(f, "got {values} values but {weights} weights")
            }
            InstanceError::NonConsecutiveIds { position, item_id } => {
                write!(f, "item at position {position} has id {item_id}, ids must be consecutive starting from 0")
            }
        }
    }
}

impl std::error::Error for InstanceError {}
