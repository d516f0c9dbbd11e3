//! Store Errors
//!
//! Error type shared by the store and its record sources.

use serde::{Deserialize, Serialize};

use crate::record::RecordId;

/// Common result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    /// No record with this id
    NotFound(RecordId),
    /// Activating the record would push its counter past the capacity
    CapacityReached { id: RecordId, capacity: u32 },
    /// Two records in a seed share an id
    DuplicateId(RecordId),
    /// Record counter cannot move with its flag (active at zero, or
    /// inactive at the maximum)
    InvalidCounter(RecordId),
    /// Seed data could not be parsed
    Seed(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::NotFound(id) => write!(f, "Not found: record {}", id),
            StoreError::CapacityReached { id, capacity } => {
                write!(f, "Capacity reached: record {} is full ({})", id, capacity)
            }
            StoreError::DuplicateId(id) => write!(f, "Duplicate id: {}", id),
            StoreError::InvalidCounter(id) => {
                write!(f, "Invalid counter: record {} cannot move its count with its flag", id)
            }
            StoreError::Seed(msg) => write!(f, "Invalid seed: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Seed(err.to_string())
    }
}
