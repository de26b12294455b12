//! Task store error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Task description cannot be empty")]
    EmptyDescription,

    #[error("Task with ID {0} not found")]
    TaskNotFound(u64),

    #[error("Failed to write tasks file: {0}")]
    Persist(#[from] std::io::Error),

    #[error("Failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),
}
