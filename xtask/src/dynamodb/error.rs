//! Error types for DynamoDB operations.

use catalog_core::storage::{BackendError, RepositoryError};
use thiserror::Error;

/// Result type alias for dynamodb module.
pub type Result<T> = std::result::Result<T, DynamodbError>;

/// Errors that can occur during DynamoDB operations.
#[derive(Error, Debug)]
pub enum DynamodbError {
    #[error(transparent)]
    Backend(#[from] BackendError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("Table '{table_name}' not found")]
    TableNotFound { table_name: String },

    #[error("Operation cancelled by user")]
    UserCancelled,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("--read-capacity and --write-capacity must be given together")]
    IncompleteCapacity,
}
