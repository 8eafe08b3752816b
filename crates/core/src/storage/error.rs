use thiserror::Error;

use crate::schema::SchemaError;
use crate::validation::{format_violations, Violation};

/// Failures reported by a storage backend.
///
/// These are opaque to the persistence layer and propagated unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),
    #[error("Table not found: {0}")]
    TableNotFound(String),
    #[error("Table already exists: {0}")]
    TableAlreadyExists(String),
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// Errors that can occur during repository operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RepositoryError {
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error("{entity_type} not found: {key}")]
    NotFound {
        entity_type: &'static str,
        key: String,
    },
    #[error("Validation failed: {}", format_violations(.violations))]
    ValidationFailed { violations: Vec<Violation> },
    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl RepositoryError {
    /// Builds a `NotFound` error for an entity key.
    pub fn not_found(entity_type: &'static str, key: impl ToString) -> Self {
        Self::NotFound {
            entity_type,
            key: key.to_string(),
        }
    }
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_error_not_found_display() {
        let error = RepositoryError::not_found("Product", "abc-123");
        assert_eq!(error.to_string(), "Product not found: abc-123");
    }

    #[test]
    fn test_repository_error_validation_failed_display() {
        let error = RepositoryError::ValidationFailed {
            violations: vec![
                Violation::new("name", "Name is required"),
                Violation::new("price", "Price must be greater than 0"),
            ],
        };
        assert_eq!(
            error.to_string(),
            "Validation failed: name: Name is required; price: Price must be greater than 0"
        );
    }

    #[test]
    fn test_schema_error_is_transparent() {
        let error = RepositoryError::from(SchemaError::NoKeyAttribute { entity: "Widget" });
        assert_eq!(error.to_string(), "Widget has no key attribute");
    }

    #[test]
    fn test_backend_error_display() {
        let error = RepositoryError::from(BackendError::ConnectionFailed(
            "timeout after 30s".to_string(),
        ));
        assert_eq!(error.to_string(), "Connection failed: timeout after 30s");

        let error = BackendError::TableNotFound("ProductTable".to_string());
        assert_eq!(error.to_string(), "Table not found: ProductTable");
    }
}
