//! Pure functions for mapping repository errors to HTTP status codes.

use super::{BackendError, RepositoryError};

/// Maps a [`RepositoryError`] to an HTTP status code.
///
/// - `NotFound` -> 404 (Not Found)
/// - `ValidationFailed` -> 400 (Bad Request)
/// - `Schema` -> 500 (Internal Server Error)
/// - `Backend(ConnectionFailed | TableNotFound)` -> 503 (Service Unavailable)
/// - any other backend failure -> 500 (Internal Server Error)
///
/// # Examples
///
/// ```
/// use catalog_core::storage::{RepositoryError, repository_error_to_status_code};
///
/// let error = RepositoryError::not_found("Product", "abc-123");
/// assert_eq!(repository_error_to_status_code(&error), 404);
/// ```
pub fn repository_error_to_status_code(error: &RepositoryError) -> u16 {
    match error {
        RepositoryError::NotFound { .. } => 404,
        RepositoryError::ValidationFailed { .. } => 400,
        RepositoryError::Schema(_) => 500,
        RepositoryError::Backend(backend) => match backend {
            BackendError::ConnectionFailed(_) | BackendError::TableNotFound(_) => 503,
            BackendError::TableAlreadyExists(_)
            | BackendError::QueryFailed(_)
            | BackendError::InvalidData(_) => 500,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::SchemaError;
    use crate::validation::Violation;

    #[test]
    fn test_not_found_maps_to_404() {
        let error = RepositoryError::not_found("Product", "p1");
        assert_eq!(repository_error_to_status_code(&error), 404);
    }

    #[test]
    fn test_validation_failed_maps_to_400() {
        let error = RepositoryError::ValidationFailed {
            violations: vec![Violation::new("name", "Name is required")],
        };
        assert_eq!(repository_error_to_status_code(&error), 400);
    }

    #[test]
    fn test_schema_error_maps_to_500() {
        let error = RepositoryError::Schema(SchemaError::NoKeyAttribute { entity: "Widget" });
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_connection_failed_maps_to_503() {
        let error = RepositoryError::Backend(BackendError::ConnectionFailed("refused".into()));
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_missing_table_maps_to_503() {
        let error = RepositoryError::Backend(BackendError::TableNotFound("ProductTable".into()));
        assert_eq!(repository_error_to_status_code(&error), 503);
    }

    #[test]
    fn test_query_failed_maps_to_500() {
        let error = RepositoryError::Backend(BackendError::QueryFailed("throttled".into()));
        assert_eq!(repository_error_to_status_code(&error), 500);
    }

    #[test]
    fn test_invalid_data_maps_to_500() {
        let error = RepositoryError::Backend(BackendError::InvalidData("bad price".into()));
        assert_eq!(repository_error_to_status_code(&error), 500);
    }
}
