//! Problem-details error bodies (RFC 7807).
//!
//! Shared by the server, which renders them, and the client, which parses
//! them out of non-success responses.

use serde::{Deserialize, Serialize};

use crate::storage::{repository_error_to_status_code, RepositoryError};
use crate::validation::Violation;

/// An RFC 7807 problem-details body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
}

impl ProblemDetail {
    /// Builds a problem for a status code, using the standard reason phrase
    /// as the title.
    pub fn new(status: u16) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: reason_phrase(status).to_string(),
            status,
            detail: None,
            instance: None,
            errors: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }

    pub fn with_errors(mut self, errors: Vec<Violation>) -> Self {
        self.errors = Some(errors);
        self
    }

    /// Describes a repository error, listing violations when validation failed.
    pub fn from_repository_error(error: &RepositoryError) -> Self {
        let problem =
            Self::new(repository_error_to_status_code(error)).with_detail(error.to_string());
        match error {
            RepositoryError::ValidationFailed { violations } => {
                problem.with_errors(violations.clone())
            }
            _ => problem,
        }
    }
}

fn reason_phrase(status: u16) -> &'static str {
    match status {
        400 => "Bad Request",
        404 => "Not Found",
        408 => "Request Timeout",
        409 => "Conflict",
        422 => "Unprocessable Entity",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_problem() {
        let error = RepositoryError::not_found("Product", "p2");

        let problem = ProblemDetail::from_repository_error(&error);

        assert_eq!(problem.status, 404);
        assert_eq!(problem.title, "Not Found");
        assert_eq!(problem.detail.as_deref(), Some("Product not found: p2"));
        assert!(problem.errors.is_none());
    }

    #[test]
    fn test_validation_problem_lists_violations() {
        let error = RepositoryError::ValidationFailed {
            violations: vec![Violation::new("name", "Name is required")],
        };

        let problem = ProblemDetail::from_repository_error(&error);

        assert_eq!(problem.status, 400);
        assert_eq!(problem.errors.map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_serialized_shape() {
        let problem = ProblemDetail::new(404)
            .with_detail("Product not found: p2")
            .with_instance("/api/products/p2");

        let json = serde_json::to_value(&problem).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "about:blank",
                "title": "Not Found",
                "status": 404,
                "detail": "Product not found: p2",
                "instance": "/api/products/p2",
            })
        );
    }

    #[test]
    fn test_parses_minimal_body() {
        let problem: ProblemDetail =
            serde_json::from_str(r#"{"type":"about:blank","title":"Bad Request","status":400}"#)
                .unwrap();
        assert_eq!(problem.status, 400);
        assert!(problem.detail.is_none());
    }
}
