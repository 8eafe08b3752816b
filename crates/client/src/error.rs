//! Client error types.

use catalog_core::problem::ProblemDetail;
use catalog_core::validation::{format_violations, Violation};
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {detail}")]
    Problem {
        status: u16,
        detail: String,
        violations: Vec<Violation>,
    },

    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ClientError {
    /// Builds the error for a non-success response body.
    ///
    /// Problem-details bodies are parsed; anything else is kept as raw text.
    pub fn from_response_body(status: u16, resource: &str, body: &str) -> Self {
        let problem = serde_json::from_str::<ProblemDetail>(body).ok();

        if status == 404 {
            let resource = problem
                .and_then(|p| p.detail)
                .unwrap_or_else(|| resource.to_string());
            return ClientError::NotFound { resource };
        }

        match problem {
            Some(problem) => {
                let violations = problem.errors.unwrap_or_default();
                let detail = match (problem.detail, violations.is_empty()) {
                    (Some(detail), _) => detail,
                    (None, false) => format_violations(&violations),
                    (None, true) => problem.title,
                };
                ClientError::Problem {
                    status,
                    detail,
                    violations,
                }
            }
            None => ClientError::Problem {
                status,
                detail: if body.is_empty() {
                    "Unknown error".to_string()
                } else {
                    body.to_string()
                },
                violations: Vec::new(),
            },
        }
    }
}
