use axum::{
    extract::Request,
    http::{header, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use catalog_core::problem::ProblemDetail;
use catalog_core::storage::RepositoryError;
use thiserror::Error;

/// Request-level failures detected before the repository is involved.
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    #[error("Invalid path parameter: {0}")]
    InvalidPath(String),
}

pub struct AppError(pub anyhow::Error);

impl AppError {
    fn problem(&self) -> ProblemDetail {
        if let Some(repo_error) = self.0.downcast_ref::<RepositoryError>() {
            ProblemDetail::from_repository_error(repo_error)
        } else if let Some(request_error) = self.0.downcast_ref::<RequestError>() {
            ProblemDetail::new(400).with_detail(request_error.to_string())
        } else {
            ProblemDetail::new(500).with_detail(self.0.to_string())
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let problem = self.problem();
        let status_code =
            StatusCode::from_u16(problem.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!(status = %status_code, error = %self.0, "Request failed");
        } else {
            tracing::warn!(status = %status_code, error = %self.0, "Request rejected");
        }

        problem_response(status_code, problem)
    }
}

/// Renders a problem body. The problem is also kept in the response
/// extensions so [`problem_instance`] can fill in the request path.
fn problem_response(status_code: StatusCode, problem: ProblemDetail) -> Response {
    let mut response = (
        status_code,
        [(header::CONTENT_TYPE, "application/problem+json")],
        Json(problem.clone()),
    )
        .into_response();
    response.extensions_mut().insert(problem);
    response
}

/// Middleware setting `instance` on problem responses to the request path.
pub async fn problem_instance(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<ProblemDetail>() {
        Some(problem) if problem.instance.is_none() => {
            problem_response(response.status(), problem.with_instance(path))
        }
        Some(problem) => {
            response.extensions_mut().insert(problem);
            response
        }
        None => response,
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use catalog_core::storage::BackendError;
    use catalog_core::validation::Violation;

    use super::*;

    #[test]
    fn test_repository_errors_keep_their_status() {
        let not_found = AppError::from(RepositoryError::not_found("Product", "p2"));
        assert_eq!(not_found.into_response().status(), StatusCode::NOT_FOUND);

        let unavailable = AppError::from(RepositoryError::from(BackendError::ConnectionFailed(
            "refused".to_string(),
        )));
        assert_eq!(
            unavailable.into_response().status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_validation_problem_lists_errors() {
        let error = AppError::from(RepositoryError::ValidationFailed {
            violations: vec![Violation::new("name", "Name is required")],
        });

        let problem = error.problem();

        assert_eq!(problem.status, 400);
        assert_eq!(problem.errors.map(|e| e.len()), Some(1));
    }

    #[test]
    fn test_request_error_is_bad_request() {
        let error = AppError::from(RequestError::InvalidBody("EOF".to_string()));
        let response = error.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/problem+json"
        );
    }

    #[test]
    fn test_invalid_path_is_bad_request() {
        let error = AppError::from(RequestError::InvalidPath("not-a-uuid".to_string()));

        let problem = error.problem();

        assert_eq!(problem.status, 400);
        assert_eq!(
            problem.detail.as_deref(),
            Some("Invalid path parameter: not-a-uuid")
        );
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let error = AppError(anyhow::anyhow!("boom"));
        assert_eq!(
            error.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
