//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/readyz` - Readiness probe (backend reachable and tables present)

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct ReadinessStatus {
    pub ready: bool,
    /// Registered tables the backend does not report.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub missing_tables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /readyz - Readiness probe.
///
/// Returns 200 when the backend answers and every registered table exists,
/// 503 otherwise.
#[axum::debug_handler]
pub async fn readyz(State(state): State<AppState>) -> Response {
    let tables = match state.backend.list_tables().await {
        Ok(tables) => tables,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            return (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ReadinessStatus {
                    ready: false,
                    missing_tables: Vec::new(),
                    error: Some(e.to_string()),
                }),
            )
                .into_response();
        }
    };

    let missing_tables: Vec<String> = state
        .registry
        .table_names()
        .into_iter()
        .filter(|name| !tables.contains(name))
        .collect();
    let ready = missing_tables.is_empty();
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessStatus {
            ready,
            missing_tables,
            error: None,
        }),
    )
        .into_response()
}
