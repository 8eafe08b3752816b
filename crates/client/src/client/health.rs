//! Health check operations.

use serde::{Deserialize, Serialize};

use super::CatalogClient;
use crate::error::{ClientError, Result};

/// Readiness probe result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Readiness {
    pub ready: bool,
    #[serde(default)]
    pub missing_tables: Vec<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl CatalogClient {
    /// Liveness probe. Succeeds when the server accepts connections.
    pub async fn livez(&self) -> Result<()> {
        let response = self.client.get(self.url("/livez")).send().await?;
        self.handle_empty_response(response).await
    }

    /// Readiness probe. A not-ready server still yields a [`Readiness`] body.
    pub async fn readyz(&self) -> Result<Readiness> {
        let response = self.client.get(self.url("/readyz")).send().await?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}
