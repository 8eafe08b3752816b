//! Storage backend selection.
//!
//! The backend is chosen at compile time via feature flags.
//!
//! # Feature Flags
//!
//! - `inmemory` (default): in-process backend, data is lost on restart
//! - `dynamodb`: AWS DynamoDB backend using `aws-sdk-dynamodb`
//!
//! Build with DynamoDB:
//! ```bash
//! cargo build -p catalog --no-default-features --features dynamodb
//! ```

use std::sync::Arc;

use catalog_core::storage::StorageBackend;

use crate::config::Config;

#[cfg(all(feature = "inmemory", feature = "dynamodb"))]
compile_error!("Cannot enable both 'inmemory' and 'dynamodb' storage features");

#[cfg(not(any(feature = "inmemory", feature = "dynamodb")))]
compile_error!("Must enable exactly one storage feature: 'inmemory' or 'dynamodb'");

/// Builds the configured in-memory backend.
#[cfg(feature = "inmemory")]
pub async fn build_backend(config: &Config) -> anyhow::Result<Arc<dyn StorageBackend>> {
    use catalog_core::storage::InMemoryBackend;

    let backend = match config.scan_page_size.and_then(|n| usize::try_from(n).ok()) {
        Some(page_size) => InMemoryBackend::with_page_size(page_size),
        None => InMemoryBackend::new(),
    };
    tracing::info!("Using in-memory storage backend");
    Ok(Arc::new(backend))
}

/// Builds a DynamoDB backend from the AWS settings.
#[cfg(feature = "dynamodb")]
pub async fn build_backend(config: &Config) -> anyhow::Result<Arc<dyn StorageBackend>> {
    use catalog_dynamodb::{AwsConfig, DynamoDbBackend};

    let aws = AwsConfig {
        endpoint_url: config.aws_endpoint_url.clone(),
        region: config.aws_region.clone(),
    };
    tracing::info!(target_env = %aws.target_display(), "Using DynamoDB storage backend");

    let backend = DynamoDbBackend::from_config(&aws)
        .await
        .with_scan_page_size(config.scan_page_size);
    Ok(Arc::new(backend))
}
