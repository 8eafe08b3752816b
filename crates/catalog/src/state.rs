//! Shared application state.

use std::sync::Arc;
use std::time::Duration;

use catalog_core::persistence::{EntityStore, Repository};
use catalog_core::product::{Product, ProductRepository};
use catalog_core::schema::SchemaRegistry;
use catalog_core::storage::StorageBackend;

/// Cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    /// Product repository (validates before mutating).
    pub products: Arc<dyn Repository<Product>>,
    /// Raw backend, used by the readiness probe.
    pub backend: Arc<dyn StorageBackend>,
    /// Schemas registered at startup.
    pub registry: SchemaRegistry,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(backend: Arc<dyn StorageBackend>, registry: SchemaRegistry) -> Self {
        let store = EntityStore::new(Arc::clone(&backend), registry.clone());
        Self {
            products: Arc::new(ProductRepository::new(store)),
            backend,
            registry,
            request_timeout: Duration::from_secs(10),
        }
    }

    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = request_timeout;
        self
    }
}
