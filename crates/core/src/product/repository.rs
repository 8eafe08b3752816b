use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::persistence::{EntityStore, GenericRepository, Repository};
use crate::storage::{RepositoryError, Result, StorageBackend};
use crate::validation::Validator;

use super::{Product, ProductValidator};

/// Product repository: validates before every mutation, then delegates to
/// the generic repository.
pub struct ProductRepository<B: StorageBackend + ?Sized> {
    inner: GenericRepository<Product, B>,
    validator: Arc<dyn Validator<Product>>,
}

impl<B: StorageBackend + ?Sized> Clone for ProductRepository<B> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            validator: Arc::clone(&self.validator),
        }
    }
}

impl<B: StorageBackend + ?Sized> ProductRepository<B> {
    /// Creates a repository using [`ProductValidator`].
    pub fn new(store: EntityStore<B>) -> Self {
        Self::with_validator(store, Arc::new(ProductValidator))
    }

    pub fn with_validator(store: EntityStore<B>, validator: Arc<dyn Validator<Product>>) -> Self {
        Self {
            inner: GenericRepository::new(store),
            validator,
        }
    }

    fn check(&self, product: &Product) -> Result<()> {
        let violations = self.validator.validate(product);
        if violations.is_empty() {
            Ok(())
        } else {
            tracing::debug!(
                product_id = %product.id,
                violations = violations.len(),
                "Product failed validation"
            );
            Err(RepositoryError::ValidationFailed { violations })
        }
    }
}

#[async_trait]
impl<B: StorageBackend + ?Sized> Repository<Product> for ProductRepository<B> {
    async fn get(&self, key: &Uuid) -> Result<Option<Product>> {
        self.inner.get(key).await
    }

    async fn get_all(&self) -> Result<Vec<Product>> {
        self.inner.get_all().await
    }

    async fn add(&self, product: &Product) -> Result<()> {
        self.check(product)?;
        self.inner.add(product).await
    }

    async fn update(&self, product: &Product) -> Result<()> {
        self.check(product)?;
        self.inner.update(product).await
    }

    async fn delete(&self, key: &Uuid) -> Result<()> {
        self.inner.delete(key).await
    }
}
