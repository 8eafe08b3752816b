use std::sync::Arc;

use crate::entity::Entity;
use crate::schema::SchemaRegistry;
use crate::storage::{Result, StorageBackend};

/// Generic load/save/delete/scan for any [`Entity`].
///
/// Every operation resolves the entity's schema first, so an invalid
/// entity type fails before the backend is touched.
pub struct EntityStore<B: StorageBackend + ?Sized> {
    backend: Arc<B>,
    registry: SchemaRegistry,
}

impl<B: StorageBackend + ?Sized> Clone for EntityStore<B> {
    fn clone(&self) -> Self {
        Self {
            backend: Arc::clone(&self.backend),
            registry: self.registry.clone(),
        }
    }
}

impl<B: StorageBackend + ?Sized> EntityStore<B> {
    pub fn new(backend: Arc<B>, registry: SchemaRegistry) -> Self {
        Self { backend, registry }
    }

    /// Point lookup by key. `None` when no record exists.
    pub async fn load<T: Entity>(&self, key: &T::Key) -> Result<Option<T>> {
        let schema = self.registry.schema::<T>()?;
        let key_record = schema.key_record(T::key_value(key));

        let record = self
            .backend
            .get_item(&schema.table_name, &key_record)
            .await?;

        match record {
            Some(record) => Ok(Some(T::from_record(&record)?)),
            None => Ok(None),
        }
    }

    /// Upserts the whole record.
    pub async fn save<T: Entity>(&self, entity: &T) -> Result<()> {
        let schema = self.registry.schema::<T>()?;
        self.backend
            .put_item(&schema.table_name, entity.to_record())
            .await?;
        tracing::debug!(
            entity = T::ENTITY_TYPE,
            key = %entity.key(),
            "Saved entity"
        );
        Ok(())
    }

    /// Removes the record by key. Succeeds when already absent.
    pub async fn delete<T: Entity>(&self, entity: &T) -> Result<()> {
        let schema = self.registry.schema::<T>()?;
        let key_record = schema.key_record(T::key_value(&entity.key()));
        self.backend
            .delete_item(&schema.table_name, &key_record)
            .await?;
        tracing::debug!(
            entity = T::ENTITY_TYPE,
            key = %entity.key(),
            "Deleted entity"
        );
        Ok(())
    }

    /// Reads every record of `T`, one page at a time.
    ///
    /// Each page is requested only after the previous one arrived. No
    /// ordering guarantee.
    pub async fn scan_all<T: Entity>(&self) -> Result<Vec<T>> {
        let schema = self.registry.schema::<T>()?;
        let mut entities = Vec::new();
        let mut token = None;
        let mut pages = 0usize;

        loop {
            let page = self.backend.scan_page(&schema.table_name, token).await?;
            pages += 1;
            for record in &page.items {
                entities.push(T::from_record(record)?);
            }
            match page.next {
                Some(next) => token = Some(next),
                None => break,
            }
        }

        tracing::debug!(
            entity = T::ENTITY_TYPE,
            count = entities.len(),
            pages,
            "Scanned table"
        );
        Ok(entities)
    }
}
