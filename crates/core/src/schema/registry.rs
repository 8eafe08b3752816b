use std::any::TypeId;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use crate::entity::Entity;

use super::{describe, Schema, SchemaError};

/// Process-wide cache of derived schemas, one per entity type.
///
/// Populated at startup via [`register`](Self::register); lookups for an
/// unregistered type describe and cache on first use. Clones share the cache.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    schemas: Arc<RwLock<HashMap<TypeId, Arc<Schema>>>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Describes and caches `T`. Returns the cached schema on repeat calls.
    pub fn register<T: Entity>(&self) -> Result<Arc<Schema>, SchemaError> {
        if let Some(schema) = self.get::<T>() {
            return Ok(schema);
        }

        let schema = Arc::new(describe::<T>()?);
        let mut schemas = self
            .schemas
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let cached = schemas.entry(TypeId::of::<T>()).or_insert(schema);
        tracing::debug!(
            entity = T::ENTITY_TYPE,
            table = %cached.table_name,
            "Registered entity schema"
        );
        Ok(Arc::clone(cached))
    }

    /// Returns the schema for `T`, describing it if not yet cached.
    pub fn schema<T: Entity>(&self) -> Result<Arc<Schema>, SchemaError> {
        self.register::<T>()
    }

    /// Returns the cached schema for `T` without describing it.
    pub fn get<T: Entity>(&self) -> Option<Arc<Schema>> {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        schemas.get(&TypeId::of::<T>()).cloned()
    }

    pub fn len(&self) -> usize {
        self.schemas
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Table names of every registered schema, sorted.
    pub fn table_names(&self) -> Vec<String> {
        let schemas = self.schemas.read().unwrap_or_else(PoisonError::into_inner);
        let mut names: Vec<String> = schemas.values().map(|s| s.table_name.clone()).collect();
        names.sort();
        names
    }
}
