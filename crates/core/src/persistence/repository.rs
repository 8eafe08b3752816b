use std::marker::PhantomData;

use async_trait::async_trait;

use crate::entity::Entity;
use crate::storage::{RepositoryError, Result, StorageBackend};

use super::EntityStore;

/// Type-parameterized CRUD over one entity type.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Gets an entity by key.
    async fn get(&self, key: &T::Key) -> Result<Option<T>>;

    /// Gets every entity of this type.
    async fn get_all(&self) -> Result<Vec<T>>;

    /// Stores a new entity.
    async fn add(&self, entity: &T) -> Result<()>;

    /// Overwrites an entity. No existence check.
    async fn update(&self, entity: &T) -> Result<()>;

    /// Deletes an entity by key, failing with `NotFound` when absent.
    async fn delete(&self, key: &T::Key) -> Result<()>;
}

/// [`Repository`] backed directly by an [`EntityStore`].
pub struct GenericRepository<T, B: StorageBackend + ?Sized> {
    store: EntityStore<B>,
    _entity: PhantomData<fn() -> T>,
}

impl<T, B: StorageBackend + ?Sized> Clone for GenericRepository<T, B> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _entity: PhantomData,
        }
    }
}

impl<T: Entity, B: StorageBackend + ?Sized> GenericRepository<T, B> {
    pub fn new(store: EntityStore<B>) -> Self {
        Self {
            store,
            _entity: PhantomData,
        }
    }
}

#[async_trait]
impl<T: Entity, B: StorageBackend + ?Sized> Repository<T> for GenericRepository<T, B> {
    async fn get(&self, key: &T::Key) -> Result<Option<T>> {
        self.store.load::<T>(key).await
    }

    async fn get_all(&self) -> Result<Vec<T>> {
        self.store.scan_all::<T>().await
    }

    async fn add(&self, entity: &T) -> Result<()> {
        self.store.save(entity).await
    }

    async fn update(&self, entity: &T) -> Result<()> {
        self.store.save(entity).await
    }

    async fn delete(&self, key: &T::Key) -> Result<()> {
        match self.store.load::<T>(key).await? {
            Some(entity) => self.store.delete(&entity).await,
            None => Err(RepositoryError::not_found(T::ENTITY_TYPE, key)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;

    use uuid::Uuid;

    use super::*;
    use crate::entity::{AttributeKind, AttributeSpec};
    use crate::persistence::TableProvisioner;
    use crate::product::Product;
    use crate::schema::{SchemaError, SchemaRegistry};
    use crate::storage::{
        get_bytes, get_i64, get_string, number_value, AttributeValue, BackendError,
        InMemoryBackend, Record,
    };

    async fn setup(page_size: usize) -> (Arc<InMemoryBackend>, GenericRepository<Product, InMemoryBackend>) {
        let backend = Arc::new(InMemoryBackend::with_page_size(page_size));
        let registry = SchemaRegistry::new();
        TableProvisioner::new(Arc::clone(&backend), registry.clone())
            .ensure_table::<Product>()
            .await
            .unwrap();
        let repository = GenericRepository::new(EntityStore::new(Arc::clone(&backend), registry));
        (backend, repository)
    }

    fn widget(id: Uuid) -> Product {
        Product {
            id,
            name: "Widget".to_string(),
            price: 9.99,
            description: "A widget".to_string(),
            stock: 3,
        }
    }

    #[tokio::test]
    async fn test_save_then_get_round_trips() {
        let (_, repository) = setup(10).await;
        let p1 = widget(Uuid::new_v4());

        repository.add(&p1).await.unwrap();

        assert_eq!(repository.get(&p1.id).await.unwrap(), Some(p1));
        assert_eq!(repository.get(&Uuid::new_v4()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_overwrites_without_existence_check() {
        let (_, repository) = setup(10).await;
        let mut p1 = widget(Uuid::new_v4());

        repository.update(&p1).await.unwrap();
        p1.stock = 10;
        repository.update(&p1).await.unwrap();

        let stored = repository.get(&p1.id).await.unwrap().unwrap();
        assert_eq!(stored.stock, 10);
        assert_eq!(repository.get_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let (_, repository) = setup(10).await;
        let p1 = widget(Uuid::new_v4());
        repository.add(&p1).await.unwrap();

        repository.delete(&p1.id).await.unwrap();

        assert_eq!(repository.get(&p1.id).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_not_found_without_mutation() {
        let (backend, repository) = setup(10).await;
        let missing = Uuid::new_v4();
        let before = backend.stats().mutations;

        let result = repository.delete(&missing).await;

        assert_eq!(
            result,
            Err(RepositoryError::not_found("Product", missing))
        );
        assert_eq!(backend.stats().mutations, before);
    }

    #[tokio::test]
    async fn test_get_all_spans_multiple_pages() {
        let (backend, repository) = setup(3).await;
        let ids: HashSet<Uuid> = (0..10).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            repository.add(&widget(*id)).await.unwrap();
        }

        let all = repository.get_all().await.unwrap();

        let found: HashSet<Uuid> = all.iter().map(|p| p.id).collect();
        assert_eq!(all.len(), 10);
        assert_eq!(found, ids);
        assert_eq!(backend.stats().scan_pages, 4);
    }

    #[tokio::test]
    async fn test_get_all_on_empty_table() {
        let (_, repository) = setup(3).await;
        assert!(repository.get_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unconvertible_record_is_invalid_data() {
        let (backend, repository) = setup(10).await;
        let id = Uuid::new_v4();
        backend
            .put_item(
                "ProductTable",
                Record::from([
                    ("id".to_string(), AttributeValue::S(id.to_string())),
                    ("name".to_string(), AttributeValue::S("Half".to_string())),
                ]),
            )
            .await
            .unwrap();

        let result = repository.get(&id).await;

        assert!(matches!(
            result,
            Err(RepositoryError::Backend(BackendError::InvalidData(_)))
        ));
    }

    #[tokio::test]
    async fn test_missing_table_surfaces_backend_error() {
        let backend = Arc::new(InMemoryBackend::new());
        let repository: GenericRepository<Product, _> =
            GenericRepository::new(EntityStore::new(backend, SchemaRegistry::new()));

        let result = repository.get_all().await;

        assert_eq!(
            result,
            Err(RepositoryError::Backend(BackendError::TableNotFound(
                "ProductTable".to_string()
            )))
        );
    }

    /// Integer-keyed entity carrying raw bytes.
    #[derive(Debug, Clone, PartialEq)]
    struct Blob {
        seq: i64,
        label: String,
        payload: Vec<u8>,
    }

    impl Entity for Blob {
        type Key = i64;
        const ENTITY_TYPE: &'static str = "Blob";
        const TABLE_NAME: &'static str = "BlobTable";

        fn attributes() -> &'static [AttributeSpec] {
            const ATTRIBUTES: &[AttributeSpec] = &[
                AttributeSpec::key("seq", AttributeKind::Integer),
                AttributeSpec::persisted("label", AttributeKind::String),
                AttributeSpec::persisted("payload", AttributeKind::Binary),
            ];
            ATTRIBUTES
        }

        fn key(&self) -> i64 {
            self.seq
        }

        fn key_value(key: &i64) -> AttributeValue {
            number_value(key)
        }

        fn to_record(&self) -> Record {
            Record::from([
                ("seq".to_string(), number_value(self.seq)),
                ("label".to_string(), AttributeValue::S(self.label.clone())),
                ("payload".to_string(), AttributeValue::B(self.payload.clone())),
            ])
        }

        fn from_record(record: &Record) -> std::result::Result<Self, BackendError> {
            Ok(Self {
                seq: get_i64(record, "seq")?,
                label: get_string(record, "label")?,
                payload: get_bytes(record, "payload")?,
            })
        }
    }

    fn blob(seq: i64) -> Blob {
        Blob {
            seq,
            label: format!("blob-{seq}"),
            payload: vec![0, 0xff, seq as u8],
        }
    }

    async fn blob_setup(
        page_size: usize,
    ) -> (Arc<InMemoryBackend>, GenericRepository<Blob, InMemoryBackend>) {
        let backend = Arc::new(InMemoryBackend::with_page_size(page_size));
        let registry = SchemaRegistry::new();
        TableProvisioner::new(Arc::clone(&backend), registry.clone())
            .ensure_table::<Blob>()
            .await
            .unwrap();
        let repository = GenericRepository::new(EntityStore::new(Arc::clone(&backend), registry));
        (backend, repository)
    }

    #[tokio::test]
    async fn test_integer_key_and_binary_round_trip() {
        let (_, repository) = blob_setup(10).await;
        let b1 = blob(-42);

        repository.add(&b1).await.unwrap();

        assert_eq!(repository.get(&-42).await.unwrap(), Some(b1));
        assert_eq!(repository.get(&42).await.unwrap(), None);

        repository.delete(&-42).await.unwrap();
        assert_eq!(repository.get(&-42).await.unwrap(), None);
        assert_eq!(
            repository.delete(&-42).await,
            Err(RepositoryError::not_found("Blob", -42))
        );
    }

    #[tokio::test]
    async fn test_integer_keys_span_multiple_pages() {
        let (backend, repository) = blob_setup(2).await;
        let seqs: HashSet<i64> = [-3, 0, 7, 10, 100].into_iter().collect();
        for seq in &seqs {
            repository.add(&blob(*seq)).await.unwrap();
        }

        let all = repository.get_all().await.unwrap();

        let found: HashSet<i64> = all.iter().map(|b| b.seq).collect();
        assert_eq!(found, seqs);
        assert!(all.iter().all(|b| *b == blob(b.seq)));
        assert_eq!(backend.stats().scan_pages, 3);
    }

    #[derive(Debug, Clone)]
    struct Keyless {
        name: String,
    }

    impl Entity for Keyless {
        type Key = String;
        const ENTITY_TYPE: &'static str = "Keyless";
        const TABLE_NAME: &'static str = "KeylessTable";

        fn attributes() -> &'static [AttributeSpec] {
            const ATTRIBUTES: &[AttributeSpec] =
                &[AttributeSpec::persisted("name", AttributeKind::String)];
            ATTRIBUTES
        }

        fn key(&self) -> String {
            self.name.clone()
        }

        fn key_value(key: &String) -> AttributeValue {
            AttributeValue::S(key.clone())
        }

        fn to_record(&self) -> Record {
            Record::from([("name".to_string(), AttributeValue::S(self.name.clone()))])
        }

        fn from_record(_record: &Record) -> std::result::Result<Self, BackendError> {
            Err(BackendError::InvalidData("unreachable".to_string()))
        }
    }

    #[tokio::test]
    async fn test_keyless_entity_fails_before_backend_is_touched() {
        let backend = Arc::new(InMemoryBackend::new());
        let repository: GenericRepository<Keyless, _> = GenericRepository::new(EntityStore::new(
            Arc::clone(&backend),
            SchemaRegistry::new(),
        ));

        let result = repository
            .add(&Keyless {
                name: "x".to_string(),
            })
            .await;

        assert_eq!(
            result,
            Err(RepositoryError::Schema(SchemaError::NoKeyAttribute {
                entity: "Keyless"
            }))
        );
        assert_eq!(backend.stats().mutations, 0);
    }
}
