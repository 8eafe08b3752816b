use async_trait::async_trait;

use super::{BackendError, CreateTableRequest, PageToken, Record, ScanPage};

/// The storage primitives the persistence layer is built on.
///
/// Implementations own the native client and translate its failures into
/// [`BackendError`]. Every key argument is a record containing only the
/// table's key attribute.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Lists every table name, following the backend's own pagination.
    async fn list_tables(&self) -> Result<Vec<String>, BackendError>;

    /// Creates a table. Fails with [`BackendError::TableAlreadyExists`] when
    /// the name is taken.
    async fn create_table(&self, request: &CreateTableRequest) -> Result<(), BackendError>;

    /// Point lookup by key.
    async fn get_item(&self, table: &str, key: &Record) -> Result<Option<Record>, BackendError>;

    /// Writes a whole record, replacing any existing record with the same key.
    async fn put_item(&self, table: &str, record: Record) -> Result<(), BackendError>;

    /// Removes a record by key. Succeeds when the record is already absent.
    async fn delete_item(&self, table: &str, key: &Record) -> Result<(), BackendError>;

    /// Fetches one scan page, resuming after `start` when given.
    async fn scan_page(
        &self,
        table: &str,
        start: Option<PageToken>,
    ) -> Result<ScanPage, BackendError>;
}
