//! In-memory storage backend.
//!
//! Data lives in `Arc<RwLock<_>>` maps and is lost when the last clone is
//! dropped. Scans are paginated with a configurable page size so callers can
//! exercise multi-page behavior without a real database.

use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::schema::AttributeDefinition;

use super::{
    AttributeValue, BackendError, CreateTableRequest, PageToken, Record, ScanPage, StorageBackend,
};

const DEFAULT_PAGE_SIZE: usize = 100;

#[derive(Debug, Clone)]
struct Table {
    key: AttributeDefinition,
    items: BTreeMap<String, Record>,
}

impl Table {
    fn key_of(&self, record: &Record) -> Result<String, BackendError> {
        let value = record.get(&self.key.name).ok_or_else(|| {
            BackendError::InvalidData(format!("Missing key attribute: {}", self.key.name))
        })?;
        if value.scalar_type() != self.key.scalar_type {
            return Err(BackendError::InvalidData(format!(
                "Key attribute {} must be of type {}, got {}",
                self.key.name,
                self.key.scalar_type,
                value.scalar_type()
            )));
        }
        Ok(canonical_key(value))
    }
}

/// Order-preserving text form of a key value.
fn canonical_key(value: &AttributeValue) -> String {
    match value {
        AttributeValue::S(s) => format!("S:{s}"),
        AttributeValue::N(n) => format!("N:{n}"),
        AttributeValue::B(b) => {
            let hex: String = b.iter().map(|byte| format!("{byte:02x}")).collect();
            format!("B:{hex}")
        }
    }
}

/// Call counters, used by tests to assert on backend traffic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackendStats {
    pub create_table_calls: usize,
    /// Successful `put_item` plus `delete_item` calls.
    pub mutations: usize,
    pub scan_pages: usize,
}

#[derive(Debug, Default)]
struct Counters {
    create_table_calls: AtomicUsize,
    mutations: AtomicUsize,
    scan_pages: AtomicUsize,
}

/// In-memory [`StorageBackend`].
#[derive(Debug, Clone)]
pub struct InMemoryBackend {
    tables: Arc<RwLock<BTreeMap<String, Table>>>,
    page_size: usize,
    counters: Arc<Counters>,
}

impl Default for InMemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBackend {
    /// Creates an empty backend with the default page size.
    pub fn new() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }

    /// Creates an empty backend returning at most `page_size` items per scan page.
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            tables: Arc::new(RwLock::new(BTreeMap::new())),
            page_size: page_size.max(1),
            counters: Arc::new(Counters::default()),
        }
    }

    pub fn stats(&self) -> BackendStats {
        BackendStats {
            create_table_calls: self.counters.create_table_calls.load(Ordering::Relaxed),
            mutations: self.counters.mutations.load(Ordering::Relaxed),
            scan_pages: self.counters.scan_pages.load(Ordering::Relaxed),
        }
    }

}

#[async_trait]
impl StorageBackend for InMemoryBackend {
    async fn list_tables(&self) -> Result<Vec<String>, BackendError> {
        let tables = self.tables.read().await;
        Ok(tables.keys().cloned().collect())
    }

    async fn create_table(&self, request: &CreateTableRequest) -> Result<(), BackendError> {
        self.counters
            .create_table_calls
            .fetch_add(1, Ordering::Relaxed);

        let mut tables = self.tables.write().await;
        if tables.contains_key(&request.table_name) {
            return Err(BackendError::TableAlreadyExists(request.table_name.clone()));
        }
        tables.insert(
            request.table_name.clone(),
            Table {
                key: request.key.clone(),
                items: BTreeMap::new(),
            },
        );
        Ok(())
    }

    async fn get_item(&self, table: &str, key: &Record) -> Result<Option<Record>, BackendError> {
        let tables = self.tables.read().await;
        let table_data = tables
            .get(table)
            .ok_or_else(|| BackendError::TableNotFound(table.to_string()))?;
        let key = table_data.key_of(key)?;
        Ok(table_data.items.get(&key).cloned())
    }

    async fn put_item(&self, table: &str, record: Record) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        let table_data = tables
            .get_mut(table)
            .ok_or_else(|| BackendError::TableNotFound(table.to_string()))?;
        let key = table_data.key_of(&record)?;
        table_data.items.insert(key, record);
        self.counters.mutations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: &Record) -> Result<(), BackendError> {
        let mut tables = self.tables.write().await;
        let table_data = tables
            .get_mut(table)
            .ok_or_else(|| BackendError::TableNotFound(table.to_string()))?;
        let key = table_data.key_of(key)?;
        table_data.items.remove(&key);
        self.counters.mutations.fetch_add(1, Ordering::Relaxed);
        Ok(())
    }

    async fn scan_page(
        &self,
        table: &str,
        start: Option<PageToken>,
    ) -> Result<ScanPage, BackendError> {
        let tables = self.tables.read().await;
        let table_data = tables
            .get(table)
            .ok_or_else(|| BackendError::TableNotFound(table.to_string()))?;
        self.counters.scan_pages.fetch_add(1, Ordering::Relaxed);

        let lower = match start {
            Some(PageToken(token)) => Bound::Excluded(table_data.key_of(&token)?),
            None => Bound::Unbounded,
        };
        let mut remaining = table_data.items.range((lower, Bound::Unbounded));

        let items: Vec<Record> = remaining
            .by_ref()
            .take(self.page_size)
            .map(|(_, record)| record.clone())
            .collect();

        let next = match (remaining.next(), items.last()) {
            (Some(_), Some(last)) => {
                let key_value = last.get(&table_data.key.name).cloned().ok_or_else(|| {
                    BackendError::InvalidData(format!(
                        "Missing key attribute: {}",
                        table_data.key.name
                    ))
                })?;
                Some(PageToken(Record::from([(
                    table_data.key.name.clone(),
                    key_value,
                )])))
            }
            _ => None,
        };

        Ok(ScanPage { items, next })
    }
}
