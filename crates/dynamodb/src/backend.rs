//! DynamoDB [`StorageBackend`] implementation.

use std::time::Duration;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::TableStatus;
use aws_sdk_dynamodb::Client;
use catalog_core::storage::{
    BackendError, CreateTableRequest, PageToken, Record, ScanPage, StorageBackend,
};

use crate::client::{create_client, AwsConfig};
use crate::conversions::{from_item, to_attribute_definition, to_billing, to_hash_key, to_item};
use crate::error::{
    map_create_table_error, map_delete_item_error, map_delete_table_error,
    map_describe_table_error, map_get_item_error, map_list_tables_error, map_put_item_error,
    map_scan_error,
};

const ACTIVATION_ATTEMPTS: u32 = 60;
const ACTIVATION_DELAY: Duration = Duration::from_secs(2);

/// DynamoDB-based storage backend.
#[derive(Debug, Clone)]
pub struct DynamoDbBackend {
    client: Client,
    scan_page_size: Option<i32>,
}

impl DynamoDbBackend {
    /// Creates a backend with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            scan_page_size: None,
        }
    }

    /// Creates a backend from an [`AwsConfig`].
    pub async fn from_config(config: &AwsConfig) -> Self {
        Self::new(create_client(config).await)
    }

    /// Caps the number of items DynamoDB evaluates per scan page.
    pub fn with_scan_page_size(mut self, scan_page_size: Option<i32>) -> Self {
        self.scan_page_size = scan_page_size;
        self
    }

    /// Returns the table status, or `None` when the table does not exist.
    pub async fn table_status(&self, table: &str) -> Result<Option<TableStatus>, BackendError> {
        match self.client.describe_table().table_name(table).send().await {
            Ok(response) => Ok(response
                .table
                .and_then(|description| description.table_status)),
            Err(err) => match map_describe_table_error(err, table) {
                BackendError::TableNotFound(_) => Ok(None),
                other => Err(other),
            },
        }
    }

    /// Deletes a table and all of its data.
    pub async fn delete_table(&self, table: &str) -> Result<(), BackendError> {
        self.client
            .delete_table()
            .table_name(table)
            .send()
            .await
            .map_err(|e| map_delete_table_error(e, table))?;
        tracing::info!(table = %table, "Deleted table");
        Ok(())
    }

    async fn wait_for_table_active(&self, table: &str) -> Result<(), BackendError> {
        for _ in 0..ACTIVATION_ATTEMPTS {
            if let Some(TableStatus::Active) = self.table_status(table).await? {
                return Ok(());
            }
            tracing::debug!(table = %table, "Waiting for table to become active");
            tokio::time::sleep(ACTIVATION_DELAY).await;
        }

        Err(BackendError::QueryFailed(format!(
            "Timeout waiting for table {} to become active",
            table
        )))
    }
}

#[async_trait]
impl StorageBackend for DynamoDbBackend {
    async fn list_tables(&self) -> Result<Vec<String>, BackendError> {
        let mut tables = Vec::new();
        let mut start: Option<String> = None;

        loop {
            let output = self
                .client
                .list_tables()
                .set_exclusive_start_table_name(start)
                .send()
                .await
                .map_err(map_list_tables_error)?;

            tables.extend(output.table_names.unwrap_or_default());
            match output.last_evaluated_table_name {
                Some(last) => start = Some(last),
                None => break,
            }
        }

        Ok(tables)
    }

    async fn create_table(&self, request: &CreateTableRequest) -> Result<(), BackendError> {
        // DynamoDB rejects definitions for attributes that are not part of a key.
        let key_definitions = request
            .attribute_definitions
            .iter()
            .filter(|d| d.name == request.key.name)
            .map(to_attribute_definition)
            .collect::<Result<Vec<_>, _>>()?;
        let (billing_mode, throughput) = to_billing(request.billing_mode)?;

        self.client
            .create_table()
            .table_name(&request.table_name)
            .key_schema(to_hash_key(&request.key)?)
            .set_attribute_definitions(Some(key_definitions))
            .billing_mode(billing_mode)
            .set_provisioned_throughput(throughput)
            .send()
            .await
            .map_err(|e| map_create_table_error(e, &request.table_name))?;

        self.wait_for_table_active(&request.table_name).await
    }

    async fn get_item(&self, table: &str, key: &Record) -> Result<Option<Record>, BackendError> {
        let output = self
            .client
            .get_item()
            .table_name(table)
            .set_key(Some(to_item(key.clone())))
            .send()
            .await
            .map_err(|e| map_get_item_error(e, table))?;

        output.item.map(from_item).transpose()
    }

    async fn put_item(&self, table: &str, record: Record) -> Result<(), BackendError> {
        self.client
            .put_item()
            .table_name(table)
            .set_item(Some(to_item(record)))
            .send()
            .await
            .map_err(|e| map_put_item_error(e, table))?;
        Ok(())
    }

    async fn delete_item(&self, table: &str, key: &Record) -> Result<(), BackendError> {
        self.client
            .delete_item()
            .table_name(table)
            .set_key(Some(to_item(key.clone())))
            .send()
            .await
            .map_err(|e| map_delete_item_error(e, table))?;
        Ok(())
    }

    async fn scan_page(
        &self,
        table: &str,
        start: Option<PageToken>,
    ) -> Result<ScanPage, BackendError> {
        let output = self
            .client
            .scan()
            .table_name(table)
            .set_exclusive_start_key(start.map(|PageToken(key)| to_item(key)))
            .set_limit(self.scan_page_size)
            .send()
            .await
            .map_err(|e| map_scan_error(e, table))?;

        let items = output
            .items
            .unwrap_or_default()
            .into_iter()
            .map(from_item)
            .collect::<Result<Vec<_>, _>>()?;
        let next = output
            .last_evaluated_key
            .map(from_item)
            .transpose()?
            .map(PageToken);

        Ok(ScanPage { items, next })
    }
}
