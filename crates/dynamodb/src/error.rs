//! DynamoDB error mapping.
//!
//! Maps AWS SDK errors to [`BackendError`]. Transport failures (dispatch or
//! timeout) become `ConnectionFailed` regardless of the operation.

use std::fmt::Debug;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::create_table::CreateTableError;
use aws_sdk_dynamodb::operation::delete_item::DeleteItemError;
use aws_sdk_dynamodb::operation::delete_table::DeleteTableError;
use aws_sdk_dynamodb::operation::describe_table::DescribeTableError;
use aws_sdk_dynamodb::operation::get_item::GetItemError;
use aws_sdk_dynamodb::operation::list_tables::ListTablesError;
use aws_sdk_dynamodb::operation::put_item::PutItemError;
use aws_sdk_dynamodb::operation::scan::ScanError;
use catalog_core::storage::BackendError;

fn transport_failure<E, R>(err: &SdkError<E, R>) -> Option<BackendError> {
    match err {
        SdkError::DispatchFailure(e) => Some(BackendError::ConnectionFailed(format!(
            "Dispatch failure: {:?}",
            e
        ))),
        SdkError::TimeoutError(_) => Some(BackendError::ConnectionFailed(
            "Request timed out".to_string(),
        )),
        _ => None,
    }
}

/// Map a ListTables SDK error to BackendError.
pub fn map_list_tables_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ListTablesError, R>,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        ListTablesError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("ListTables failed: {:?}", err)),
    }
}

/// Map a CreateTable SDK error to BackendError.
pub fn map_create_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<CreateTableError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        CreateTableError::ResourceInUseException(_) => {
            BackendError::TableAlreadyExists(table.to_string())
        }
        CreateTableError::LimitExceededException(_) => {
            BackendError::QueryFailed("Table limit exceeded".to_string())
        }
        CreateTableError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("CreateTable failed: {:?}", err)),
    }
}

/// Map a DescribeTable SDK error to BackendError.
pub fn map_describe_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DescribeTableError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        DescribeTableError::ResourceNotFoundException(_) => {
            BackendError::TableNotFound(table.to_string())
        }
        err => BackendError::QueryFailed(format!("DescribeTable failed: {:?}", err)),
    }
}

/// Map a DeleteTable SDK error to BackendError.
pub fn map_delete_table_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteTableError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        DeleteTableError::ResourceNotFoundException(_) => {
            BackendError::TableNotFound(table.to_string())
        }
        DeleteTableError::ResourceInUseException(_) => {
            BackendError::QueryFailed(format!("Table {} is in use", table))
        }
        err => BackendError::QueryFailed(format!("DeleteTable failed: {:?}", err)),
    }
}

/// Map a GetItem SDK error to BackendError.
pub fn map_get_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<GetItemError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        GetItemError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        GetItemError::ProvisionedThroughputExceededException(_) => {
            BackendError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        GetItemError::RequestLimitExceeded(_) => {
            BackendError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        GetItemError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("GetItem failed: {:?}", err)),
    }
}

/// Map a PutItem SDK error to BackendError.
pub fn map_put_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<PutItemError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        PutItemError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        PutItemError::ProvisionedThroughputExceededException(_) => {
            BackendError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        PutItemError::RequestLimitExceeded(_) => {
            BackendError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        PutItemError::ItemCollectionSizeLimitExceededException(_) => {
            BackendError::QueryFailed("Item collection size limit exceeded".to_string())
        }
        PutItemError::TransactionConflictException(_) => {
            BackendError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        PutItemError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("PutItem failed: {:?}", err)),
    }
}

/// Map a DeleteItem SDK error to BackendError.
pub fn map_delete_item_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<DeleteItemError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        DeleteItemError::ResourceNotFoundException(_) => {
            BackendError::TableNotFound(table.to_string())
        }
        DeleteItemError::ProvisionedThroughputExceededException(_) => {
            BackendError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        DeleteItemError::RequestLimitExceeded(_) => {
            BackendError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        DeleteItemError::TransactionConflictException(_) => {
            BackendError::QueryFailed("Transaction conflict, please retry".to_string())
        }
        DeleteItemError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("DeleteItem failed: {:?}", err)),
    }
}

/// Map a Scan SDK error to BackendError.
pub fn map_scan_error<R: Debug + Send + Sync + 'static>(
    err: SdkError<ScanError, R>,
    table: &str,
) -> BackendError {
    if let Some(e) = transport_failure(&err) {
        return e;
    }
    match err.into_service_error() {
        ScanError::ResourceNotFoundException(_) => BackendError::TableNotFound(table.to_string()),
        ScanError::ProvisionedThroughputExceededException(_) => {
            BackendError::QueryFailed("Throughput exceeded, please retry".to_string())
        }
        ScanError::RequestLimitExceeded(_) => {
            BackendError::QueryFailed("Request limit exceeded, please retry".to_string())
        }
        ScanError::InternalServerError(_) => {
            BackendError::QueryFailed("DynamoDB internal server error".to_string())
        }
        err => BackendError::QueryFailed(format!("Scan failed: {:?}", err)),
    }
}
