//! DynamoDB storage backend.
//!
//! Implements [`catalog_core::storage::StorageBackend`] on top of
//! `aws-sdk-dynamodb`. Record conversions are pure and live in
//! [`conversions`]; SDK failures are mapped to
//! [`BackendError`](catalog_core::storage::BackendError) in [`error`].

mod backend;
mod client;
pub mod conversions;
pub mod error;

pub use backend::DynamoDbBackend;
pub use client::{create_client, AwsConfig};
