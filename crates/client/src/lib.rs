//! catalog_client - HTTP client and CLI for the catalog API.

pub mod cli;
pub mod client;
pub mod error;
pub mod output;

pub use client::CatalogClient;
pub use error::{ClientError, Result};
