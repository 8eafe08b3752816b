use std::{env, time::Duration};

use catalog_core::storage::BillingMode;
use thiserror::Error;

/// Errors raised while reading configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity mode for tables created at startup.
    pub billing_mode: BillingMode,
    /// Custom DynamoDB endpoint (for local DynamoDB).
    pub aws_endpoint_url: Option<String>,
    /// AWS region (default: "us-east-1")
    pub aws_region: String,
    /// Request timeout in seconds (default: 10)
    pub request_timeout_seconds: u64,
    /// Maximum items per scan page. Backend default when unset.
    pub scan_page_size: Option<i32>,
    /// Number of demo products to insert at startup (default: 0)
    pub seed_demo_products: u32,
}

fn parse<T: std::str::FromStr>(
    name: &'static str,
    value: Option<String>,
) -> Result<Option<T>, ConfigError> {
    value
        .map(|v| {
            v.trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { name, value: v })
        })
        .transpose()
}

/// Like [`parse`], but zero and negative values are rejected.
fn parse_positive<T>(name: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = value.clone();
    match parse::<T>(name, value)? {
        Some(n) if n <= T::default() => Err(ConfigError::InvalidValue {
            name,
            value: raw.unwrap_or_default(),
        }),
        parsed => Ok(parsed),
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `DYNAMODB_BILLING_MODE` - `pay_per_request` or `provisioned` (default: `pay_per_request`)
    /// - `DYNAMODB_READ_CAPACITY` / `DYNAMODB_WRITE_CAPACITY` - provisioned capacity (default: 1)
    /// - `AWS_ENDPOINT_URL` - custom DynamoDB endpoint
    /// - `AWS_REGION` - AWS region (default: "us-east-1")
    /// - `REQUEST_TIMEOUT_SECONDS` - request timeout (default: 10)
    /// - `SCAN_PAGE_SIZE` - maximum items per scan page
    /// - `SEED_DEMO_PRODUCTS` - demo products inserted at startup (default: 0)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let billing_mode = match lookup("DYNAMODB_BILLING_MODE").as_deref().map(str::trim) {
            None | Some("") | Some("pay_per_request") => BillingMode::PayPerRequest,
            Some("provisioned") => BillingMode::Provisioned {
                read_capacity: parse_positive("DYNAMODB_READ_CAPACITY", lookup("DYNAMODB_READ_CAPACITY"))?
                    .unwrap_or(1),
                write_capacity: parse_positive(
                    "DYNAMODB_WRITE_CAPACITY",
                    lookup("DYNAMODB_WRITE_CAPACITY"),
                )?
                .unwrap_or(1),
            },
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    name: "DYNAMODB_BILLING_MODE",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            billing_mode,
            aws_endpoint_url: lookup("AWS_ENDPOINT_URL"),
            aws_region: lookup("AWS_REGION").unwrap_or_else(|| "us-east-1".to_string()),
            request_timeout_seconds: parse_positive(
                "REQUEST_TIMEOUT_SECONDS",
                lookup("REQUEST_TIMEOUT_SECONDS"),
            )?
            .unwrap_or(10),
            scan_page_size: parse_positive("SCAN_PAGE_SIZE", lookup("SCAN_PAGE_SIZE"))?,
            seed_demo_products: parse("SEED_DEMO_PRODUCTS", lookup("SEED_DEMO_PRODUCTS"))?
                .unwrap_or(0),
        })
    }

    /// Get request timeout as a Duration.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            billing_mode: BillingMode::PayPerRequest,
            aws_endpoint_url: None,
            aws_region: "us-east-1".to_string(),
            request_timeout_seconds: 10,
            scan_page_size: None,
            seed_demo_products: 0,
        }
    }
}
