mod error;
mod http_mapping;
mod memory;
mod record;
mod traits;
mod types;

pub use error::{BackendError, RepositoryError, Result};
pub use http_mapping::repository_error_to_status_code;
pub use memory::{BackendStats, InMemoryBackend};
pub use record::{
    get_bytes, get_f64, get_i64, get_string, get_uuid, number_value,
};
pub use traits::StorageBackend;
pub use types::{AttributeValue, BillingMode, CreateTableRequest, PageToken, Record, ScanPage};
