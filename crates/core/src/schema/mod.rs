//! Schema descriptor and registry.
//!
//! Turns an entity's static [`AttributeSpec`](crate::entity::AttributeSpec)
//! metadata into the storage-level [`Schema`] used to provision tables and
//! build key records.

mod describe;
mod error;
mod registry;
mod types;

pub use describe::{describe, describe_attributes, scalar_type_for};
pub use error::SchemaError;
pub use registry::SchemaRegistry;
pub use types::{AttributeDefinition, ScalarType, Schema};
