use thiserror::Error;

use crate::entity::AttributeKind;

/// Errors raised while deriving a schema from entity metadata.
///
/// These describe a broken entity declaration and are not recoverable at
/// runtime.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("{entity} has no key attribute")]
    NoKeyAttribute { entity: &'static str },
    #[error("{entity} declares more than one key attribute: {}", .attributes.join(", "))]
    MultipleKeyAttributes {
        entity: &'static str,
        attributes: Vec<&'static str>,
    },
    #[error("{entity}.{attribute} has unsupported type: {kind}")]
    UnsupportedType {
        entity: &'static str,
        attribute: &'static str,
        kind: AttributeKind,
    },
    #[error("{entity}.{attribute} cannot be a key of type {kind}")]
    UnsupportedKeyType {
        entity: &'static str,
        attribute: &'static str,
        kind: AttributeKind,
    },
    #[error("{entity} has an empty table name")]
    EmptyTableName { entity: &'static str },
}
