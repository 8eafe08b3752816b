//! The entity contract.
//!
//! Any record type that wants to be persisted through the generic store
//! implements [`Entity`]. Structural metadata is declared statically as a
//! slice of [`AttributeSpec`], which the schema descriptor turns into a
//! storage [`Schema`](crate::schema::Schema) without runtime introspection.

use std::fmt::{self, Display};

use crate::storage::{AttributeValue, BackendError, Record};

/// Semantic type of an entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeKind {
    String,
    /// UUID-like identifier, stored as a string.
    Identifier,
    Integer,
    Decimal,
    Float,
    Binary,
    Boolean,
    Timestamp,
    List,
    Map,
}

impl AttributeKind {
    /// Returns the lowercase name used in error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeKind::String => "string",
            AttributeKind::Identifier => "identifier",
            AttributeKind::Integer => "integer",
            AttributeKind::Decimal => "decimal",
            AttributeKind::Float => "float",
            AttributeKind::Binary => "binary",
            AttributeKind::Boolean => "boolean",
            AttributeKind::Timestamp => "timestamp",
            AttributeKind::List => "list",
            AttributeKind::Map => "map",
        }
    }
}

impl Display for AttributeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether an attribute is the table key or a plain persisted attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeRole {
    Key,
    Persisted,
}

/// Static description of one entity attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeSpec {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub role: AttributeRole,
}

impl AttributeSpec {
    /// Declares the key attribute.
    pub const fn key(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: AttributeRole::Key,
        }
    }

    /// Declares a persisted, non-key attribute.
    pub const fn persisted(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            role: AttributeRole::Persisted,
        }
    }

    pub fn is_key(&self) -> bool {
        self.role == AttributeRole::Key
    }
}

/// A record type that can be stored by the generic persistence layer.
///
/// # Example
///
/// ```
/// use catalog_core::entity::{AttributeKind, AttributeSpec, Entity};
/// use catalog_core::storage::{get_string, AttributeValue, BackendError, Record};
///
/// #[derive(Debug, Clone, PartialEq)]
/// struct Tag {
///     slug: String,
///     label: String,
/// }
///
/// impl Entity for Tag {
///     type Key = String;
///     const ENTITY_TYPE: &'static str = "Tag";
///     const TABLE_NAME: &'static str = "TagTable";
///
///     fn attributes() -> &'static [AttributeSpec] {
///         const ATTRIBUTES: &[AttributeSpec] = &[
///             AttributeSpec::key("slug", AttributeKind::String),
///             AttributeSpec::persisted("label", AttributeKind::String),
///         ];
///         ATTRIBUTES
///     }
///
///     fn key(&self) -> String {
///         self.slug.clone()
///     }
///
///     fn key_value(key: &String) -> AttributeValue {
///         AttributeValue::S(key.clone())
///     }
///
///     fn to_record(&self) -> Record {
///         Record::from([
///             ("slug".to_string(), AttributeValue::S(self.slug.clone())),
///             ("label".to_string(), AttributeValue::S(self.label.clone())),
///         ])
///     }
///
///     fn from_record(record: &Record) -> Result<Self, BackendError> {
///         Ok(Self {
///             slug: get_string(record, "slug")?,
///             label: get_string(record, "label")?,
///         })
///     }
/// }
///
/// let schema = catalog_core::schema::describe::<Tag>().unwrap();
/// assert_eq!(schema.table_name, "TagTable");
/// assert_eq!(schema.key.name, "slug");
/// ```
pub trait Entity: Clone + Send + Sync + 'static {
    /// Type of the key attribute value.
    type Key: Clone + Display + Send + Sync + 'static;

    /// Human readable entity name, used in errors and logs.
    const ENTITY_TYPE: &'static str;

    /// Name of the backing table. Fixed for the lifetime of the type.
    const TABLE_NAME: &'static str;

    /// Structural metadata: the key attribute plus every persisted attribute.
    fn attributes() -> &'static [AttributeSpec];

    /// Returns this entity's key.
    fn key(&self) -> Self::Key;

    /// Converts a key into the value stored under the key attribute.
    fn key_value(key: &Self::Key) -> AttributeValue;

    /// Converts the entity into a full record, key attribute included.
    fn to_record(&self) -> Record;

    /// Rebuilds an entity from a stored record.
    ///
    /// Must fail with [`BackendError::InvalidData`] rather than return a
    /// partially populated entity.
    fn from_record(record: &Record) -> Result<Self, BackendError>;
}
