use std::collections::HashMap;

use crate::schema::{AttributeDefinition, ScalarType, Schema};

/// A single stored attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AttributeValue {
    /// String.
    S(String),
    /// Number, kept as its decimal text so no precision is lost in transit.
    N(String),
    /// Binary.
    B(Vec<u8>),
}

impl AttributeValue {
    pub fn as_s(&self) -> Option<&str> {
        match self {
            AttributeValue::S(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_n(&self) -> Option<&str> {
        match self {
            AttributeValue::N(n) => Some(n),
            _ => None,
        }
    }

    pub fn as_b(&self) -> Option<&[u8]> {
        match self {
            AttributeValue::B(b) => Some(b),
            _ => None,
        }
    }

    /// The backend scalar type this value is stored as.
    pub fn scalar_type(&self) -> ScalarType {
        match self {
            AttributeValue::S(_) => ScalarType::S,
            AttributeValue::N(_) => ScalarType::N,
            AttributeValue::B(_) => ScalarType::B,
        }
    }
}

/// A stored item: attribute name to value.
pub type Record = HashMap<String, AttributeValue>;

/// Opaque continuation token returned by a scan page.
///
/// Holds the key of the last item the backend evaluated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageToken(pub Record);

/// One page of a full-table scan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPage {
    pub items: Vec<Record>,
    /// `None` once the backend has no more pages.
    pub next: Option<PageToken>,
}

/// Capacity mode used when creating tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BillingMode {
    #[default]
    PayPerRequest,
    Provisioned {
        read_capacity: i64,
        write_capacity: i64,
    },
}

/// A create-table request derived from a [`Schema`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTableRequest {
    pub table_name: String,
    /// The sole partition key.
    pub key: AttributeDefinition,
    /// Key definition first, then every persisted attribute.
    pub attribute_definitions: Vec<AttributeDefinition>,
    pub billing_mode: BillingMode,
}

impl CreateTableRequest {
    /// Builds the request for a schema. Pure, no I/O.
    pub fn from_schema(schema: &Schema, billing_mode: BillingMode) -> Self {
        Self {
            table_name: schema.table_name.clone(),
            key: schema.key.clone(),
            attribute_definitions: schema.attribute_definitions(),
            billing_mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_schema() -> Schema {
        Schema {
            table_name: "ProductTable".to_string(),
            key: AttributeDefinition::new("id", ScalarType::S),
            attributes: vec![
                AttributeDefinition::new("name", ScalarType::S),
                AttributeDefinition::new("price", ScalarType::N),
            ],
        }
    }

    #[test]
    fn test_create_table_request_puts_key_first() {
        let request = CreateTableRequest::from_schema(&sample_schema(), BillingMode::default());

        assert_eq!(request.table_name, "ProductTable");
        assert_eq!(request.key.name, "id");
        let names: Vec<&str> = request
            .attribute_definitions
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(names, vec!["id", "name", "price"]);
        assert_eq!(request.billing_mode, BillingMode::PayPerRequest);
    }

    #[test]
    fn test_attribute_value_accessors() {
        let value = AttributeValue::N("9.99".to_string());
        assert_eq!(value.as_n(), Some("9.99"));
        assert_eq!(value.as_s(), None);
        assert_eq!(value.scalar_type(), ScalarType::N);

        let value = AttributeValue::B(vec![1, 2, 3]);
        assert_eq!(value.as_b(), Some(&[1u8, 2, 3][..]));
    }
}
