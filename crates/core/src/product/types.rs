use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entity::{AttributeKind, AttributeSpec, Entity};
use crate::storage::{get_f64, get_i64, get_string, get_uuid, number_value};
use crate::storage::{AttributeValue, BackendError, Record};

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub description: String,
    pub stock: i64,
}

impl Product {
    /// Create a new product with a generated ID.
    pub fn new(
        name: impl Into<String>,
        price: f64,
        description: impl Into<String>,
        stock: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            price,
            description: description.into(),
            stock,
        }
    }
}

const PRODUCT_ATTRIBUTES: &[AttributeSpec] = &[
    AttributeSpec::key("id", AttributeKind::Identifier),
    AttributeSpec::persisted("name", AttributeKind::String),
    AttributeSpec::persisted("price", AttributeKind::Decimal),
    AttributeSpec::persisted("description", AttributeKind::String),
    AttributeSpec::persisted("stock", AttributeKind::Integer),
];

impl Entity for Product {
    type Key = Uuid;
    const ENTITY_TYPE: &'static str = "Product";
    const TABLE_NAME: &'static str = "ProductTable";

    fn attributes() -> &'static [AttributeSpec] {
        PRODUCT_ATTRIBUTES
    }

    fn key(&self) -> Uuid {
        self.id
    }

    fn key_value(key: &Uuid) -> AttributeValue {
        AttributeValue::S(key.to_string())
    }

    fn to_record(&self) -> Record {
        Record::from([
            ("id".to_string(), Self::key_value(&self.id)),
            ("name".to_string(), AttributeValue::S(self.name.clone())),
            ("price".to_string(), number_value(self.price)),
            (
                "description".to_string(),
                AttributeValue::S(self.description.clone()),
            ),
            ("stock".to_string(), number_value(self.stock)),
        ])
    }

    fn from_record(record: &Record) -> Result<Self, BackendError> {
        Ok(Self {
            id: get_uuid(record, "id")?,
            name: get_string(record, "name")?,
            price: get_f64(record, "price")?,
            description: get_string(record, "description")?,
            stock: get_i64(record, "stock")?,
        })
    }
}
