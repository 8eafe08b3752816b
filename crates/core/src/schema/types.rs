use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::storage::{AttributeValue, Record};

/// Backend scalar attribute type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    /// String
    S,
    /// Number
    N,
    /// Binary
    B,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ScalarType::S => "S",
            ScalarType::N => "N",
            ScalarType::B => "B",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttributeDefinition {
    pub name: String,
    pub scalar_type: ScalarType,
}

impl AttributeDefinition {
    pub fn new(name: impl Into<String>, scalar_type: ScalarType) -> Self {
        Self {
            name: name.into(),
            scalar_type,
        }
    }
}

/// Storage schema of one entity type. Derived, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    pub table_name: String,
    pub key: AttributeDefinition,
    /// Persisted non-key attributes, in declaration order.
    pub attributes: Vec<AttributeDefinition>,
}

impl Schema {
    pub fn key_name(&self) -> &str {
        &self.key.name
    }

    /// Key definition followed by every persisted attribute.
    pub fn attribute_definitions(&self) -> Vec<AttributeDefinition> {
        std::iter::once(self.key.clone())
            .chain(self.attributes.iter().cloned())
            .collect()
    }

    /// Builds the key-only record used for point lookups and deletes.
    pub fn key_record(&self, value: AttributeValue) -> Record {
        Record::from([(self.key.name.clone(), value)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_record_holds_only_the_key() {
        let schema = Schema {
            table_name: "ProductTable".to_string(),
            key: AttributeDefinition::new("id", ScalarType::S),
            attributes: vec![AttributeDefinition::new("name", ScalarType::S)],
        };

        let record = schema.key_record(AttributeValue::S("p1".to_string()));

        assert_eq!(record.len(), 1);
        assert_eq!(record["id"], AttributeValue::S("p1".to_string()));
        assert_eq!(schema.key_name(), "id");
    }

    #[test]
    fn test_scalar_type_display() {
        assert_eq!(ScalarType::N.to_string(), "N");
    }
}
