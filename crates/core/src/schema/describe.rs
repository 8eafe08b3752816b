use crate::entity::{AttributeKind, AttributeSpec, Entity};

use super::{AttributeDefinition, ScalarType, Schema, SchemaError};

/// Maps a semantic attribute kind to its backend scalar type.
///
/// Returns `None` for kinds with no scalar mapping.
///
/// # Examples
///
/// ```
/// use catalog_core::entity::AttributeKind;
/// use catalog_core::schema::{scalar_type_for, ScalarType};
///
/// assert_eq!(scalar_type_for(AttributeKind::Decimal), Some(ScalarType::N));
/// assert_eq!(scalar_type_for(AttributeKind::Boolean), None);
/// ```
pub fn scalar_type_for(kind: AttributeKind) -> Option<ScalarType> {
    match kind {
        AttributeKind::String | AttributeKind::Identifier => Some(ScalarType::S),
        AttributeKind::Integer | AttributeKind::Decimal | AttributeKind::Float => {
            Some(ScalarType::N)
        }
        AttributeKind::Binary => Some(ScalarType::B),
        AttributeKind::Boolean
        | AttributeKind::Timestamp
        | AttributeKind::List
        | AttributeKind::Map => None,
    }
}

fn is_key_kind(kind: AttributeKind) -> bool {
    matches!(
        kind,
        AttributeKind::String | AttributeKind::Identifier | AttributeKind::Integer
    )
}

/// Derives the storage schema of an entity type.
pub fn describe<T: Entity>() -> Result<Schema, SchemaError> {
    describe_attributes(T::ENTITY_TYPE, T::TABLE_NAME, T::attributes())
}

/// Derives a schema from raw metadata. Pure and deterministic.
pub fn describe_attributes(
    entity: &'static str,
    table_name: &str,
    attributes: &[AttributeSpec],
) -> Result<Schema, SchemaError> {
    if table_name.trim().is_empty() {
        return Err(SchemaError::EmptyTableName { entity });
    }

    let keys: Vec<&AttributeSpec> = attributes.iter().filter(|a| a.is_key()).collect();
    let key = match keys.as_slice() {
        [] => return Err(SchemaError::NoKeyAttribute { entity }),
        [key] => *key,
        many => {
            return Err(SchemaError::MultipleKeyAttributes {
                entity,
                attributes: many.iter().map(|a| a.name).collect(),
            })
        }
    };

    if !is_key_kind(key.kind) {
        return Err(SchemaError::UnsupportedKeyType {
            entity,
            attribute: key.name,
            kind: key.kind,
        });
    }

    let definition = |spec: &AttributeSpec| {
        scalar_type_for(spec.kind)
            .map(|scalar_type| AttributeDefinition::new(spec.name, scalar_type))
            .ok_or(SchemaError::UnsupportedType {
                entity,
                attribute: spec.name,
                kind: spec.kind,
            })
    };

    Ok(Schema {
        table_name: table_name.to_string(),
        key: definition(key)?,
        attributes: attributes
            .iter()
            .filter(|a| !a.is_key())
            .map(definition)
            .collect::<Result<_, _>>()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_LIKE: &[AttributeSpec] = &[
        AttributeSpec::key("id", AttributeKind::Identifier),
        AttributeSpec::persisted("name", AttributeKind::String),
        AttributeSpec::persisted("price", AttributeKind::Decimal),
        AttributeSpec::persisted("stock", AttributeKind::Integer),
        AttributeSpec::persisted("thumbnail", AttributeKind::Binary),
    ];

    #[test]
    fn test_describe_maps_scalar_types_in_declaration_order() {
        let schema = describe_attributes("Product", "ProductTable", PRODUCT_LIKE).unwrap();

        assert_eq!(schema.table_name, "ProductTable");
        assert_eq!(schema.key, AttributeDefinition::new("id", ScalarType::S));
        assert_eq!(
            schema.attributes,
            vec![
                AttributeDefinition::new("name", ScalarType::S),
                AttributeDefinition::new("price", ScalarType::N),
                AttributeDefinition::new("stock", ScalarType::N),
                AttributeDefinition::new("thumbnail", ScalarType::B),
            ]
        );
    }

    #[test]
    fn test_describe_is_deterministic() {
        let first = describe_attributes("Product", "ProductTable", PRODUCT_LIKE);
        let second = describe_attributes("Product", "ProductTable", PRODUCT_LIKE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_key_may_be_declared_after_other_attributes() {
        let attrs = [
            AttributeSpec::persisted("label", AttributeKind::String),
            AttributeSpec::key("number", AttributeKind::Integer),
        ];

        let schema = describe_attributes("Ticket", "Tickets", &attrs).unwrap();

        assert_eq!(schema.key, AttributeDefinition::new("number", ScalarType::N));
        assert_eq!(schema.attributes.len(), 1);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let attrs = [AttributeSpec::persisted("name", AttributeKind::String)];

        assert_eq!(
            describe_attributes("Widget", "Widgets", &attrs),
            Err(SchemaError::NoKeyAttribute { entity: "Widget" })
        );
    }

    #[test]
    fn test_two_keys_are_rejected() {
        let attrs = [
            AttributeSpec::key("id", AttributeKind::Identifier),
            AttributeSpec::key("sku", AttributeKind::String),
        ];

        assert_eq!(
            describe_attributes("Widget", "Widgets", &attrs),
            Err(SchemaError::MultipleKeyAttributes {
                entity: "Widget",
                attributes: vec!["id", "sku"],
            })
        );
    }

    #[test]
    fn test_unsupported_attribute_type_is_rejected() {
        let attrs = [
            AttributeSpec::key("id", AttributeKind::Identifier),
            AttributeSpec::persisted("tags", AttributeKind::List),
        ];

        assert_eq!(
            describe_attributes("Widget", "Widgets", &attrs),
            Err(SchemaError::UnsupportedType {
                entity: "Widget",
                attribute: "tags",
                kind: AttributeKind::List,
            })
        );
    }

    #[test]
    fn test_decimal_key_is_rejected() {
        let attrs = [AttributeSpec::key("weight", AttributeKind::Decimal)];

        assert!(matches!(
            describe_attributes("Widget", "Widgets", &attrs),
            Err(SchemaError::UnsupportedKeyType { .. })
        ));
    }

    #[test]
    fn test_blank_table_name_is_rejected() {
        assert_eq!(
            describe_attributes("Widget", "  ", PRODUCT_LIKE),
            Err(SchemaError::EmptyTableName { entity: "Widget" })
        );
    }
}
