//! Conversions between SDK attribute maps and core records.
//!
//! Pure functions, testable without DynamoDB access.

use std::collections::HashMap;

use aws_sdk_dynamodb::primitives::Blob;
use aws_sdk_dynamodb::types::{
    AttributeDefinition as SdkAttributeDefinition, AttributeValue as SdkAttributeValue,
    BillingMode as SdkBillingMode, KeySchemaElement, KeyType, ProvisionedThroughput,
    ScalarAttributeType,
};
use catalog_core::schema::{AttributeDefinition, ScalarType};
use catalog_core::storage::{AttributeValue, BackendError, BillingMode, Record};

/// SDK item type.
pub type Item = HashMap<String, SdkAttributeValue>;

pub fn to_sdk_value(value: AttributeValue) -> SdkAttributeValue {
    match value {
        AttributeValue::S(s) => SdkAttributeValue::S(s),
        AttributeValue::N(n) => SdkAttributeValue::N(n),
        AttributeValue::B(b) => SdkAttributeValue::B(Blob::new(b)),
    }
}

/// Converts an SDK value. Only scalar string, number and binary values are
/// representable in a [`Record`].
pub fn from_sdk_value(name: &str, value: SdkAttributeValue) -> Result<AttributeValue, BackendError> {
    match value {
        SdkAttributeValue::S(s) => Ok(AttributeValue::S(s)),
        SdkAttributeValue::N(n) => Ok(AttributeValue::N(n)),
        SdkAttributeValue::B(b) => Ok(AttributeValue::B(b.into_inner())),
        other => Err(BackendError::InvalidData(format!(
            "Unsupported attribute value for {}: {:?}",
            name, other
        ))),
    }
}

pub fn to_item(record: Record) -> Item {
    record
        .into_iter()
        .map(|(name, value)| (name, to_sdk_value(value)))
        .collect()
}

pub fn from_item(item: Item) -> Result<Record, BackendError> {
    item.into_iter()
        .map(|(name, value)| {
            let value = from_sdk_value(&name, value)?;
            Ok((name, value))
        })
        .collect()
}

pub fn to_scalar_type(scalar_type: ScalarType) -> ScalarAttributeType {
    match scalar_type {
        ScalarType::S => ScalarAttributeType::S,
        ScalarType::N => ScalarAttributeType::N,
        ScalarType::B => ScalarAttributeType::B,
    }
}

pub fn to_attribute_definition(
    definition: &AttributeDefinition,
) -> Result<SdkAttributeDefinition, BackendError> {
    SdkAttributeDefinition::builder()
        .attribute_name(&definition.name)
        .attribute_type(to_scalar_type(definition.scalar_type))
        .build()
        .map_err(|e| BackendError::QueryFailed(e.to_string()))
}

/// Builds the single HASH key schema element.
pub fn to_hash_key(definition: &AttributeDefinition) -> Result<KeySchemaElement, BackendError> {
    KeySchemaElement::builder()
        .attribute_name(&definition.name)
        .key_type(KeyType::Hash)
        .build()
        .map_err(|e| BackendError::QueryFailed(e.to_string()))
}

/// Billing mode plus provisioned throughput, when any.
pub fn to_billing(
    billing_mode: BillingMode,
) -> Result<(SdkBillingMode, Option<ProvisionedThroughput>), BackendError> {
    match billing_mode {
        BillingMode::PayPerRequest => Ok((SdkBillingMode::PayPerRequest, None)),
        BillingMode::Provisioned {
            read_capacity,
            write_capacity,
        } => {
            let throughput = ProvisionedThroughput::builder()
                .read_capacity_units(read_capacity)
                .write_capacity_units(write_capacity)
                .build()
                .map_err(|e| BackendError::QueryFailed(e.to_string()))?;
            Ok((SdkBillingMode::Provisioned, Some(throughput)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_to_item_and_back() {
        let record = Record::from([
            ("id".to_string(), AttributeValue::S("p1".to_string())),
            ("price".to_string(), AttributeValue::N("9.99".to_string())),
            ("thumb".to_string(), AttributeValue::B(vec![1, 2])),
        ]);

        let item = to_item(record.clone());

        assert_eq!(item["id"], SdkAttributeValue::S("p1".to_string()));
        assert_eq!(item["price"], SdkAttributeValue::N("9.99".to_string()));
        assert_eq!(from_item(item).unwrap(), record);
    }

    #[test]
    fn test_non_scalar_values_are_invalid_data() {
        let item = Item::from([("active".to_string(), SdkAttributeValue::Bool(true))]);

        let result = from_item(item);

        assert!(matches!(result, Err(BackendError::InvalidData(msg)) if msg.contains("active")));
    }

    #[test]
    fn test_key_schema_is_hash() {
        let key = AttributeDefinition::new("id", ScalarType::S);

        let element = to_hash_key(&key).unwrap();
        let definition = to_attribute_definition(&key).unwrap();

        assert_eq!(element.attribute_name(), "id");
        assert_eq!(element.key_type(), &KeyType::Hash);
        assert_eq!(definition.attribute_type(), &ScalarAttributeType::S);
    }

    #[test]
    fn test_billing_modes() {
        let (mode, throughput) = to_billing(BillingMode::PayPerRequest).unwrap();
        assert_eq!(mode, SdkBillingMode::PayPerRequest);
        assert!(throughput.is_none());

        let (mode, throughput) = to_billing(BillingMode::Provisioned {
            read_capacity: 5,
            write_capacity: 2,
        })
        .unwrap();
        assert_eq!(mode, SdkBillingMode::Provisioned);
        let throughput = throughput.unwrap();
        assert_eq!(throughput.read_capacity_units(), 5);
        assert_eq!(throughput.write_capacity_units(), 2);
    }
}
