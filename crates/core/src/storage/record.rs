//! Record accessor helpers.
//!
//! Pure functions used by [`Entity::from_record`](crate::entity::Entity::from_record)
//! implementations. A missing or mistyped attribute is reported as
//! [`BackendError::InvalidData`].

use std::fmt::Display;

use uuid::Uuid;

use super::{AttributeValue, BackendError, Record};

/// Builds a number attribute from anything with a decimal `Display`.
pub fn number_value(n: impl Display) -> AttributeValue {
    AttributeValue::N(n.to_string())
}

/// Get a required string attribute.
pub fn get_string(record: &Record, key: &str) -> Result<String, BackendError> {
    record
        .get(key)
        .and_then(AttributeValue::as_s)
        .map(str::to_string)
        .ok_or_else(|| BackendError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required UUID attribute.
pub fn get_uuid(record: &Record, key: &str) -> Result<Uuid, BackendError> {
    let s = get_string(record, key)?;
    Uuid::parse_str(&s)
        .map_err(|e| BackendError::InvalidData(format!("Invalid UUID {}: {}", key, e)))
}

fn get_number<'a>(record: &'a Record, key: &str) -> Result<&'a str, BackendError> {
    record
        .get(key)
        .and_then(AttributeValue::as_n)
        .ok_or_else(|| BackendError::InvalidData(format!("Missing or invalid field: {}", key)))
}

/// Get a required integer attribute.
pub fn get_i64(record: &Record, key: &str) -> Result<i64, BackendError> {
    let n = get_number(record, key)?;
    n.parse()
        .map_err(|e| BackendError::InvalidData(format!("Invalid integer {}: {}", key, e)))
}

/// Get a required floating-point attribute.
pub fn get_f64(record: &Record, key: &str) -> Result<f64, BackendError> {
    let n = get_number(record, key)?;
    n.parse()
        .map_err(|e| BackendError::InvalidData(format!("Invalid number {}: {}", key, e)))
}

/// Get a required binary attribute.
pub fn get_bytes(record: &Record, key: &str) -> Result<Vec<u8>, BackendError> {
    record
        .get(key)
        .and_then(AttributeValue::as_b)
        .map(<[u8]>::to_vec)
        .ok_or_else(|| BackendError::InvalidData(format!("Missing or invalid field: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_string_missing_field() {
        let record = Record::new();
        assert_eq!(
            get_string(&record, "missing"),
            Err(BackendError::InvalidData(
                "Missing or invalid field: missing".to_string()
            ))
        );
    }

    #[test]
    fn test_get_string_wrong_type() {
        let record = Record::from([("name".to_string(), number_value(3))]);
        assert!(get_string(&record, "name").is_err());
    }

    #[test]
    fn test_get_uuid_rejects_garbage() {
        let record = Record::from([(
            "id".to_string(),
            AttributeValue::S("not-a-uuid".to_string()),
        )]);
        assert!(matches!(
            get_uuid(&record, "id"),
            Err(BackendError::InvalidData(_))
        ));
    }

    #[test]
    fn test_numbers_parse_from_decimal_text() {
        let record = Record::from([
            ("stock".to_string(), number_value(3)),
            ("price".to_string(), number_value(9.99)),
        ]);

        assert_eq!(get_i64(&record, "stock").unwrap(), 3);
        assert_eq!(get_f64(&record, "price").unwrap(), 9.99);
        assert!(get_i64(&record, "price").is_err());
    }

    #[test]
    fn test_get_bytes() {
        let record = Record::from([("blob".to_string(), AttributeValue::B(vec![0xde, 0xad]))]);
        assert_eq!(get_bytes(&record, "blob").unwrap(), vec![0xde, 0xad]);
        assert!(get_bytes(&record, "other").is_err());
    }
}
