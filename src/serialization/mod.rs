//! Request/response body serialization.
//!
//! The executor works on `serde_json::Value` so it can stay object-safe; the
//! typed layer generated by `rest_service!` converts to and from the concrete
//! request and response types.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

use crate::routing::descriptor::ResponseType;

/// Errors raised while encoding or decoding bodies.
#[derive(Debug, Error)]
pub enum SerializationError {
    #[error("Failed to serialize request: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("Failed to deserialize response into {type_name}: {source}")]
    Deserialize {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Empty response body cannot be deserialized into {0}")]
    EmptyBody(&'static str),
}

/// Body codec capability used by the executor.
pub trait Serializer: Send + Sync {
    /// Encode a request value as body text.
    fn serialize(&self, value: &Value) -> Result<String, SerializationError>;

    /// Decode body text according to the declared response type.
    fn deserialize(
        &self,
        response_type: &ResponseType,
        body: &str,
    ) -> Result<Value, SerializationError>;
}

/// JSON codec backed by `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonSerializer;

impl Serializer for JsonSerializer {
    fn serialize(&self, value: &Value) -> Result<String, SerializationError> {
        serde_json::to_string(value).map_err(SerializationError::Serialize)
    }

    fn deserialize(
        &self,
        response_type: &ResponseType,
        body: &str,
    ) -> Result<Value, SerializationError> {
        let type_name = response_type.type_name();
        if body.trim().is_empty() {
            return Err(SerializationError::EmptyBody(type_name));
        }
        serde_json::from_str(body)
            .map_err(|source| SerializationError::Deserialize { type_name, source })
    }
}

/// Convert a typed request into the value form the executor works on.
pub fn to_value<T: Serialize + ?Sized>(request: &T) -> Result<Value, SerializationError> {
    serde_json::to_value(request).map_err(SerializationError::Serialize)
}

/// Convert an executor result into the method's declared return type.
///
/// `None` (no value) becomes JSON `null`, which is what `()` decodes from.
pub fn from_value<T: DeserializeOwned>(value: Option<Value>) -> Result<T, SerializationError> {
    serde_json::from_value(value.unwrap_or(Value::Null)).map_err(|source| {
        SerializationError::Deserialize {
            type_name: std::any::type_name::<T>(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use serde_json::json;

    #[derive(Debug, Serialize, Deserialize, PartialEq)]
    struct Order {
        id: String,
        quantity: u32,
    }

    #[test]
    fn test_serialize_value() {
        let body = JsonSerializer.serialize(&json!({ "id": "1" })).unwrap();
        assert_eq!(body, r#"{"id":"1"}"#);
    }

    #[test]
    fn test_deserialize_into_value() {
        let value = JsonSerializer
            .deserialize(&ResponseType::Json("Order"), r#"{"id":"1","quantity":3}"#)
            .unwrap();
        assert_eq!(value, json!({ "id": "1", "quantity": 3 }));
    }

    #[test]
    fn test_deserialize_empty_body() {
        let err = JsonSerializer
            .deserialize(&ResponseType::Json("Order"), "  ")
            .unwrap_err();
        assert!(matches!(err, SerializationError::EmptyBody("Order")));
    }

    #[test]
    fn test_deserialize_malformed_body() {
        let err = JsonSerializer
            .deserialize(&ResponseType::Json("Order"), "{not json")
            .unwrap_err();
        assert!(err.to_string().contains("Order"));
    }

    #[test]
    fn test_typed_conversions() {
        let order = Order {
            id: "9".into(),
            quantity: 2,
        };
        let value = to_value(&order).unwrap();
        let back: Order = from_value(Some(value)).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn test_unit_from_no_value() {
        let _: () = from_value(None).unwrap();
        assert!(from_value::<Order>(None).is_err());
    }
}
