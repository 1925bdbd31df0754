//! GraphQL response envelope

use crate::errors::{Error, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Raw `{data?, errors?}` envelope returned by the GraphQL endpoint.
///
/// The client does not translate GraphQL-level errors into transport
/// errors; callers inspect `errors` themselves.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    #[serde(default)]
    pub data: Option<serde_json::Value>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

/// One GraphQL error entry
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

impl Envelope {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// All error messages, joined for display
    pub fn error_messages(&self) -> String {
        self.errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Deserialize the `data` field into a typed payload.
    /// A missing `data` field is an invalid response.
    pub fn data_as<T: DeserializeOwned>(&self) -> Result<T> {
        let data = self
            .data
            .as_ref()
            .ok_or_else(|| Error::InvalidResponse("envelope has no data field".to_string()))?;
        let payload = T::deserialize(data)?;
        Ok(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Payload {
        value: u32,
    }

    #[test]
    fn test_data_payload_roundtrip() {
        let envelope: Envelope = serde_json::from_str(r#"{"data":{"value":7}}"#).unwrap();
        assert!(!envelope.has_errors());
        let payload: Payload = envelope.data_as().unwrap();
        assert_eq!(payload.value, 7);
    }

    #[test]
    fn test_missing_data_is_invalid_response() {
        let envelope: Envelope =
            serde_json::from_str(r#"{"errors":[{"message":"NOT_ENOUGH_MONEY"}]}"#).unwrap();
        assert!(envelope.has_errors());
        assert_eq!(envelope.error_messages(), "NOT_ENOUGH_MONEY");
        let result: Result<Payload> = envelope.data_as();
        assert!(matches!(result, Err(Error::InvalidResponse(_))));
    }
}
