//! Shared traits used across all domain modules.
//!
//! Domain records serialize/deserialize exactly as the API sends them, so they
//! are used directly as wire types without a separate conversion layer.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SdkError;

// ─── ApiObject ───────────────────────────────────────────────────────────────

/// A record returned by the API.
///
/// `from_raw` parses the wire JSON (camelCase aliases, ISO-8601 timestamps,
/// enum tokens, nested records). `raw` gives the wire JSON back; optional
/// fields that are absent stay absent.
pub trait ApiObject: Serialize + DeserializeOwned {
    /// Record name used in validation errors.
    const NAME: &'static str;

    fn from_raw(value: Value) -> Result<Self, SdkError> {
        serde_json::from_value(value)
            .map_err(|e| SdkError::Validation(format!("{}: {}", Self::NAME, e)))
    }

    fn raw(&self) -> Result<Map<String, Value>, SdkError> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(SdkError::Validation(format!(
                "{}: expected a JSON object, got {}",
                Self::NAME,
                other
            ))),
        }
    }
}

/// Parse a JSON array element-wise into records.
pub fn from_raw_list<T: ApiObject>(value: Value) -> Result<Vec<T>, SdkError> {
    match value {
        Value::Array(items) => items.into_iter().map(T::from_raw).collect(),
        other => Err(SdkError::Validation(format!(
            "{}: expected a JSON array, got {}",
            T::NAME,
            type_name(&other)
        ))),
    }
}

pub(crate) fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
