//! Response body shapes accepted from the collection backend
//!
//! The backend answers either with an envelope `{ "success": bool, "data": ... }`
//! or with the bare payload. The shape is decided once here so callers only
//! deal with `Option<Value>`.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "Value")]
pub enum ApiPayload {
    /// Object carrying a boolean `success` flag
    Envelope { success: bool, data: Option<Value> },
    /// Anything else, passed through unchanged
    Bare(Value),
}

impl ApiPayload {
    /// Unwrap the payload. Failed envelopes and `null` both yield `None`.
    pub fn into_data(self) -> Option<Value> {
        let value = match self {
            ApiPayload::Envelope { success: true, data } => data?,
            ApiPayload::Envelope { success: false, .. } => return None,
            ApiPayload::Bare(value) => value,
        };
        match value {
            Value::Null => None,
            other => Some(other),
        }
    }
}

impl From<Value> for ApiPayload {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(mut map) => match map.get("success").cloned() {
                Some(Value::Bool(success)) => ApiPayload::Envelope {
                    success,
                    data: map.remove("data"),
                },
                _ => ApiPayload::Bare(Value::Object(map)),
            },
            other => ApiPayload::Bare(other),
        }
    }
}
