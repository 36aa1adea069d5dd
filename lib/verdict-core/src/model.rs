//! Structured error record returned by the server for undeclared statuses.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server error record, the fixed payload of every default variant.
///
/// Fields the record does not name are kept in [`RuntimeError::extra`], so
/// decoding and re-encoding a record is lossless.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeError {
    /// Numeric error code reported by the server.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,

    /// Short error identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// Human readable message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Typed diagnostic attachments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<ProtobufAny>,

    /// Any other server-supplied field.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl RuntimeError {
    /// Create a record with only a message.
    #[must_use]
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::default()
        }
    }

    /// Message, if the server sent one.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Extra field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Returns `true` for the zero-valued record.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| std::fmt::Error)?;
        f.write_str(&json)
    }
}

/// A protobuf `Any` attached to an error record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProtobufAny {
    /// Type URL identifying the packed message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_url: Option<String>,

    /// Base64-encoded message bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl ProtobufAny {
    /// Decode the base64 value.
    ///
    /// Returns `None` when no value was sent.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not valid base64.
    pub fn decoded_value(&self) -> Option<Result<Vec<u8>, base64::DecodeError>> {
        self.value.as_deref().map(|value| STANDARD.decode(value))
    }
}
