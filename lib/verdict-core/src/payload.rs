//! Decoded response payloads.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::RuntimeError;

/// Body of a dispatched response, shaped by its variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Payload {
    /// No payload: the variant declares none, or the body was empty.
    #[default]
    Empty,
    /// Untyped value, forwarded as decoded.
    Opaque(Value),
    /// The server error record of a default variant or structured entry.
    Structured(RuntimeError),
}

impl Payload {
    /// Returns `true` for [`Payload::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// The opaque value, if any.
    #[must_use]
    pub const fn as_opaque(&self) -> Option<&Value> {
        match self {
            Self::Opaque(value) => Some(value),
            _ => None,
        }
    }

    /// The error record, if any.
    #[must_use]
    pub const fn as_structured(&self) -> Option<&RuntimeError> {
        match self {
            Self::Structured(record) => Some(record),
            _ => None,
        }
    }

    /// Consume into the error record, if any.
    #[must_use]
    pub fn into_structured(self) -> Option<RuntimeError> {
        match self {
            Self::Structured(record) => Some(record),
            _ => None,
        }
    }

    /// Re-read the payload as a typed value.
    ///
    /// Returns `Ok(None)` for an empty payload.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload does not fit `T`.
    pub fn decode<T: DeserializeOwned>(&self) -> serde_json::Result<Option<T>> {
        match self {
            Self::Empty => Ok(None),
            Self::Opaque(value) => T::deserialize(value).map(Some),
            Self::Structured(record) => {
                let value = serde_json::to_value(record)?;
                T::deserialize(value).map(Some)
            }
        }
    }
}

impl std::fmt::Display for Payload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Opaque(value) => write!(f, "{value}"),
            Self::Structured(record) => write!(f, "{record}"),
        }
    }
}
