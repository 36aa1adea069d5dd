//! Body consumers: the decode capability injected into the dispatcher.
//!
//! A [`Consumer`] turns raw body bytes into a target type. It must report a
//! body without any content as [`ConsumeError::EndOfInput`], distinct from
//! a body that is present but cannot be decoded. For JSON, a blank body and
//! a bare `null` both count as no content.

use derive_more::{Display, Error};
use serde::de::{DeserializeOwned, IntoDeserializer};

/// Content type of a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentType {
    /// JSON content type (`application/json`).
    Json,
    /// Plain text content type (`text/plain`).
    PlainText,
}

impl ContentType {
    /// Get the MIME type string.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::PlainText => "text/plain",
        }
    }

    /// Parse a media type, ignoring parameters such as `charset`.
    ///
    /// Structured syntax suffixes (`application/problem+json`) map to JSON.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let media = mime.split(';').next().unwrap_or_default().trim();
        let media = media.to_ascii_lowercase();
        match media.as_str() {
            "application/json" | "text/json" => Some(Self::Json),
            "text/plain" => Some(Self::PlainText),
            other if other.starts_with("application/") && other.ends_with("+json") => {
                Some(Self::Json)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure reported by a [`Consumer`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConsumeError {
    /// The body ended before any content was read.
    #[display("end of input")]
    EndOfInput,

    /// The body has content that does not fit the target type.
    #[display("malformed content at '{location}': {message}")]
    Malformed {
        /// Path to the offending value (e.g. `details[0].type_url`), empty at the document root.
        location: String,
        /// Decoder message.
        message: String,
    },
}

impl ConsumeError {
    /// Create a malformed-content error.
    #[must_use]
    pub fn malformed(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Returns `true` if the body had no content at all.
    #[must_use]
    pub const fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// Capability to deserialize a response body into a target type.
///
/// # Example
///
/// ```
/// use verdict_core::{ConsumeError, Consumer, JsonConsumer};
///
/// let value: serde_json::Value = JsonConsumer.consume(br#"{"detail":"forbidden"}"#)?;
/// assert_eq!(value["detail"], "forbidden");
///
/// let empty = JsonConsumer.consume::<serde_json::Value>(b"");
/// assert_eq!(empty, Err(ConsumeError::EndOfInput));
/// # Ok::<(), ConsumeError>(())
/// ```
pub trait Consumer {
    /// Decode `body` into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ConsumeError::EndOfInput`] when the body holds no content,
    /// and [`ConsumeError::Malformed`] for any other decode failure.
    fn consume<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ConsumeError>;
}

impl<C: Consumer> Consumer for &C {
    fn consume<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ConsumeError> {
        (**self).consume(body)
    }
}

/// JSON consumer with path-aware error messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonConsumer;

impl Consumer for JsonConsumer {
    fn consume<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ConsumeError> {
        let content = body.trim_ascii();
        if content.is_empty() || content == b"null" {
            return Err(ConsumeError::EndOfInput);
        }
        let mut deserializer = serde_json::Deserializer::from_slice(content);
        let value: T = serde_path_to_error::deserialize(&mut deserializer).map_err(|err| {
            let location = match err.path().to_string() {
                root if root == "." => String::new(),
                path => path,
            };
            ConsumeError::malformed(location, err.inner().to_string())
        })?;
        deserializer
            .end()
            .map_err(|err| ConsumeError::malformed("", err.to_string()))?;
        Ok(value)
    }
}

/// Plain text consumer.
///
/// The UTF-8 body is handed to the target type as a single string value, so
/// it decodes into `String` or an opaque `serde_json::Value::String`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextConsumer;

impl Consumer for TextConsumer {
    fn consume<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ConsumeError> {
        if body.is_empty() {
            return Err(ConsumeError::EndOfInput);
        }
        let text = std::str::from_utf8(body)
            .map_err(|err| ConsumeError::malformed("", err.to_string()))?;
        let deserializer: serde::de::value::StrDeserializer<'_, serde::de::value::Error> =
            text.into_deserializer();
        T::deserialize(deserializer).map_err(|err| ConsumeError::malformed("", err.to_string()))
    }
}

/// Built-in consumer selected from a [`ContentType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentConsumer {
    /// Decode with [`JsonConsumer`].
    Json,
    /// Decode with [`TextConsumer`].
    Text,
}

impl ContentConsumer {
    /// Consumer for a content type.
    #[must_use]
    pub const fn for_content_type(content_type: ContentType) -> Self {
        match content_type {
            ContentType::Json => Self::Json,
            ContentType::PlainText => Self::Text,
        }
    }
}

impl Consumer for ContentConsumer {
    fn consume<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, ConsumeError> {
        match self {
            Self::Json => JsonConsumer.consume(body),
            Self::Text => TextConsumer.consume(body),
        }
    }
}
