//! Error types for verdict.

use derive_more::{Display, Error};

use crate::{ConsumeError, Endpoint, Method, PathTemplate};

/// Fatal dispatch error.
///
/// Server-reported error statuses are not errors of this kind: they are
/// returned as [`Outcome::Failure`](crate::Outcome::Failure) values.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// The body could not be decoded into the shape declared for its status.
    #[display("[{method} {path}][{status}] {variant}: cannot decode payload at '{location}': {message}")]
    Decode {
        /// Endpoint method.
        method: Method,
        /// Endpoint path template.
        path: PathTemplate,
        /// Response status code.
        status: u16,
        /// Variant the status was routed to.
        variant: String,
        /// Path to the offending value, empty at the document root.
        location: String,
        /// Decoder message.
        message: String,
    },

    /// No consumer handles the response content type.
    #[display("no consumer for content type '{_0}'")]
    NoConsumer(#[error(not(source))] String),
}

/// Result type alias using [`crate::Error`].
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a decode error from a consumer failure.
    #[must_use]
    pub(crate) fn decode(
        endpoint: &Endpoint,
        status: u16,
        variant: impl Into<String>,
        cause: ConsumeError,
    ) -> Self {
        let (location, message) = match cause {
            ConsumeError::Malformed { location, message } => (location, message),
            ConsumeError::EndOfInput => (String::new(), cause.to_string()),
        };
        Self::Decode {
            method: endpoint.method(),
            path: endpoint.path(),
            status,
            variant: variant.into(),
            location,
            message,
        }
    }

    /// Create a missing-consumer error.
    #[must_use]
    pub fn no_consumer(content_type: impl Into<String>) -> Self {
        Self::NoConsumer(content_type.into())
    }

    /// Returns `true` if this is a decode error.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }

    /// Status code of the response that failed to decode.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Decode { status, .. } => Some(*status),
            Self::NoConsumer(_) => None,
        }
    }
}
