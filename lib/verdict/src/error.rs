//! Caller-facing error type.

use derive_more::{Display, Error, From};
use verdict_core::{RuntimeError, StatusOutcome};

/// Error returned by [`ResponseReader::read`](crate::ResponseReader::read).
///
/// Either the server answered with a failure status, or the response could
/// not be read at all.
#[derive(Debug, Clone, Display, Error, From)]
pub enum ReadError {
    /// The status is classified as a failure. The payload is the detail.
    #[display("{_0}")]
    Status(#[error(not(source))] StatusOutcome),

    /// The response could not be dispatched.
    #[display("{_0}")]
    Dispatch(verdict_core::Error),
}

/// Result type alias using [`ReadError`].
pub type ReadResult<T> = std::result::Result<T, ReadError>;

impl ReadError {
    /// HTTP status code of the response, when known.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Status(outcome) => Some(outcome.code()),
            Self::Dispatch(err) => err.status(),
        }
    }

    /// The failed outcome, if the server reported the failure.
    #[must_use]
    pub const fn outcome(&self) -> Option<&StatusOutcome> {
        match self {
            Self::Status(outcome) => Some(outcome),
            Self::Dispatch(_) => None,
        }
    }

    /// Server error record of an undeclared failure status.
    #[must_use]
    pub fn runtime_error(&self) -> Option<&RuntimeError> {
        self.outcome().and_then(StatusOutcome::runtime_error)
    }

    /// Returns `true` if the body could not be decoded.
    #[must_use]
    pub const fn is_decode(&self) -> bool {
        matches!(self, Self::Dispatch(err) if err.is_decode())
    }

    /// Returns `true` if this is a 404 Not Found failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status(outcome) if outcome.code() == 404)
    }
}
