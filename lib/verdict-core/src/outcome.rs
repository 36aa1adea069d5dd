//! Dispatched responses.

use crate::{Classification, Endpoint, Payload, RuntimeError};

/// A response routed to one variant of its endpoint's table.
///
/// It owns its payload and keeps no reference to the transport.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusOutcome {
    endpoint: Endpoint,
    code: u16,
    variant: Variant,
    payload: Payload,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Variant {
    Declared(&'static str),
    Default,
}

impl StatusOutcome {
    pub(crate) fn declared(
        endpoint: Endpoint,
        code: u16,
        name: &'static str,
        payload: Payload,
    ) -> Self {
        Self {
            endpoint,
            code,
            variant: Variant::Declared(name),
            payload,
        }
    }

    pub(crate) fn fallback(endpoint: Endpoint, code: u16, payload: Payload) -> Self {
        Self {
            endpoint,
            code,
            variant: Variant::Default,
            payload,
        }
    }

    /// HTTP status code.
    #[must_use]
    pub const fn code(&self) -> u16 {
        self.code
    }

    /// Endpoint the response was read for.
    #[must_use]
    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Variant name: the declared name, or `"<operation> default"`.
    #[must_use]
    pub fn name(&self) -> String {
        match self.variant {
            Variant::Declared(name) => name.to_string(),
            Variant::Default => format!("{} default", self.endpoint.operation()),
        }
    }

    /// Returns `true` if the status was not declared by the endpoint.
    #[must_use]
    pub const fn is_default(&self) -> bool {
        matches!(self.variant, Variant::Default)
    }

    /// Decoded payload.
    #[must_use]
    pub const fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Consume into the payload.
    #[must_use]
    pub fn into_payload(self) -> Payload {
        self.payload
    }

    /// Server error record, for default variants and structured entries.
    #[must_use]
    pub const fn runtime_error(&self) -> Option<&RuntimeError> {
        self.payload.as_structured()
    }

    /// Diagnostic description: `[METHOD path][code] name payload`.
    #[must_use]
    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}][{}] {}", self.endpoint, self.code, self.name())?;
        if !self.payload.is_empty() {
            write!(f, " {}", self.payload)?;
        }
        Ok(())
    }
}

impl std::error::Error for StatusOutcome {}

/// Result of dispatching a response: a success or a server-reported failure.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The variant is classified as a success.
    Success(StatusOutcome),
    /// The variant is classified as a failure.
    Failure(StatusOutcome),
}

impl Outcome {
    pub(crate) fn classify(classification: Classification, outcome: StatusOutcome) -> Self {
        match classification {
            Classification::Success => Self::Success(outcome),
            Classification::Failure => Self::Failure(outcome),
        }
    }

    /// Returns `true` for [`Outcome::Success`].
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The dispatched response, whatever its classification.
    #[must_use]
    pub const fn outcome(&self) -> &StatusOutcome {
        match self {
            Self::Success(outcome) | Self::Failure(outcome) => outcome,
        }
    }

    /// Consume into the dispatched response.
    #[must_use]
    pub fn into_inner(self) -> StatusOutcome {
        match self {
            Self::Success(outcome) | Self::Failure(outcome) => outcome,
        }
    }

    /// Convert into a `Result`, failures on the error side.
    pub fn into_result(self) -> std::result::Result<StatusOutcome, StatusOutcome> {
        match self {
            Self::Success(outcome) => Ok(outcome),
            Self::Failure(outcome) => Err(outcome),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::Method;

    const ENDPOINT: Endpoint = Endpoint::new(
        Method::Delete,
        "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}",
        "DeleteQueue",
    );

    #[test]
    fn declared_description() {
        let outcome = StatusOutcome::declared(ENDPOINT, 200, "deleteQueueOK", Payload::Empty);
        assert_eq!(
            outcome.description(),
            "[DELETE /api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}][200] deleteQueueOK"
        );
        assert!(!outcome.is_default());
        assert!(outcome.runtime_error().is_none());

        let outcome = StatusOutcome::declared(
            ENDPOINT,
            403,
            "deleteQueueForbidden",
            Payload::Opaque(json!({"detail": "forbidden"})),
        );
        assert_eq!(
            outcome.to_string(),
            r#"[DELETE /api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}][403] deleteQueueForbidden {"detail":"forbidden"}"#
        );
    }

    #[test]
    fn default_description() {
        let outcome = StatusOutcome::fallback(
            ENDPOINT,
            500,
            Payload::Structured(RuntimeError::with_message("boom")),
        );
        assert_eq!(outcome.name(), "DeleteQueue default");
        assert!(outcome.is_default());
        assert_eq!(
            outcome.runtime_error().and_then(RuntimeError::message),
            Some("boom")
        );
        assert_eq!(
            outcome.to_string(),
            r#"[DELETE /api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}][500] DeleteQueue default {"message":"boom"}"#
        );
    }

    #[test]
    fn outcome_into_result() {
        let ok = StatusOutcome::declared(ENDPOINT, 204, "deleteQueueNoContent", Payload::Empty);
        let outcome = Outcome::classify(Classification::Success, ok.clone());
        assert!(outcome.is_success());
        assert_eq!(outcome.outcome(), &ok);
        assert_eq!(outcome.into_result(), Ok(ok));

        let nf = StatusOutcome::declared(ENDPOINT, 404, "deleteQueueNotFound", Payload::Empty);
        let outcome = Outcome::classify(Classification::Failure, nf.clone());
        assert!(!outcome.is_success());
        assert_eq!(outcome.clone().into_inner(), nf);
        assert_eq!(outcome.into_result(), Err(nf));
    }
}
