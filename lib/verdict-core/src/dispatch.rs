//! Status-code dispatch.

use bytes::Bytes;

use crate::{
    Classification, ConsumeError, Consumer, Error, Outcome, Payload, PayloadShape, Response,
    ResponseTable, Result, RuntimeError, StatusOutcome,
};

/// Route a response to its table variant and decode its payload.
///
/// - A declared code uses its entry's shape and fixed classification. An
///   [`PayloadShape::Empty`] entry never reads the body.
/// - Any other code lands in the default variant: the body is decoded into a
///   [`RuntimeError`] and the classification follows the code family, so an
///   undeclared 2xx is still a success.
/// - A body without content decodes to the zero value: [`Payload::Empty`]
///   for opaque entries, an empty record for structured ones.
/// - A `204 No Content` response has no body, whatever the transport kept.
///
/// # Errors
///
/// Returns [`Error::Decode`] if the consumer rejects a body that has content.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
///
/// use verdict_core::{JsonConsumer, Response, dispatch, response_table};
///
/// const GET_AGENT: verdict_core::ResponseTable = response_table! {
///     GET "/api/v1/orgs/{owner}/agents/{uuid}" => GetAgent;
///     200 getAgentOK: opaque, success;
///     404 getAgentNotFound: opaque, failure;
/// };
///
/// let response = Response::new(503, HashMap::new(), br#"{"message":"draining"}"#.to_vec().into());
/// let outcome = dispatch(&GET_AGENT, &response, &JsonConsumer)?;
///
/// assert!(!outcome.is_success());
/// let failure = outcome.into_inner();
/// assert!(failure.is_default());
/// assert_eq!(failure.runtime_error().and_then(|record| record.message()), Some("draining"));
/// # Ok::<(), verdict_core::Error>(())
/// ```
pub fn dispatch<C>(table: &ResponseTable, response: &Response<Bytes>, consumer: &C) -> Result<Outcome>
where
    C: Consumer,
{
    let endpoint = *table.endpoint();
    let code = response.status();
    let body: &[u8] = if code == NO_CONTENT { &[] } else { response.body() };

    if let Some(entry) = table.entry(code) {
        let payload = match entry.shape {
            PayloadShape::Empty => Payload::Empty,
            PayloadShape::Opaque => match consumer.consume(body) {
                Ok(value) => Payload::Opaque(value),
                Err(ConsumeError::EndOfInput) => Payload::Empty,
                Err(err) => return Err(Error::decode(&endpoint, code, entry.name, err)),
            },
            PayloadShape::Structured => consume_record(consumer, body)
                .map(Payload::Structured)
                .map_err(|err| Error::decode(&endpoint, code, entry.name, err))?,
        };
        let outcome = StatusOutcome::declared(endpoint, code, entry.name, payload);
        return Ok(Outcome::classify(entry.classification, outcome));
    }

    let record = consume_record(consumer, body).map_err(|err| {
        let variant = format!("{} default", endpoint.operation());
        Error::decode(&endpoint, code, variant, err)
    })?;
    let outcome = StatusOutcome::fallback(endpoint, code, Payload::Structured(record));
    Ok(Outcome::classify(Classification::from_status(code), outcome))
}

const NO_CONTENT: u16 = 204;

/// Decode an error record, the zero record when the body has no content.
fn consume_record<C: Consumer>(consumer: &C, body: &[u8]) -> std::result::Result<RuntimeError, ConsumeError> {
    match consumer.consume::<RuntimeError>(body) {
        Ok(record) => Ok(record),
        Err(ConsumeError::EndOfInput) => Ok(RuntimeError::default()),
        Err(err) => Err(err),
    }
}
