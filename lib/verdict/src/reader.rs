//! Response reader: content negotiation, dispatch, and logging.

use bytes::Bytes;
use tracing::{Level, debug, span, warn};
use verdict_core::{
    ContentConsumer, ContentType, Error, Outcome, Response, ResponseTable, Result, StatusOutcome,
    dispatch,
};

use crate::{ReadError, ReadResult, ReaderConfig};

/// Reads responses of one endpoint.
///
/// The reader picks a consumer from the response `Content-Type`, dispatches
/// through the endpoint's [`ResponseTable`] and logs the routing decision.
///
/// # Example
///
/// ```ignore
/// use verdict::{ResponseReader, catalog};
///
/// let reader = ResponseReader::new(&catalog::DELETE_QUEUE);
/// match reader.read(&response) {
///     Ok(deleted) => println!("{deleted}"),
///     Err(err) if err.is_not_found() => println!("already gone"),
///     Err(err) => return Err(err.into()),
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ResponseReader<'t> {
    table: &'t ResponseTable,
    config: ReaderConfig,
}

impl<'t> ResponseReader<'t> {
    /// Create a reader with the default configuration.
    #[must_use]
    pub fn new(table: &'t ResponseTable) -> Self {
        Self::with_config(table, ReaderConfig::default())
    }

    /// Create a reader with an explicit configuration.
    #[must_use]
    pub const fn with_config(table: &'t ResponseTable, config: ReaderConfig) -> Self {
        Self { table, config }
    }

    /// Table this reader dispatches with.
    #[must_use]
    pub const fn table(&self) -> &'t ResponseTable {
        self.table
    }

    /// Reader configuration.
    #[must_use]
    pub const fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Consumer for a response, chosen from its content type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoConsumer`] for an unsupported content type, unless
    /// the configuration falls back to the default consumer.
    pub fn consumer_for(&self, response: &Response<Bytes>) -> Result<ContentConsumer> {
        let content_type = match response.content_type() {
            None => self.config.default_content_type,
            Some(mime) => match ContentType::from_mime(mime) {
                Some(content_type) => content_type,
                None if self.config.fallback_to_default_consumer => {
                    debug!(
                        content_type = mime,
                        fallback = %self.config.default_content_type,
                        "unsupported content type, using default consumer"
                    );
                    self.config.default_content_type
                }
                None => return Err(Error::no_consumer(mime)),
            },
        };
        Ok(ContentConsumer::for_content_type(content_type))
    }

    /// Dispatch a response, keeping both classifications as values.
    ///
    /// # Errors
    ///
    /// Returns an error if no consumer handles the body or decoding fails.
    pub fn dispatch(&self, response: &Response<Bytes>) -> Result<Outcome> {
        let endpoint = self.table.endpoint();
        let status = response.status();
        let span = span!(
            Level::DEBUG,
            "read_response",
            operation = endpoint.operation(),
            method = %endpoint.method(),
            path = %endpoint.path(),
            status
        );
        let _guard = span.enter();

        let result = self
            .consumer_for(response)
            .and_then(|consumer| dispatch(self.table, response, &consumer));

        match &result {
            Ok(outcome) => {
                let dispatched = outcome.outcome();
                let success = outcome.is_success();
                if dispatched.is_default() {
                    warn!(status, success, "status not declared, using default variant");
                } else {
                    debug!(status, success, variant = %dispatched.name(), "response dispatched");
                }
            }
            Err(err) => {
                warn!(error = %err, "failed to read response");
            }
        }

        result
    }

    /// Read a response into its success outcome.
    ///
    /// # Errors
    ///
    /// Returns [`ReadError::Status`] for a failure status, with the decoded
    /// payload, and [`ReadError::Dispatch`] if the response cannot be read.
    pub fn read(&self, response: &Response<Bytes>) -> ReadResult<StatusOutcome> {
        self.dispatch(response)?
            .into_result()
            .map_err(ReadError::Status)
    }
}
