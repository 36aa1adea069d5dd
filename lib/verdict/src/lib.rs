//! Status-code driven response readers for generated REST clients.
//!
//! Each endpoint declares the status codes it knows in a [`ResponseTable`].
//! A [`ResponseReader`] routes a raw [`Response`] to the matching variant,
//! decodes its payload, and hands back either a success or a typed error.
//! Undeclared codes fall into a default variant carrying a [`RuntimeError`].
//!
//! # Example
//!
//! ```ignore
//! use verdict::prelude::*;
//!
//! const GET_QUEUE: ResponseTable = response_table! {
//!     GET "/api/v1/orgs/{owner}/agents/{agent}/queues/{uuid}" => GetQueue;
//!     200 getQueueOK: opaque, success;
//!     403 getQueueForbidden: opaque, failure;
//!     404 getQueueNotFound: opaque, failure;
//! };
//!
//! let queue = ResponseReader::new(&GET_QUEUE).read(&response)?;
//! let queue: Option<Queue> = queue.payload().decode()?;
//! ```

pub mod catalog;
mod config;
mod error;
pub mod prelude;
mod reader;

pub use config::{ReaderConfig, ReaderConfigBuilder};
pub use error::{ReadError, ReadResult};
pub use reader::ResponseReader;

// Re-export core types
pub use verdict_core::{
    Classification, ConsumeError, Consumer, ContentConsumer, ContentType, Endpoint, Error,
    JsonConsumer, Method, Outcome, PathTemplate, Payload, PayloadShape, ProtobufAny, Response,
    ResponseTable, Result, RuntimeError, StatusEntry, StatusOutcome, TextConsumer, dispatch,
    response_table,
};
