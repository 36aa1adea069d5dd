//! Core types and the status-code dispatch engine for verdict.
//!
//! This crate turns a raw HTTP response into a typed outcome:
//! - [`ResponseTable`] and [`response_table!`] - Declared status codes of an endpoint
//! - [`dispatch`] - Route a [`Response`] to its variant and decode the payload
//! - [`Outcome`] and [`StatusOutcome`] - Success or server-reported failure
//! - [`Payload`] - Empty, opaque, or structured [`RuntimeError`] body
//! - [`Consumer`] - Injected body decoder ([`JsonConsumer`], [`TextConsumer`])
//! - [`Error`] and [`Result`] - Fatal dispatch errors
//! - [`Endpoint`], [`Method`], [`PathTemplate`] - Diagnostic metadata

mod consumer;
mod dispatch;
mod endpoint;
mod error;
mod model;
mod outcome;
mod payload;
pub mod prelude;
mod response;
mod table;

pub use consumer::{ConsumeError, Consumer, ContentConsumer, ContentType, JsonConsumer, TextConsumer};
pub use dispatch::dispatch;
pub use endpoint::{Endpoint, Method, PathTemplate};
pub use error::{Error, Result};
pub use model::{ProtobufAny, RuntimeError};
pub use outcome::{Outcome, StatusOutcome};
pub use payload::Payload;
pub use response::Response;
pub use table::{Classification, PayloadShape, ResponseTable, StatusEntry};
