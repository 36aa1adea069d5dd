//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict_core::prelude::*;
//! ```

pub use crate::{
    Classification, ConsumeError, Consumer, Error, JsonConsumer, Method, Outcome, Payload,
    PayloadShape, Response, ResponseTable, Result, RuntimeError, StatusOutcome, dispatch,
    response_table,
};
