//! Prelude module for convenient imports.
//!
//! ```ignore
//! use verdict::prelude::*;
//! ```

pub use crate::{
    Outcome, Payload, ReadError, ReadResult, ReaderConfig, Response, ResponseReader,
    ResponseTable, RuntimeError, StatusOutcome, response_table,
};
