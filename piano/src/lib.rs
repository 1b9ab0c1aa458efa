//! Response handling for the Piano publisher API.
//!
//! Every API call answers with an envelope `{code, message, validation_errors, ...}`.
//! [`api::decode`] turns a response body into an [`api::Envelope`] or an
//! [`api::ApiError`], [`diagnostics::report`] turns failures into operator
//! diagnostics, and [`models`] holds the typed result for each entity.

pub mod api;
pub mod diagnostics;
pub mod models;

pub use api::{ApiError, Client, ClientConfig, DecodeMode, Envelope, ErrorKind};
pub use diagnostics::{report, Diagnostic, Diagnostics};
