//! Piano publisher API: envelope decoding, errors and a thin HTTP client

pub mod client;
pub mod common;
pub mod config;
pub mod endpoint;
pub mod envelope;
pub mod error;

#[cfg(test)]
mod test_helpers;

pub use client::Client;
pub use common::{ApiQueryParams, ApiResult, PaginationParams};
pub use config::ClientConfig;
pub use endpoint::{is_valid_endpoint, EndpointAllowList};
pub use envelope::{decode, decode_any, decode_response, decode_successful, DecodeMode, Envelope};
pub use error::{ApiError, ErrorKind};
