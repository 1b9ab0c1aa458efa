//! Envelope decoding for Piano API responses
//!
//! Every response is wrapped as `{"code": .., "message": .., "validation_errors": .., ...}`.
//! The decoder reads the body once, keeps the raw bytes for typed decoding
//! later, and turns any non-zero `code` into an [`ApiError::Api`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Read;

use super::common::ApiResult;
use super::error::ApiError;

/// How much of a failed response is carried in the error
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// Code and message only
    Permissive,
    /// Code, message and the raw body text
    #[default]
    Strict,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationErrors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Any per-field entries besides `message`
    #[serde(flatten)]
    pub fields: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeHeader {
    code: i64,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    validation_errors: Option<ValidationErrors>,
}

/// A decoded API response
#[derive(Debug, Clone)]
pub struct Envelope {
    pub code: i64,
    pub message: Option<String>,
    pub validation_errors: Option<ValidationErrors>,
    raw_payload: Vec<u8>,
}

impl Envelope {
    /// Parse the envelope fields out of a complete JSON document.
    ///
    /// Unknown fields are ignored; they stay available through
    /// [`Envelope::raw_payload`].
    pub fn parse(raw_payload: Vec<u8>) -> Result<Self, serde_json::Error> {
        let header: EnvelopeHeader = serde_json::from_slice(&raw_payload)?;
        Ok(Self {
            code: header.code,
            message: header.message,
            validation_errors: header.validation_errors,
            raw_payload,
        })
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// The error message, empty when the API sent none
    pub fn message(&self) -> &str {
        self.message.as_deref().unwrap_or_default()
    }

    /// The exact bytes of the response body
    pub fn raw_payload(&self) -> &[u8] {
        &self.raw_payload
    }

    pub fn into_raw_payload(self) -> Vec<u8> {
        self.raw_payload
    }

    /// Re-decode the full document into a typed value
    pub fn unmarshal<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        serde_json::from_slice(&self.raw_payload).map_err(|e| {
            tracing::error!("Failed to unmarshal {}: {}", std::any::type_name::<T>(), e);
            ApiError::Decode(e)
        })
    }

    /// Re-decode into an entity result and unwrap the entity
    pub fn into_entity<R: ApiResult>(&self) -> Result<R::Entity, ApiError> {
        self.unmarshal::<R>().map(ApiResult::into_entity)
    }
}

/// Decode a response body, reporting code and message on API errors.
pub fn decode_any<R: Read>(body: R) -> Result<Envelope, ApiError> {
    decode(body, DecodeMode::Permissive)
}

/// Decode a response body, carrying the raw body text on API errors.
pub fn decode_successful<R: Read>(body: R) -> Result<Envelope, ApiError> {
    decode(body, DecodeMode::Strict)
}

/// Read `body` to the end and decode it as an envelope.
///
/// `body` is consumed and dropped exactly once, whichever way this returns.
/// Only the JSON `code` decides success; transport status is never consulted.
pub fn decode<R: Read>(body: R, mode: DecodeMode) -> Result<Envelope, ApiError> {
    let raw = read_body(body)?;

    let envelope = Envelope::parse(raw).map_err(|e| {
        tracing::error!("Failed to parse response envelope: {}", e);
        ApiError::Decode(e)
    })?;

    if envelope.is_success() {
        return Ok(envelope);
    }

    tracing::error!(
        "Piano API returned error code {}: {}",
        envelope.code,
        envelope.message()
    );

    let body = match mode {
        DecodeMode::Permissive => None,
        DecodeMode::Strict => Some(String::from_utf8_lossy(envelope.raw_payload()).into_owned()),
    };

    Err(ApiError::Api {
        code: envelope.code,
        message: envelope.message.unwrap_or_default(),
        validation: envelope.validation_errors,
        body,
    })
}

/// Decode an HTTP response, consuming it.
pub async fn decode_response(
    response: reqwest::Response,
    mode: DecodeMode,
) -> Result<Envelope, ApiError> {
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    let bytes = response.bytes().await?;
    tracing::debug!("API response body: {}", String::from_utf8_lossy(&bytes));

    decode(&bytes[..], mode)
}

fn read_body<R: Read>(mut body: R) -> Result<Vec<u8>, ApiError> {
    let mut raw = Vec::new();
    let read = body.read_to_end(&mut raw);
    drop(body);
    read?;
    Ok(raw)
}
