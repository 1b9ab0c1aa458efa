//! Client configuration

use super::endpoint::{EndpointAllowList, PRODUCTION};
use super::envelope::DecodeMode;
use super::error::ApiError;

pub const ENV_ENDPOINT: &str = "PIANO_ENDPOINT";
pub const ENV_API_TOKEN: &str = "PIANO_API_TOKEN";
pub const ENV_TIMEOUT: &str = "PIANO_TIMEOUT";
pub const ENV_STRICT: &str = "PIANO_STRICT";

#[derive(Clone)]
pub struct ClientConfig {
    pub endpoint: String,
    pub api_token: String,
    pub timeout_seconds: u64,
    pub decode_mode: DecodeMode,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("endpoint", &self.endpoint)
            .field("api_token", &"<redacted>")
            .field("timeout_seconds", &self.timeout_seconds)
            .field("decode_mode", &self.decode_mode)
            .finish()
    }
}

impl ClientConfig {
    pub fn new(endpoint: impl Into<String>, api_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_token: api_token.into(),
            timeout_seconds: 30,
            decode_mode: DecodeMode::Strict,
        }
    }

    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = timeout_seconds;
        self
    }

    pub fn with_decode_mode(mut self, decode_mode: DecodeMode) -> Self {
        self.decode_mode = decode_mode;
        self
    }

    /// Build a configuration from `PIANO_*` environment variables.
    ///
    /// `PIANO_API_TOKEN` is required; the endpoint defaults to production.
    pub fn from_env() -> Result<Self, ApiError> {
        let endpoint = std::env::var(ENV_ENDPOINT).unwrap_or_else(|_| PRODUCTION.to_string());

        let api_token = std::env::var(ENV_API_TOKEN)
            .ok()
            .filter(|token| !token.is_empty())
            .ok_or(ApiError::MissingConfig(ENV_API_TOKEN))?;

        let timeout_seconds = std::env::var(ENV_TIMEOUT)
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);

        let strict = std::env::var(ENV_STRICT)
            .ok()
            .and_then(|v| v.parse::<bool>().ok())
            .unwrap_or(true);

        let decode_mode = if strict {
            DecodeMode::Strict
        } else {
            DecodeMode::Permissive
        };

        Ok(Self {
            endpoint,
            api_token,
            timeout_seconds,
            decode_mode,
        })
    }

    /// Reject endpoints that do not parse or fall outside `allow_list`.
    pub fn validate(&self, allow_list: &EndpointAllowList) -> Result<(), ApiError> {
        if self.api_token.is_empty() {
            return Err(ApiError::MissingConfig("api_token"));
        }

        if url::Url::parse(&self.endpoint).is_err() || !allow_list.is_allowed(&self.endpoint) {
            return Err(ApiError::InvalidEndpoint(self.endpoint.clone()));
        }

        Ok(())
    }
}
