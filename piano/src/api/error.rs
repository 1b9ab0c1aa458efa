use thiserror::Error;

use super::envelope::ValidationErrors;
use crate::diagnostics::Diagnostic;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to read response body: {0}")]
    Io(#[from] std::io::Error),

    /// Stored without its URL, which carries the API token
    #[error("HTTP request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("API returned error code {code}: {message}")]
    Api {
        code: i64,
        message: String,
        validation: Option<ValidationErrors>,
        /// Raw response body, only kept when decoding in strict mode
        body: Option<String>,
    },

    #[error("Endpoint is not a known Piano API region: {0}")]
    InvalidEndpoint(String),

    #[error("{0} is required")]
    MissingConfig(&'static str),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Request(e.without_url())
    }
}

/// Coarse classification of an [`ApiError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Transport,
    Decode,
    Api,
    Config,
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Io(_) | ApiError::Request(_) => ErrorKind::Transport,
            ApiError::Decode(_) => ErrorKind::Decode,
            ApiError::Api { .. } => ErrorKind::Api,
            ApiError::InvalidEndpoint(_) | ApiError::MissingConfig(_) => ErrorKind::Config,
        }
    }

    /// The API error code, if the failure came from the envelope
    pub fn code(&self) -> Option<i64> {
        match self {
            ApiError::Api { code, .. } => Some(*code),
            _ => None,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            ApiError::Io(e) => Diagnostic::error("Unable to read API response", e.to_string()),
            ApiError::Request(e) => Diagnostic::error("Unable to reach Piano API", e.to_string()),
            ApiError::Decode(e) => Diagnostic::error("Unable to decode API response", e.to_string()),
            ApiError::Api {
                code,
                message,
                validation,
                body,
            } => {
                let mut detail = format!("code: {}, message: {}", code, message);
                if let Some(validation) = validation.as_ref().and_then(|v| v.message.as_deref()) {
                    detail.push_str(&format!(", validation: {}", validation));
                }
                if let Some(body) = body {
                    detail.push_str(&format!(", body: {}", body));
                }
                Diagnostic::error(format!("Piano API returned error code {}", code), detail)
            }
            ApiError::InvalidEndpoint(_) | ApiError::MissingConfig(_) => {
                Diagnostic::error("Invalid provider configuration", self.to_string())
            }
        }
    }
}
