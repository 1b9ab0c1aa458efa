use std::sync::Arc;
use std::time::Duration;

use super::common::{ApiQueryParams, ApiResult};
use super::config::ClientConfig;
use super::endpoint::EndpointAllowList;
use super::envelope::{decode_response, DecodeMode, Envelope};
use super::error::ApiError;

/// Piano API client
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http_client: reqwest::Client,
    base_url: String,
    api_token: String,
    decode_mode: DecodeMode,
}

impl Client {
    /// Create a client without checking the endpoint allow-list
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            inner: Arc::new(ClientInner {
                http_client,
                base_url: config.endpoint.trim_end_matches('/').to_string(),
                api_token: config.api_token,
                decode_mode: config.decode_mode,
            }),
        })
    }

    /// Create a client after validating `config` against `allow_list`
    pub fn with_allow_list(
        config: ClientConfig,
        allow_list: &EndpointAllowList,
    ) -> Result<Self, ApiError> {
        config.validate(allow_list)?;
        Self::new(config)
    }

    /// Create a client from `PIANO_*` environment variables
    pub fn from_env() -> Result<Self, ApiError> {
        Self::with_allow_list(ClientConfig::from_env()?, &EndpointAllowList::default())
    }

    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    pub fn decode_mode(&self) -> DecodeMode {
        self.inner.decode_mode
    }

    /// Execute a GET request, passing `params` in the query string
    pub async fn get(&self, path: &str, params: &ApiQueryParams) -> Result<Envelope, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        tracing::debug!("GET request to: {}", url);

        let response = self
            .inner
            .http_client
            .get(&url)
            .query(params.pairs())
            .query(&[("api_token", &self.inner.api_token)])
            .send()
            .await?;

        decode_response(response, self.inner.decode_mode).await
    }

    /// Execute a POST request, passing `params` as a urlencoded form
    pub async fn post_form(
        &self,
        path: &str,
        params: &ApiQueryParams,
    ) -> Result<Envelope, ApiError> {
        let url = format!("{}{}", self.inner.base_url, path);
        tracing::debug!("POST request to: {}", url);

        let response = self
            .inner
            .http_client
            .post(&url)
            .query(&[("api_token", &self.inner.api_token)])
            .form(params.pairs())
            .send()
            .await?;

        decode_response(response, self.inner.decode_mode).await
    }

    /// Read a single entity through its result type
    pub async fn fetch<R: ApiResult>(&self, params: &ApiQueryParams) -> Result<R::Entity, ApiError> {
        self.get(R::PATH, params).await?.into_entity::<R>()
    }
}
