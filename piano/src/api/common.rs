//! Common types and utilities for the Piano API

use serde::de::DeserializeOwned;

/// A typed view of a successful response body.
///
/// Each entity has a result struct holding the entity under its payload key
/// (`{"code":0,"contract":{...}}` for contracts, and so on).
pub trait ApiResult: DeserializeOwned {
    type Entity;

    /// Read endpoint, relative to the API base URL
    const PATH: &'static str;

    fn into_entity(self) -> Self::Entity;
}

#[derive(Debug, Clone, Default)]
pub struct ApiQueryParams {
    params: Vec<(String, String)>,
}

impl ApiQueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add<K: Into<String>, V: ToString>(mut self, key: K, value: V) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    pub fn add_optional<K: Into<String>, V: ToString>(mut self, key: K, value: Option<V>) -> Self {
        if let Some(v) = value {
            self.params.push((key.into(), v.to_string()));
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }
}

#[derive(Debug, Clone, Default)]
pub struct PaginationParams {
    pub offset: Option<u32>,
    pub limit: Option<u32>,
}

impl PaginationParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn apply(&self, params: ApiQueryParams) -> ApiQueryParams {
        params
            .add_optional("offset", self.offset)
            .add_optional("limit", self.limit)
    }
}
