//! Publisher application

use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct App {
    pub aid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_lang: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_provider: Option<String>,
}

/// Response from /publisher/app/get
#[derive(Debug, Deserialize)]
pub struct AppResult {
    pub app: App,
}

impl ApiResult for AppResult {
    type Entity = App;
    const PATH: &'static str = "/publisher/app/get";

    fn into_entity(self) -> App {
        self.app
    }
}
