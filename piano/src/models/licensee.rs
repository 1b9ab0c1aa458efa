use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Representative {
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Licensee {
    pub licensee_id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub representatives: Vec<Representative>,
    #[serde(default)]
    pub manager_uids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseeResult {
    pub licensee: Licensee,
}

impl ApiResult for LicenseeResult {
    type Entity = Licensee;
    const PATH: &'static str = "/publisher/licensing/licensee/get";

    fn into_entity(self) -> Licensee {
        self.licensee
    }
}
