//! Access resources (the things terms grant access to)

use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Standard,
    Bundle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub rid: String,
    pub aid: String,
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bundle_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purchase_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub is_fbia_resource: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publish_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ResourceResult {
    pub resource: Resource,
}

impl ApiResult for ResourceResult {
    type Entity = Resource;
    const PATH: &'static str = "/publisher/resource/get";

    fn into_entity(self) -> Resource {
        self.resource
    }
}
