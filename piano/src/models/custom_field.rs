//! User custom field definitions

use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CustomFieldDataType {
    Text,
    Isodate,
    Boolean,
    SingleSelectList,
    MultiSelectList,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomField {
    pub field_name: String,
    pub title: String,
    pub data_type: CustomFieldDataType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
    #[serde(default)]
    pub editable: bool,
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub required_by_default: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort_order: Option<i64>,
    /// Choices for the select-list data types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct CustomFieldListResult {
    #[serde(default)]
    pub custom_fields: Vec<CustomField>,
}

impl ApiResult for CustomFieldListResult {
    type Entity = Vec<CustomField>;
    const PATH: &'static str = "/publisher/user/custom/field/list";

    fn into_entity(self) -> Vec<CustomField> {
        self.custom_fields
    }
}
