use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

/// Resource reference embedded in a term
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermResource {
    pub rid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Term {
    pub term_id: String,
    pub aid: String,
    pub name: String,
    /// e.g. `payment`, `registration`, `custom`, `adview`
    #[serde(rename = "type")]
    pub term_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resource: Option<TermResource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_billing_plan: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_billing_plan_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_currency: Option<String>,
    #[serde(default)]
    pub verify_on_renewal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct TermResult {
    pub term: Term,
}

impl ApiResult for TermResult {
    type Entity = Term;
    const PATH: &'static str = "/publisher/term/get";

    fn into_entity(self) -> Term {
        self.term
    }
}
