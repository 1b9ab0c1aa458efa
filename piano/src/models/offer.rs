use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub offer_id: String,
    pub aid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct OfferResult {
    pub offer: Offer,
}

impl ApiResult for OfferResult {
    type Entity = Offer;
    const PATH: &'static str = "/publisher/offer/get";

    fn into_entity(self) -> Offer {
        self.offer
    }
}
