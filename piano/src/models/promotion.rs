//! Promotions and their discount settings

use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    Fixed,
    Percentage,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Promotion {
    pub promotion_id: String,
    pub aid: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed_promotion_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion_code_prefix: Option<String>,
    #[serde(default)]
    pub unlimited_uses: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uses_allowed: Option<i64>,
    #[serde(default)]
    pub uses: i64,
    #[serde(default)]
    pub never_allow_zero: bool,
    #[serde(default)]
    pub new_customers_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_type: Option<DiscountType>,
    /// Only meaningful when `discount_type` is `percentage`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage_discount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_date: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct PromotionResult {
    pub promotion: Promotion,
}

impl ApiResult for PromotionResult {
    type Entity = Promotion;
    const PATH: &'static str = "/publisher/promotion/get";

    fn into_entity(self) -> Promotion {
        self.promotion
    }
}
