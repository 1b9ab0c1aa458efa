//! Licensing contracts

use serde::{Deserialize, Serialize};

use crate::api::ApiResult;

/// How seats under a contract are granted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ContractType {
    SpecificEmailAddressesContract,
    EmailDomainContract,
    IpRangeContract,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contract {
    pub contract_id: String,
    pub licensee_id: String,
    pub contract_type: ContractType,
    pub contract_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub landing_page_url: Option<String>,
    pub seats_number: i64,
    #[serde(default)]
    pub is_hard_seats_limit_type: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<String>,
    /// Unix seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_periods: Option<Vec<ContractPeriod>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractPeriod {
    pub period_id: String,
    pub name: String,
    pub begin_date: i64,
    pub end_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default)]
    pub is_active: bool,
}

#[derive(Debug, Deserialize)]
pub struct ContractResult {
    pub contract: Contract,
}

impl ApiResult for ContractResult {
    type Entity = Contract;
    const PATH: &'static str = "/publisher/licensing/contract/get";

    fn into_entity(self) -> Contract {
        self.contract
    }
}
