//! Typed results for each Piano entity

pub mod app;
pub mod contract;
pub mod custom_field;
pub mod licensee;
pub mod offer;
pub mod promotion;
pub mod resource;
pub mod term;

pub use app::{App, AppResult};
pub use contract::{Contract, ContractPeriod, ContractResult, ContractType};
pub use custom_field::{CustomField, CustomFieldDataType, CustomFieldListResult};
pub use licensee::{Licensee, LicenseeResult, Representative};
pub use offer::{Offer, OfferResult};
pub use promotion::{DiscountType, Promotion, PromotionResult};
pub use resource::{Resource, ResourceResult, ResourceType};
pub use term::{Term, TermResource, TermResult};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_successful, ApiError, Envelope};

    fn envelope(body: &str) -> Envelope {
        decode_successful(body.as_bytes()).unwrap()
    }

    #[test]
    fn app_result() {
        let app = envelope(
            r#"{"code":0,"ts":1700000000,"app":{"aid":"abc123","name":"Acme","email":"ops@acme.test","default_lang":"en_US","state":"active","unused":1}}"#,
        )
        .into_entity::<AppResult>()
        .unwrap();

        assert_eq!(app.aid, "abc123");
        assert_eq!(app.name, "Acme");
        assert_eq!(app.default_lang.as_deref(), Some("en_US"));
        assert_eq!(app.logo1, None);
    }

    #[test]
    fn licensee_result() {
        let licensee = envelope(
            r#"{"code":0,"licensee":{"licensee_id":"LC1","name":"University","representatives":[{"email":"a@uni.test"},{"email":"b@uni.test"}]}}"#,
        )
        .into_entity::<LicenseeResult>()
        .unwrap();

        assert_eq!(licensee.licensee_id, "LC1");
        assert_eq!(licensee.representatives.len(), 2);
        assert_eq!(licensee.representatives[1].email, "b@uni.test");
        assert!(licensee.manager_uids.is_empty());
    }

    #[test]
    fn contract_result() {
        let contract = envelope(
            r#"{"code":0,"contract":{
                "contract_id":"TC1","licensee_id":"LC1",
                "contract_type":"EMAIL_DOMAIN_CONTRACT","contract_name":"Campus",
                "seats_number":250,"is_hard_seats_limit_type":true,"create_date":1700000000,
                "contract_periods":[{"period_id":"CP1","name":"2024","begin_date":1704067200,"end_date":1735689599,"is_active":true}]
            }}"#,
        )
        .into_entity::<ContractResult>()
        .unwrap();

        assert_eq!(contract.contract_type, ContractType::EmailDomainContract);
        assert_eq!(contract.seats_number, 250);
        assert!(contract.is_hard_seats_limit_type);
        let periods = contract.contract_periods.unwrap();
        assert_eq!(periods[0].period_id, "CP1");
        assert!(periods[0].is_active);
    }

    #[test]
    fn resource_result() {
        let resource = envelope(
            r#"{"code":0,"resource":{"rid":"R1","aid":"abc123","name":"Premium","type":"bundle","bundle_type":"fixed","publish_date":1700000000}}"#,
        )
        .into_entity::<ResourceResult>()
        .unwrap();

        assert_eq!(resource.resource_type, ResourceType::Bundle);
        assert_eq!(resource.bundle_type.as_deref(), Some("fixed"));
        assert!(!resource.disabled);
    }

    #[test]
    fn term_result() {
        let term = envelope(
            r#"{"code":0,"term":{"term_id":"TM1","aid":"abc123","name":"Monthly","type":"payment","resource":{"rid":"R1","name":"Premium"},"payment_currency":"USD"}}"#,
        )
        .into_entity::<TermResult>()
        .unwrap();

        assert_eq!(term.term_type, "payment");
        assert_eq!(term.resource.unwrap().rid, "R1");
        assert_eq!(term.payment_currency.as_deref(), Some("USD"));
    }

    #[test]
    fn offer_result() {
        let offer = envelope(
            r#"{"code":0,"offer":{"offer_id":"OF1","aid":"abc123","name":"Spring Sale","status":"active"}}"#,
        )
        .into_entity::<OfferResult>()
        .unwrap();

        assert_eq!(offer.offer_id, "OF1");
        assert_eq!(offer.status.as_deref(), Some("active"));
    }

    #[test]
    fn promotion_result() {
        let promotion = envelope(
            r#"{"code":0,"promotion":{"promotion_id":"PR1","aid":"abc123","name":"Half off","discount_type":"percentage","percentage_discount":50.0,"unlimited_uses":true,"uses":12}}"#,
        )
        .into_entity::<PromotionResult>()
        .unwrap();

        assert_eq!(promotion.discount_type, Some(DiscountType::Percentage));
        assert_eq!(promotion.percentage_discount, Some(50.0));
        assert!(promotion.unlimited_uses);
        assert_eq!(promotion.uses, 12);
    }

    #[test]
    fn custom_field_list_result() {
        let fields = envelope(
            r#"{"code":0,"custom_fields":[
                {"field_name":"newsletter","title":"Newsletter","data_type":"BOOLEAN","editable":true},
                {"field_name":"topics","title":"Topics","data_type":"MULTI_SELECT_LIST","options":["news","sport"]}
            ]}"#,
        )
        .into_entity::<CustomFieldListResult>()
        .unwrap();

        assert_eq!(fields.len(), 2);
        assert_eq!(fields[0].data_type, CustomFieldDataType::Boolean);
        assert_eq!(fields[1].options, vec!["news", "sport"]);
    }

    #[test]
    fn missing_payload_key_is_a_decode_error() {
        let err = envelope(r#"{"code":0}"#)
            .into_entity::<ContractResult>()
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
