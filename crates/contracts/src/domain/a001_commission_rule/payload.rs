use serde::{Deserialize, Serialize};

use super::draft::CommissionRuleDraft;
use super::rate::RateKind;
use super::reference::{ReferenceKind, RequiredFields};
use crate::domain::common::Price;

/// Тело запроса создания правила во внешнем API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleCreationPayload {
    pub name: String,
    pub reference: ReferenceKind,
    pub reference_id: String,
    pub is_active: bool,
    pub rate: RatePayload,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatePayload {
    #[serde(rename = "type")]
    pub kind: RateKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub percentage_rate: Option<f64>,
    pub include_tax: bool,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub price_set: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub min_price_set: Option<Vec<Price>>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub max_price_set: Option<Vec<Price>>,
}

/// Ответ backend после успешного создания правила
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommissionRuleCreated {
    pub id: Option<String>,
    pub message: String,
}

/// Собрать payload из черновика.
///
/// `reference_id` складывается из видимых и заполненных идентификаторов
/// строго в порядке seller, type, category через `+`: внешняя система
/// разбирает его по позициям.
pub fn build_payload(draft: &CommissionRuleDraft, visibility: RequiredFields) -> RuleCreationPayload {
    let parts = [
        (visibility.needs_seller, draft.seller_id.as_str()),
        (visibility.needs_type, draft.type_id.as_str()),
        (visibility.needs_category, draft.category_id.as_str()),
    ];
    let reference_id = parts
        .iter()
        .filter(|(visible, id)| *visible && !id.trim().is_empty())
        .map(|(_, id)| *id)
        .collect::<Vec<_>>()
        .join("+");

    let rate = RatePayload {
        kind: draft.rate_kind,
        percentage_rate: match draft.rate_kind {
            RateKind::Percentage => draft.percent_value,
            RateKind::Flat => None,
        },
        include_tax: draft.include_tax,
        price_set: match draft.rate_kind {
            RateKind::Flat => Some(draft.flat_values.to_price_set()),
            RateKind::Percentage => None,
        },
        min_price_set: draft
            .min_enabled
            .then(|| draft.min_values.to_price_set()),
        max_price_set: draft
            .max_enabled
            .then(|| draft.max_values.to_price_set()),
    };

    RuleCreationPayload {
        name: draft.name.clone(),
        reference: draft.reference,
        reference_id,
        is_active: true,
        rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_reference_id_joins_seller_and_type() {
        let mut draft = CommissionRuleDraft::new();
        draft.name = "Combo".to_string();
        draft.set_reference(ReferenceKind::SellerProductType);
        draft.seller_id = "S1".to_string();
        draft.type_id = "T1".to_string();

        let payload = build_payload(&draft, draft.reference.required_fields());
        assert_eq!(payload.reference_id, "S1+T1");
        assert_eq!(payload.reference, ReferenceKind::SellerProductType);
        assert!(payload.is_active);
    }

    #[test]
    fn test_hidden_identifiers_are_skipped() {
        let mut draft = CommissionRuleDraft::new();
        draft.reference = ReferenceKind::ProductCategory;
        // stale values that were never cleared
        draft.seller_id = "S1".to_string();
        draft.category_id = "C1".to_string();

        let payload = draft.to_payload();
        assert_eq!(payload.reference_id, "C1");
    }

    #[test]
    fn test_reference_id_order_is_fixed() {
        let mut draft = CommissionRuleDraft::new();
        draft.category_id = "C1".to_string();
        draft.seller_id = "S1".to_string();
        let visibility = RequiredFields {
            needs_seller: true,
            needs_type: false,
            needs_category: true,
        };
        assert_eq!(build_payload(&draft, visibility).reference_id, "S1+C1");
    }

    #[test]
    fn test_percentage_rate_without_min_price_set() {
        let mut draft = CommissionRuleDraft::new();
        draft.name = "Pct".to_string();
        draft.seller_id = "S1".to_string();
        draft.rate_kind = RateKind::Percentage;
        draft.percent_value = Some(15.0);
        draft.flat_values.set("usd", 3.0);
        draft.min_enabled = false;
        draft.min_values.set("usd", 1.0);

        let payload = draft.to_payload();
        assert_eq!(payload.rate.percentage_rate, Some(15.0));
        assert_eq!(payload.rate.price_set, None);

        let json = serde_json::to_value(&payload).unwrap();
        let rate = json["rate"].as_object().unwrap();
        assert!(!rate.contains_key("min_price_set"));
        assert!(!rate.contains_key("price_set"));
        assert_eq!(rate["percentage_rate"], json!(15.0));
    }

    #[test]
    fn test_flat_payload_wire_shape() {
        let mut draft = CommissionRuleDraft::new();
        draft.name = "Flat".to_string();
        draft.seller_id = "sel_1".to_string();
        draft.include_tax = true;
        draft.flat_values.set("usd", 2.0);
        draft.flat_values.set("eur", 1.5);
        draft.max_enabled = true;
        draft.max_values.set("usd", 50.0);

        let json = serde_json::to_value(draft.to_payload()).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Flat",
                "reference": "seller",
                "reference_id": "sel_1",
                "is_active": true,
                "rate": {
                    "type": "flat",
                    "include_tax": true,
                    "price_set": [
                        { "currency_code": "usd", "amount": 2.0 },
                        { "currency_code": "eur", "amount": 1.5 }
                    ],
                    "max_price_set": [
                        { "currency_code": "usd", "amount": 50.0 }
                    ]
                }
            })
        );
    }

    #[test]
    fn test_enabled_but_empty_limit_is_sent_as_empty_list() {
        let mut draft = CommissionRuleDraft::new();
        draft.rate_kind = RateKind::Percentage;
        draft.percent_value = Some(5.0);
        draft.min_enabled = true;

        let payload = draft.to_payload();
        assert_eq!(payload.rate.min_price_set, Some(Vec::new()));
        assert_eq!(payload.rate.max_price_set, None);
    }
}
