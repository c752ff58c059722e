use serde::{Deserialize, Serialize};

use super::fields;
use super::payload::{build_payload, RuleCreationPayload};
use super::rate::{validate_rate, RateKind};
use super::reference::{validate_reference_fields, ReferenceKind};
use crate::domain::common::{CurrencyAmounts, ValidationErrors};

/// Черновик правила комиссии (состояние формы создания).
///
/// Живёт от открытия формы до отправки или отмены.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommissionRuleDraft {
    pub name: String,
    pub reference: ReferenceKind,
    pub seller_id: String,
    pub type_id: String,
    pub category_id: String,
    pub include_tax: bool,
    pub rate_kind: RateKind,
    pub percent_value: Option<f64>,
    pub flat_values: CurrencyAmounts,
    pub min_enabled: bool,
    pub min_values: CurrencyAmounts,
    pub max_enabled: bool,
    pub max_values: CurrencyAmounts,
}

impl CommissionRuleDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Сменить вид привязки; идентификаторы, не нужные новому виду, очищаются
    pub fn set_reference(&mut self, reference: ReferenceKind) {
        self.reference = reference;
        self.clear_unused_identifiers();
    }

    pub fn clear_unused_identifiers(&mut self) {
        let required = self.reference.required_fields();
        if !required.needs_seller {
            self.seller_id.clear();
        }
        if !required.needs_type {
            self.type_id.clear();
        }
        if !required.needs_category {
            self.category_id.clear();
        }
    }

    /// Полная проверка перед отправкой; возвращает все ошибки сразу
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();

        if self.name.trim().is_empty() {
            errors.push(fields::NAME, "Name is required");
        }

        errors.extend(validate_reference_fields(
            self.reference,
            &self.seller_id,
            &self.type_id,
            &self.category_id,
        ));

        if let Some(percent) = self.percent_value {
            if !(0.0..=100.0).contains(&percent) {
                errors.push(
                    fields::PERCENT_VALUE,
                    "Percentage value must be between 0 and 100",
                );
            }
        }

        errors.extend(validate_rate(
            self.rate_kind,
            self.percent_value,
            &self.flat_values,
        ));

        for (field, amounts) in [
            (fields::FLAT_VALUES, &self.flat_values),
            (fields::MIN_VALUES, &self.min_values),
            (fields::MAX_VALUES, &self.max_values),
        ] {
            if amounts.amounts().any(|a| !a.is_finite() || a < 0.0) {
                errors.push(field, "Amounts must be 0 or greater");
            }
        }

        errors.into_result()
    }

    /// Payload для внешнего API с видимостью полей по текущему виду привязки
    pub fn to_payload(&self) -> RuleCreationPayload {
        build_payload(self, self.reference.required_fields())
    }
}
