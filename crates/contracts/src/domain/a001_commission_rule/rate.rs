use serde::{Deserialize, Serialize};

use super::fields;
use crate::domain::common::{CurrencyAmounts, FieldError};

/// Способ расчёта комиссии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RateKind {
    #[default]
    Flat,
    Percentage,
}

impl RateKind {
    pub fn code(&self) -> &'static str {
        match self {
            RateKind::Flat => "flat",
            RateKind::Percentage => "percentage",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RateKind::Flat => "Flat fee",
            RateKind::Percentage => "Percentage",
        }
    }

    pub fn all() -> Vec<RateKind> {
        vec![RateKind::Flat, RateKind::Percentage]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "flat" => Some(RateKind::Flat),
            "percentage" => Some(RateKind::Percentage),
            _ => None,
        }
    }
}

/// Проверка обязательных значений ставки.
///
/// Для процента проверяется только наличие значения: ровно 0 проходит.
/// Пустой набор фиксированных сумм прерывает остальные проверки набора.
pub fn validate_rate(
    rate_kind: RateKind,
    percent_value: Option<f64>,
    flat_values: &CurrencyAmounts,
) -> Vec<FieldError> {
    let mut errors = Vec::new();

    match rate_kind {
        RateKind::Percentage => {
            if percent_value.is_none() {
                errors.push(FieldError::new(
                    fields::PERCENT_VALUE,
                    "Percentage value is required",
                ));
            }
        }
        RateKind::Flat => {
            if flat_values.is_empty() {
                errors.push(FieldError::new(
                    fields::FLAT_VALUES,
                    "At least one flat fee value is required",
                ));
                return errors;
            }

            if !flat_values.amounts().any(|amount| amount > 0.0) {
                errors.push(FieldError::new(
                    fields::FLAT_VALUES,
                    "At least one flat fee value must be greater than 0",
                ));
            }
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(pairs: &[(&str, f64)]) -> CurrencyAmounts {
        pairs.iter().map(|(c, a)| (*c, *a)).collect()
    }

    #[test]
    fn test_percentage_requires_value() {
        let errors = validate_rate(RateKind::Percentage, None, &CurrencyAmounts::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, fields::PERCENT_VALUE);
        assert_eq!(errors[0].message, "Percentage value is required");
    }

    #[test]
    fn test_percentage_zero_passes_presence_check() {
        let errors = validate_rate(RateKind::Percentage, Some(0.0), &CurrencyAmounts::new());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_flat_empty_reports_required_only() {
        let errors = validate_rate(RateKind::Flat, None, &CurrencyAmounts::new());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].message, "At least one flat fee value is required");
    }

    #[test]
    fn test_flat_all_zero_must_be_positive() {
        let errors = validate_rate(
            RateKind::Flat,
            None,
            &amounts(&[("usd", 0.0), ("eur", 0.0)]),
        );
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, fields::FLAT_VALUES);
        assert_eq!(
            errors[0].message,
            "At least one flat fee value must be greater than 0"
        );
    }

    #[test]
    fn test_flat_one_positive_amount_is_enough() {
        let errors = validate_rate(
            RateKind::Flat,
            None,
            &amounts(&[("usd", 0.0), ("eur", 2.5)]),
        );
        assert!(errors.is_empty());
    }

    #[test]
    fn test_flat_ignores_percent_value() {
        let errors = validate_rate(RateKind::Flat, None, &amounts(&[("usd", 1.0)]));
        assert!(errors.is_empty());
    }
}
