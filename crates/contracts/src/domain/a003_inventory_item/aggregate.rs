use serde::{Deserialize, Serialize};

use crate::domain::common::ValidationErrors;

/// Складская позиция (только поля, которые редактирует форма атрибутов)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: String,
    #[serde(default)]
    pub sku: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub height: Option<f64>,
    #[serde(default)]
    pub width: Option<f64>,
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub weight: Option<f64>,
    #[serde(default)]
    pub mid_code: Option<String>,
    #[serde(default)]
    pub hs_code: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
    #[serde(default)]
    pub material: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InventoryItemResponse {
    pub inventory_item: InventoryItem,
}

/// Тело обновления атрибутов; `None` сериализуется как `null` и очищает поле
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateInventoryItemAttributes {
    pub height: Option<f64>,
    pub width: Option<f64>,
    pub length: Option<f64>,
    pub weight: Option<f64>,
    pub mid_code: Option<String>,
    pub hs_code: Option<String>,
    pub origin_country: Option<String>,
    pub material: Option<String>,
}

/// Состояние формы: всё как введено пользователем
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryItemAttributesForm {
    pub height: String,
    pub width: String,
    pub length: String,
    pub weight: String,
    pub mid_code: String,
    pub hs_code: String,
    pub origin_country: String,
    pub material: String,
}

fn number_to_input(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn text_to_input(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn parse_dimension(
    field: &str,
    raw: &str,
    errors: &mut ValidationErrors,
) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.replace(',', ".").parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => Some(v),
        _ => {
            errors.push(field, "Must be a positive number");
            None
        }
    }
}

fn optional_text(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl From<&InventoryItem> for InventoryItemAttributesForm {
    fn from(item: &InventoryItem) -> Self {
        Self {
            height: number_to_input(item.height),
            width: number_to_input(item.width),
            length: number_to_input(item.length),
            weight: number_to_input(item.weight),
            mid_code: text_to_input(&item.mid_code),
            hs_code: text_to_input(&item.hs_code),
            origin_country: text_to_input(&item.origin_country),
            material: text_to_input(&item.material),
        }
    }
}

impl InventoryItemAttributesForm {
    /// Разобрать форму в тело обновления; ошибки по всем полям сразу
    pub fn to_update(&self) -> Result<UpdateInventoryItemAttributes, ValidationErrors> {
        let mut errors = ValidationErrors::new();

        let update = UpdateInventoryItemAttributes {
            height: parse_dimension("height", &self.height, &mut errors),
            width: parse_dimension("width", &self.width, &mut errors),
            length: parse_dimension("length", &self.length, &mut errors),
            weight: parse_dimension("weight", &self.weight, &mut errors),
            mid_code: optional_text(&self.mid_code),
            hs_code: optional_text(&self.hs_code),
            origin_country: optional_text(&self.origin_country),
            material: optional_text(&self.material),
        };

        errors.into_result().map(|_| update)
    }
}
