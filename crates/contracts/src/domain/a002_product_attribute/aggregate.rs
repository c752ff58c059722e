use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Attribute definitions
// ============================================================================

/// Вид поля ввода для атрибута
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeUiComponent {
    Select,
    Multivalue,
    Unit,
    Toggle,
    TextArea,
    ColorPicker,
    #[default]
    #[serde(other)]
    Text,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PossibleValue {
    pub id: String,
    pub value: String,
}

/// Дополнительный атрибут товара
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductAttribute {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub handle: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub ui_component: AttributeUiComponent,
    #[serde(default)]
    pub possible_values: Vec<PossibleValue>,
}

impl ProductAttribute {
    pub fn is_select(&self) -> bool {
        self.ui_component == AttributeUiComponent::Select
    }

    pub fn option_by_id(&self, id: &str) -> Option<&PossibleValue> {
        self.possible_values.iter().find(|pv| pv.id == id)
    }

    pub fn option_by_value(&self, value: &str) -> Option<&PossibleValue> {
        self.possible_values.iter().find(|pv| pv.value == value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRef {
    pub name: String,
}

/// Текущее значение атрибута у товара
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductAttributeValue {
    pub id: String,
    pub attribute_id: String,
    pub value: String,
    #[serde(default)]
    pub attribute: Option<AttributeRef>,
}

impl ProductAttributeValue {
    pub fn attribute_name(&self) -> &str {
        self.attribute.as_ref().map(|a| a.name.as_str()).unwrap_or("")
    }
}

// ============================================================================
// External API responses
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAttributeListResponse {
    pub attributes: Vec<ProductAttribute>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductWithAttributeValues {
    pub id: String,
    #[serde(default)]
    pub attribute_values: Vec<ProductAttributeValue>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    pub product: ProductWithAttributeValues,
}

/// Всё, что нужно секции атрибутов товара: определения и текущие значения
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductAttributesView {
    pub attributes: Vec<ProductAttribute>,
    pub values: Vec<ProductAttributeValue>,
}

// ============================================================================
// Form / update payload
// ============================================================================

/// Значения формы редактирования: attribute_id -> сырое значение поля.
///
/// Для select-атрибутов здесь хранится id выбранного варианта.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AttributeFormValues(pub BTreeMap<String, String>);

impl AttributeFormValues {
    /// Начальные значения формы из текущих значений товара
    pub fn from_current(values: &[ProductAttributeValue], attributes: &[ProductAttribute]) -> Self {
        let mut map = BTreeMap::new();
        for current in values {
            let raw = attributes
                .iter()
                .find(|a| a.id == current.attribute_id && a.is_select())
                .and_then(|a| a.option_by_value(&current.value))
                .map(|pv| pv.id.clone())
                .unwrap_or_else(|| current.value.clone());
            map.insert(current.attribute_id.clone(), raw);
        }
        Self(map)
    }

    pub fn get(&self, attribute_id: &str) -> String {
        self.0.get(attribute_id).cloned().unwrap_or_default()
    }

    pub fn set(&mut self, attribute_id: &str, value: String) {
        self.0.insert(attribute_id.to_string(), value);
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeValueInput {
    pub attribute_id: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalData {
    pub values: Vec<AttributeValueInput>,
}

/// Тело обновления товара во внешнем API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateProductAttributes {
    pub additional_data: AdditionalData,
}

/// Собрать тело обновления: id варианта select-атрибута заменяется на его значение
pub fn build_attribute_update(
    form: &AttributeFormValues,
    attributes: &[ProductAttribute],
) -> UpdateProductAttributes {
    let values = form
        .0
        .iter()
        .map(|(attribute_id, raw)| {
            let value = attributes
                .iter()
                .find(|a| &a.id == attribute_id && a.is_select())
                .and_then(|a| a.option_by_id(raw))
                .map(|pv| pv.value.clone())
                .unwrap_or_else(|| raw.clone());
            AttributeValueInput {
                attribute_id: attribute_id.clone(),
                value,
            }
        })
        .collect();

    UpdateProductAttributes {
        additional_data: AdditionalData { values },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color_attribute() -> ProductAttribute {
        ProductAttribute {
            id: "attr_color".into(),
            name: "Color".into(),
            handle: "color".into(),
            description: None,
            ui_component: AttributeUiComponent::Select,
            possible_values: vec![
                PossibleValue {
                    id: "pv_red".into(),
                    value: "Red".into(),
                },
                PossibleValue {
                    id: "pv_blue".into(),
                    value: "Blue".into(),
                },
            ],
        }
    }

    fn material_attribute() -> ProductAttribute {
        ProductAttribute {
            id: "attr_material".into(),
            name: "Material".into(),
            handle: "material".into(),
            description: Some("Main fabric".into()),
            ui_component: AttributeUiComponent::Text,
            possible_values: Vec::new(),
        }
    }

    #[test]
    fn test_unknown_ui_component_falls_back_to_text() {
        let json = serde_json::json!({ "id": "a", "name": "A", "ui_component": "rich_editor" });
        let attr: ProductAttribute = serde_json::from_value(json).unwrap();
        assert_eq!(attr.ui_component, AttributeUiComponent::Text);

        let json = serde_json::json!({ "id": "b", "name": "B", "ui_component": "text_area" });
        let attr: ProductAttribute = serde_json::from_value(json).unwrap();
        assert_eq!(attr.ui_component, AttributeUiComponent::TextArea);
    }

    #[test]
    fn test_select_id_is_replaced_with_option_value() {
        let attributes = vec![color_attribute(), material_attribute()];
        let mut form = AttributeFormValues::default();
        form.set("attr_color", "pv_blue".into());
        form.set("attr_material", "Cotton".into());

        let update = build_attribute_update(&form, &attributes);
        assert_eq!(
            update.additional_data.values,
            vec![
                AttributeValueInput {
                    attribute_id: "attr_color".into(),
                    value: "Blue".into()
                },
                AttributeValueInput {
                    attribute_id: "attr_material".into(),
                    value: "Cotton".into()
                },
            ]
        );
    }

    #[test]
    fn test_select_without_matching_option_passes_raw_value() {
        let attributes = vec![color_attribute()];
        let mut form = AttributeFormValues::default();
        form.set("attr_color", "Green".into());

        let update = build_attribute_update(&form, &attributes);
        assert_eq!(update.additional_data.values[0].value, "Green");
    }

    #[test]
    fn test_from_current_maps_select_value_back_to_option_id() {
        let attributes = vec![color_attribute(), material_attribute()];
        let values = vec![
            ProductAttributeValue {
                id: "v1".into(),
                attribute_id: "attr_color".into(),
                value: "Red".into(),
                attribute: None,
            },
            ProductAttributeValue {
                id: "v2".into(),
                attribute_id: "attr_material".into(),
                value: "Wool".into(),
                attribute: Some(AttributeRef {
                    name: "Material".into(),
                }),
            },
        ];

        let form = AttributeFormValues::from_current(&values, &attributes);
        assert_eq!(form.get("attr_color"), "pv_red");
        assert_eq!(form.get("attr_material"), "Wool");
        assert_eq!(form.get("attr_missing"), "");

        let update = build_attribute_update(&form, &attributes);
        assert_eq!(update.additional_data.values[0].value, "Red");
    }

    #[test]
    fn test_update_wire_shape() {
        let mut form = AttributeFormValues::default();
        form.set("attr_material", "Linen".into());
        let json = serde_json::to_value(build_attribute_update(&form, &[])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "additional_data": {
                    "values": [{ "attribute_id": "attr_material", "value": "Linen" }]
                }
            })
        );
    }
}
