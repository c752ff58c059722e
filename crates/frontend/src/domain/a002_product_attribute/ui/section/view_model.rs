use super::model;
use crate::shared::notify::Notifier;
use contracts::domain::a002_product_attribute::{
    build_attribute_update, AttributeFormValues, ProductAttributesView,
};
use leptos::prelude::*;

const UPDATED_MESSAGE: &str = "Product updated successfully";

/// Строка таблицы просмотра: имя атрибута и значение
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRow {
    pub attribute_id: String,
    pub name: String,
    pub value: String,
}

/// Строки таблицы в порядке определений атрибутов.
///
/// Имя берётся из значения, а если его там нет, из определения.
/// Атрибуты без значения показываются с пустым значением.
pub fn attribute_rows(view: &ProductAttributesView) -> Vec<AttributeRow> {
    let mut rows: Vec<AttributeRow> = view
        .attributes
        .iter()
        .map(|attr| {
            let current = view.values.iter().find(|v| v.attribute_id == attr.id);
            let name = current
                .map(|v| v.attribute_name())
                .filter(|n| !n.is_empty())
                .unwrap_or(attr.name.as_str())
                .to_string();
            AttributeRow {
                attribute_id: attr.id.clone(),
                name,
                value: current.map(|v| v.value.clone()).unwrap_or_default(),
            }
        })
        .collect();

    // Значения атрибутов, которых нет среди определений
    for value in &view.values {
        if !view.attributes.iter().any(|a| a.id == value.attribute_id) {
            rows.push(AttributeRow {
                attribute_id: value.attribute_id.clone(),
                name: value.attribute_name().to_string(),
                value: value.value.clone(),
            });
        }
    }
    rows
}

#[derive(Clone, Copy)]
pub struct ProductAttributesVm {
    pub product_id: RwSignal<String>,
    pub data: RwSignal<ProductAttributesView>,
    pub form: RwSignal<AttributeFormValues>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
    pub editor_open: RwSignal<bool>,
    notifier: Notifier,
}

impl ProductAttributesVm {
    pub fn new(product_id: String, notifier: Notifier) -> Self {
        Self {
            product_id: RwSignal::new(product_id),
            data: RwSignal::new(ProductAttributesView::default()),
            form: RwSignal::new(AttributeFormValues::default()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
            editor_open: RwSignal::new(false),
            notifier,
        }
    }

    pub fn rows(&self) -> Signal<Vec<AttributeRow>> {
        let data = self.data;
        Signal::derive(move || data.with(attribute_rows))
    }

    pub fn load(&self) {
        let this = *self;
        let product_id = this.product_id.get_untracked();
        this.loading.set(true);
        this.error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_attributes(&product_id).await {
                Ok(view) => this.data.set(view),
                Err(e) => this.error.set(Some(e.message)),
            }
            this.loading.set(false);
        });
    }

    /// Открыть редактор с текущими значениями товара
    pub fn open_editor(&self) {
        let initial = self
            .data
            .with_untracked(|d| AttributeFormValues::from_current(&d.values, &d.attributes));
        self.form.set(initial);
        self.editor_open.set(true);
    }

    pub fn close_editor(&self) {
        self.editor_open.set(false);
    }

    pub fn set_value(&self, attribute_id: &str, value: String) {
        self.form.update(|f| f.set(attribute_id, value));
    }

    pub fn save(&self) {
        if self.saving.get_untracked() {
            return;
        }
        let this = *self;
        let product_id = this.product_id.get_untracked();
        let body = this
            .data
            .with_untracked(|d| this.form.with_untracked(|f| build_attribute_update(f, &d.attributes)));
        this.saving.set(true);

        leptos::task::spawn_local(async move {
            match model::save_attributes(&product_id, &body).await {
                Ok(()) => {
                    this.saving.set(false);
                    this.notifier.success(UPDATED_MESSAGE);
                    this.editor_open.set(false);
                    this.load();
                }
                Err(e) => {
                    this.saving.set(false);
                    this.notifier.error(e.message);
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_product_attribute::{
        AttributeRef, AttributeUiComponent, ProductAttribute, ProductAttributeValue,
    };

    fn attribute(id: &str, name: &str) -> ProductAttribute {
        ProductAttribute {
            id: id.into(),
            name: name.into(),
            handle: name.to_lowercase(),
            description: None,
            ui_component: AttributeUiComponent::Text,
            possible_values: Vec::new(),
        }
    }

    fn value(attribute_id: &str, value: &str, name: Option<&str>) -> ProductAttributeValue {
        ProductAttributeValue {
            id: format!("val_{attribute_id}"),
            attribute_id: attribute_id.into(),
            value: value.into(),
            attribute: name.map(|n| AttributeRef { name: n.into() }),
        }
    }

    #[test]
    fn test_rows_follow_definition_order() {
        let view = ProductAttributesView {
            attributes: vec![attribute("a1", "Material"), attribute("a2", "Color")],
            values: vec![value("a2", "Red", Some("Colour")), value("a1", "Linen", None)],
        };

        let rows = attribute_rows(&view);

        assert_eq!(rows.len(), 2);
        assert_eq!((rows[0].name.as_str(), rows[0].value.as_str()), ("Material", "Linen"));
        assert_eq!((rows[1].name.as_str(), rows[1].value.as_str()), ("Colour", "Red"));
    }

    #[test]
    fn test_attribute_without_value_is_listed_empty() {
        let view = ProductAttributesView {
            attributes: vec![attribute("a1", "Material")],
            values: Vec::new(),
        };
        let rows = attribute_rows(&view);
        assert_eq!(rows[0].value, "");
    }

    #[test]
    fn test_orphan_value_is_appended() {
        let view = ProductAttributesView {
            attributes: vec![attribute("a1", "Material")],
            values: vec![value("a9", "42", Some("Size"))],
        };
        let rows = attribute_rows(&view);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Size");
    }
}
