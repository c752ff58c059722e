use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_product_attribute::{ProductAttributesView, UpdateProductAttributes};

use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

/// Определения атрибутов и текущие значения товара
pub async fn get_attributes(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
) -> Result<Json<ProductAttributesView>, ApiError> {
    let (attributes, values) = tokio::join!(
        state.commerce.list_product_attributes(&product_id),
        state.commerce.product_attribute_values(&product_id),
    );

    Ok(Json(ProductAttributesView {
        attributes: attributes?,
        values: values?,
    }))
}

/// Сохранение значений атрибутов товара
pub async fn save_attributes(
    State(state): State<AppState>,
    Path(product_id): Path<String>,
    Json(body): Json<UpdateProductAttributes>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(
        "Updating {} attribute value(s) of product {}",
        body.additional_data.values.len(),
        product_id
    );
    state
        .commerce
        .update_product_attributes(&product_id, &body)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::commerce::fake::FakeCommerceApi;
    use contracts::domain::a002_product_attribute::{
        AdditionalData, AttributeUiComponent, AttributeValueInput, ProductAttribute,
        ProductAttributeValue,
    };
    use std::sync::Arc;

    #[tokio::test]
    async fn test_view_combines_definitions_and_values() {
        let api = FakeCommerceApi {
            attributes: vec![ProductAttribute {
                id: "attr_1".into(),
                name: "Material".into(),
                handle: "material".into(),
                description: None,
                ui_component: AttributeUiComponent::Text,
                possible_values: Vec::new(),
            }],
            attribute_values: vec![ProductAttributeValue {
                id: "val_1".into(),
                attribute_id: "attr_1".into(),
                value: "Cotton".into(),
                attribute: None,
            }],
            ..Default::default()
        };
        let state = AppState::new(Arc::new(api));

        let Json(view) = get_attributes(State(state), Path("prod_1".into()))
            .await
            .unwrap();
        assert_eq!(view.attributes.len(), 1);
        assert_eq!(view.values[0].value, "Cotton");
    }

    #[tokio::test]
    async fn test_save_forwards_body() {
        let api = Arc::new(FakeCommerceApi::default());
        let state = AppState::new(api.clone());
        let body = UpdateProductAttributes {
            additional_data: AdditionalData {
                values: vec![AttributeValueInput {
                    attribute_id: "attr_1".into(),
                    value: "Linen".into(),
                }],
            },
        };

        let status = save_attributes(State(state), Path("prod_1".into()), Json(body.clone()))
            .await
            .unwrap();

        assert_eq!(status, StatusCode::NO_CONTENT);
        let updates = api.attribute_updates.lock().unwrap();
        assert_eq!(updates[0], ("prod_1".to_string(), body));
    }
}
