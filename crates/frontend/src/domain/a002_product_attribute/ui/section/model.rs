use contracts::domain::a002_product_attribute::{ProductAttributesView, UpdateProductAttributes};

use crate::shared::api::{get_json, post_no_content, ApiFailure};
use crate::shared::api_utils::path_segment;

/// Определения атрибутов и текущие значения товара
pub async fn fetch_attributes(product_id: &str) -> Result<ProductAttributesView, ApiFailure> {
    get_json(&format!("/api/products/{}/attributes", path_segment(product_id))).await
}

/// Сохранить значения атрибутов
pub async fn save_attributes(
    product_id: &str,
    body: &UpdateProductAttributes,
) -> Result<(), ApiFailure> {
    post_no_content(
        &format!("/api/products/{}/attributes", path_segment(product_id)),
        body,
    )
    .await
}
