use contracts::domain::a003_inventory_item::{InventoryItem, InventoryItemAttributesForm};

use crate::shared::api::{get_json, post_json, ApiFailure};
use crate::shared::api_utils::path_segment;

/// Загрузить складскую позицию
pub async fn fetch_by_id(id: &str) -> Result<InventoryItem, ApiFailure> {
    get_json(&format!("/api/inventory-items/{}", path_segment(id))).await
}

/// Сохранить атрибуты; backend возвращает обновлённую позицию
pub async fn save_attributes(
    id: &str,
    form: &InventoryItemAttributesForm,
) -> Result<InventoryItem, ApiFailure> {
    post_json(
        &format!("/api/inventory-items/{}/attributes", path_segment(id)),
        form,
    )
    .await
}
