use axum::extract::{Path, State};
use axum::Json;
use contracts::domain::a003_inventory_item::{InventoryItem, InventoryItemAttributesForm};

use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InventoryItem>, ApiError> {
    let item = state.commerce.get_inventory_item(&id).await?;
    Ok(Json(item))
}

/// Сохранение атрибутов складской позиции (форма разбирается на сервере)
pub async fn save_attributes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(form): Json<InventoryItemAttributesForm>,
) -> Result<Json<InventoryItem>, ApiError> {
    let update = form.to_update()?;
    let item = state.commerce.update_inventory_item(&id, &update).await?;
    tracing::info!("Inventory item {} attributes updated", id);
    Ok(Json(item))
}
