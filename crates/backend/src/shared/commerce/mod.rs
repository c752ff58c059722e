//! Access to the external commerce admin API.
//!
//! Handlers only see the [`CommerceApi`] trait; the reqwest implementation
//! lives in [`client`], tests use the in-memory fake.

pub mod client;
#[cfg(test)]
pub mod fake;

use async_trait::async_trait;
use contracts::domain::a001_commission_rule::RuleCreationPayload;
use contracts::domain::a002_product_attribute::{
    ProductAttribute, ProductAttributeValue, UpdateProductAttributes,
};
use contracts::domain::a003_inventory_item::{InventoryItem, UpdateInventoryItemAttributes};
use contracts::domain::catalog::{ProductCategory, ProductType, Seller, Store};

use crate::shared::error::ApiError;

pub use client::CommerceApiClient;

#[async_trait]
pub trait CommerceApi: Send + Sync {
    async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError>;

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ApiError>;

    async fn list_product_categories(&self) -> Result<Vec<ProductCategory>, ApiError>;

    async fn list_stores(&self) -> Result<Vec<Store>, ApiError>;

    /// Создать правило комиссии; возвращает тело ответа как есть
    async fn create_commission_rule(
        &self,
        payload: &RuleCreationPayload,
    ) -> Result<serde_json::Value, ApiError>;

    async fn list_product_attributes(
        &self,
        product_id: &str,
    ) -> Result<Vec<ProductAttribute>, ApiError>;

    async fn product_attribute_values(
        &self,
        product_id: &str,
    ) -> Result<Vec<ProductAttributeValue>, ApiError>;

    async fn update_product_attributes(
        &self,
        product_id: &str,
        body: &UpdateProductAttributes,
    ) -> Result<(), ApiError>;

    async fn get_inventory_item(&self, id: &str) -> Result<InventoryItem, ApiError>;

    async fn update_inventory_item(
        &self,
        id: &str,
        body: &UpdateInventoryItemAttributes,
    ) -> Result<InventoryItem, ApiError>;
}
