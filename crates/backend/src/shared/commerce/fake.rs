use async_trait::async_trait;
use contracts::domain::a001_commission_rule::RuleCreationPayload;
use contracts::domain::a002_product_attribute::{
    ProductAttribute, ProductAttributeValue, UpdateProductAttributes,
};
use contracts::domain::a003_inventory_item::{InventoryItem, UpdateInventoryItemAttributes};
use contracts::domain::catalog::{ProductCategory, ProductType, Seller, Store, StoreCurrency};
use std::sync::Mutex;

use super::CommerceApi;
use crate::shared::error::ApiError;

/// In-memory commerce API that records what handlers send
#[derive(Default)]
pub struct FakeCommerceApi {
    pub fail_with: Option<ApiError>,
    pub created_rules: Mutex<Vec<RuleCreationPayload>>,
    pub attribute_updates: Mutex<Vec<(String, UpdateProductAttributes)>>,
    pub inventory_updates: Mutex<Vec<(String, UpdateInventoryItemAttributes)>>,
    pub attributes: Vec<ProductAttribute>,
    pub attribute_values: Vec<ProductAttributeValue>,
    pub inventory_items: Vec<InventoryItem>,
}

impl FakeCommerceApi {
    /// Every call answers with a non-2xx status; an empty message means none was sent
    pub fn failing(status: u16, message: &str) -> Self {
        let message = Some(message.trim().to_string()).filter(|m| !m.is_empty());
        Self::failing_with(ApiError::Upstream { status, message })
    }

    pub fn failing_with(error: ApiError) -> Self {
        Self {
            fail_with: Some(error),
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), ApiError> {
        match &self.fail_with {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CommerceApi for FakeCommerceApi {
    async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        self.check()?;
        Ok(vec![Seller {
            id: "sel_1".into(),
            name: "Acme".into(),
        }])
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ApiError> {
        self.check()?;
        Ok(vec![ProductType {
            id: "ptyp_1".into(),
            value: "Shoes".into(),
        }])
    }

    async fn list_product_categories(&self) -> Result<Vec<ProductCategory>, ApiError> {
        self.check()?;
        Ok(vec![ProductCategory {
            id: "pcat_1".into(),
            name: "Outdoor".into(),
        }])
    }

    async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        self.check()?;
        Ok(vec![Store {
            id: "store_1".into(),
            supported_currencies: vec![
                StoreCurrency {
                    currency_code: "eur".into(),
                    is_default: true,
                },
                StoreCurrency {
                    currency_code: "usd".into(),
                    is_default: false,
                },
            ],
        }])
    }

    async fn create_commission_rule(
        &self,
        payload: &RuleCreationPayload,
    ) -> Result<serde_json::Value, ApiError> {
        self.check()?;
        self.created_rules.lock().unwrap().push(payload.clone());
        Ok(serde_json::json!({ "commission_rule": { "id": "comrule_1" } }))
    }

    async fn list_product_attributes(
        &self,
        _product_id: &str,
    ) -> Result<Vec<ProductAttribute>, ApiError> {
        self.check()?;
        Ok(self.attributes.clone())
    }

    async fn product_attribute_values(
        &self,
        _product_id: &str,
    ) -> Result<Vec<ProductAttributeValue>, ApiError> {
        self.check()?;
        Ok(self.attribute_values.clone())
    }

    async fn update_product_attributes(
        &self,
        product_id: &str,
        body: &UpdateProductAttributes,
    ) -> Result<(), ApiError> {
        self.check()?;
        self.attribute_updates
            .lock()
            .unwrap()
            .push((product_id.to_string(), body.clone()));
        Ok(())
    }

    async fn get_inventory_item(&self, id: &str) -> Result<InventoryItem, ApiError> {
        self.check()?;
        self.inventory_items
            .iter()
            .find(|i| i.id == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound("Inventory item".to_string()))
    }

    async fn update_inventory_item(
        &self,
        id: &str,
        body: &UpdateInventoryItemAttributes,
    ) -> Result<InventoryItem, ApiError> {
        self.check()?;
        self.inventory_updates
            .lock()
            .unwrap()
            .push((id.to_string(), body.clone()));
        Ok(InventoryItem {
            id: id.to_string(),
            height: body.height,
            width: body.width,
            length: body.length,
            weight: body.weight,
            mid_code: body.mid_code.clone(),
            hs_code: body.hs_code.clone(),
            origin_country: body.origin_country.clone(),
            material: body.material.clone(),
            ..Default::default()
        })
    }
}
