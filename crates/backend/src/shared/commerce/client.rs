use async_trait::async_trait;
use contracts::domain::a001_commission_rule::RuleCreationPayload;
use contracts::domain::a002_product_attribute::{
    ProductAttribute, ProductAttributeListResponse, ProductAttributeValue, ProductResponse,
    UpdateProductAttributes,
};
use contracts::domain::a003_inventory_item::{
    InventoryItem, InventoryItemResponse, UpdateInventoryItemAttributes,
};
use contracts::domain::catalog::{
    ProductCategory, ProductCategoryListResponse, ProductType, ProductTypeListResponse, Seller,
    SellerListResponse, Store, StoreListResponse,
};
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::CommerceApi;
use crate::shared::config::CommerceApiConfig;
use crate::shared::error::ApiError;

/// Справочники грузятся целиком, как в выпадающих списках формы
const CATALOG_LIMIT: &str = "9999";

/// HTTP-клиент admin API интернет-магазина
pub struct CommerceApiClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl CommerceApiClient {
    pub fn new(config: &CommerceApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_token: config.api_token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header("Accept", "application/json");
        if self.api_token.is_empty() {
            builder
        } else {
            builder.bearer_auth(&self.api_token)
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {}", url);
        let response = self
            .authorized(self.client.get(&url).query(query))
            .send()
            .await?;
        read_json(path, response).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {}", url);
        let response = self
            .authorized(self.client.post(&url).json(body))
            .send()
            .await?;
        read_json(path, response).await
    }
}

async fn read_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let body = response.text().await.unwrap_or_default();
    tracing::error!("Commerce API {} failed with {}: {}", path, status, body);

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource_name(path).to_string()));
    }
    Err(ApiError::Upstream {
        status: status.as_u16(),
        message: upstream_message(&body),
    })
}

/// Текст ошибки из ответа внешнего API: только непустое поле `message` JSON-тела
pub fn upstream_message(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Имя сущности для ответа 404
fn resource_name(path: &str) -> &'static str {
    if path.starts_with("/admin/inventory-items") {
        "Inventory item"
    } else if path.starts_with("/admin/products") {
        "Product"
    } else if path.starts_with("/admin/commission") {
        "Commission rule"
    } else {
        "Record"
    }
}

fn segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[async_trait]
impl CommerceApi for CommerceApiClient {
    async fn list_sellers(&self) -> Result<Vec<Seller>, ApiError> {
        let resp: SellerListResponse = self
            .get_json(
                "/admin/sellers",
                &[("fields", "id,name"), ("limit", CATALOG_LIMIT)],
            )
            .await?;
        Ok(resp.sellers)
    }

    async fn list_product_types(&self) -> Result<Vec<ProductType>, ApiError> {
        let resp: ProductTypeListResponse = self
            .get_json(
                "/admin/product-types",
                &[("fields", "id,value"), ("limit", CATALOG_LIMIT)],
            )
            .await?;
        Ok(resp.product_types)
    }

    async fn list_product_categories(&self) -> Result<Vec<ProductCategory>, ApiError> {
        let resp: ProductCategoryListResponse = self
            .get_json(
                "/admin/product-categories",
                &[("fields", "id,name"), ("limit", CATALOG_LIMIT)],
            )
            .await?;
        Ok(resp.product_categories)
    }

    async fn list_stores(&self) -> Result<Vec<Store>, ApiError> {
        let resp: StoreListResponse = self.get_json("/admin/stores", &[]).await?;
        Ok(resp.stores)
    }

    async fn create_commission_rule(
        &self,
        payload: &RuleCreationPayload,
    ) -> Result<serde_json::Value, ApiError> {
        self.post_json("/admin/commission/rules", payload).await
    }

    async fn list_product_attributes(
        &self,
        product_id: &str,
    ) -> Result<Vec<ProductAttribute>, ApiError> {
        let path = format!("/admin/products/{}/attributes", segment(product_id));
        let resp: ProductAttributeListResponse = self.get_json(&path, &[]).await?;
        Ok(resp.attributes)
    }

    async fn product_attribute_values(
        &self,
        product_id: &str,
    ) -> Result<Vec<ProductAttributeValue>, ApiError> {
        let path = format!("/admin/products/{}", segment(product_id));
        let resp: ProductResponse = self
            .get_json(
                &path,
                &[("fields", "attribute_values.*,attribute_values.attribute.*")],
            )
            .await?;
        Ok(resp.product.attribute_values)
    }

    async fn update_product_attributes(
        &self,
        product_id: &str,
        body: &UpdateProductAttributes,
    ) -> Result<(), ApiError> {
        let path = format!("/admin/products/{}", segment(product_id));
        let _: serde_json::Value = self.post_json(&path, body).await?;
        Ok(())
    }

    async fn get_inventory_item(&self, id: &str) -> Result<InventoryItem, ApiError> {
        let path = format!("/admin/inventory-items/{}", segment(id));
        let resp: InventoryItemResponse = self.get_json(&path, &[]).await?;
        Ok(resp.inventory_item)
    }

    async fn update_inventory_item(
        &self,
        id: &str,
        body: &UpdateInventoryItemAttributes,
    ) -> Result<InventoryItem, ApiError> {
        let path = format!("/admin/inventory-items/{}", segment(id));
        let resp: InventoryItemResponse = self.post_json(&path, body).await?;
        Ok(resp.inventory_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_prefers_json_message() {
        let body = r#"{"type":"invalid_data","message":"Rule already exists"}"#;
        assert_eq!(upstream_message(body).as_deref(), Some("Rule already exists"));
    }

    #[test]
    fn test_upstream_message_ignores_bodies_without_message() {
        let html = "<html><head><title>502 Bad Gateway</title></head><body>nginx</body></html>";
        assert_eq!(upstream_message(html), None);
        assert_eq!(upstream_message(r#"{"type":"not_allowed","code":"x"}"#), None);
        assert_eq!(upstream_message(r#"{"message":"   "}"#), None);
        assert_eq!(upstream_message(r#"{"message":42}"#), None);
        assert_eq!(upstream_message(""), None);
    }

    #[test]
    fn test_not_found_names_the_resource_not_the_path() {
        assert_eq!(resource_name("/admin/inventory-items/iitem_1"), "Inventory item");
        assert_eq!(resource_name("/admin/products/prod_1/attributes"), "Product");
        assert_eq!(resource_name("/admin/commission/rules"), "Commission rule");
        assert_eq!(resource_name("/admin/stores"), "Record");
    }

    #[test]
    fn test_segment_escapes_path_characters() {
        assert_eq!(segment("prod_01"), "prod_01");
        assert_eq!(segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_client_joins_base_url_and_path() {
        let client = CommerceApiClient::new(&CommerceApiConfig {
            base_url: "http://localhost:9000".into(),
            api_token: String::new(),
            timeout_secs: 5,
        })
        .unwrap();
        assert_eq!(
            client.url("/admin/stores"),
            "http://localhost:9000/admin/stores"
        );
    }
}
