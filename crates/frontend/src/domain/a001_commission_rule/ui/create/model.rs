use contracts::domain::a001_commission_rule::{CommissionRuleCreated, CommissionRuleDraft};
use contracts::domain::catalog::CatalogOption;

use crate::shared::api::{get_json, post_json, ApiFailure};

/// Продавцы
pub async fn fetch_sellers() -> Result<Vec<CatalogOption>, ApiFailure> {
    get_json("/api/catalog/sellers").await
}

/// Типы товаров
pub async fn fetch_product_types() -> Result<Vec<CatalogOption>, ApiFailure> {
    get_json("/api/catalog/product-types").await
}

/// Категории товаров
pub async fn fetch_product_categories() -> Result<Vec<CatalogOption>, ApiFailure> {
    get_json("/api/catalog/product-categories").await
}

/// Валюты магазина (коды в нижнем регистре, как их отдаёт магазин)
pub async fn fetch_currencies() -> Result<Vec<String>, ApiFailure> {
    get_json("/api/store/currencies").await
}

/// Создать правило комиссии
pub async fn create_rule(draft: &CommissionRuleDraft) -> Result<CommissionRuleCreated, ApiFailure> {
    post_json("/api/commission/rules", draft).await
}
