use axum::extract::State;
use axum::Json;
use contracts::domain::catalog::{supported_currencies, CatalogOption};

use crate::shared::app_state::AppState;
use crate::shared::error::ApiError;

/// Продавцы для выпадающего списка
pub async fn list_sellers(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogOption>>, ApiError> {
    let sellers = state.commerce.list_sellers().await?;
    Ok(Json(sellers.into_iter().map(CatalogOption::from).collect()))
}

/// Типы товаров
pub async fn list_product_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogOption>>, ApiError> {
    let types = state.commerce.list_product_types().await?;
    Ok(Json(types.into_iter().map(CatalogOption::from).collect()))
}

/// Категории товаров
pub async fn list_product_categories(
    State(state): State<AppState>,
) -> Result<Json<Vec<CatalogOption>>, ApiError> {
    let categories = state.commerce.list_product_categories().await?;
    Ok(Json(categories.into_iter().map(CatalogOption::from).collect()))
}

/// Валюты активного магазина
pub async fn list_currencies(State(state): State<AppState>) -> Result<Json<Vec<String>>, ApiError> {
    let stores = state.commerce.list_stores().await?;
    Ok(Json(supported_currencies(&stores)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::commerce::fake::FakeCommerceApi;
    use std::sync::Arc;

    fn state(api: FakeCommerceApi) -> AppState {
        AppState::new(Arc::new(api))
    }

    #[tokio::test]
    async fn test_catalog_options_are_normalized() {
        let Json(types) = list_product_types(State(state(FakeCommerceApi::default())))
            .await
            .unwrap();
        assert_eq!(
            types,
            vec![CatalogOption {
                id: "ptyp_1".into(),
                label: "Shoes".into()
            }]
        );

        let Json(sellers) = list_sellers(State(state(FakeCommerceApi::default())))
            .await
            .unwrap();
        assert_eq!(sellers[0].label, "Acme");
    }

    #[tokio::test]
    async fn test_currencies_come_from_first_store() {
        let Json(currencies) = list_currencies(State(state(FakeCommerceApi::default())))
            .await
            .unwrap();
        assert_eq!(currencies, vec!["eur", "usd"]);
    }

    #[tokio::test]
    async fn test_upstream_failure_is_propagated() {
        let err = list_product_categories(State(state(FakeCommerceApi::failing(503, "down"))))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Upstream { status: 503, .. }));
    }
}
