use serde::{Deserialize, Serialize};

// ============================================================================
// Справочники внешнего API (только чтение)
// ============================================================================

/// Элемент выпадающего списка: id + отображаемое имя
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogOption {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seller {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductType {
    pub id: String,
    #[serde(default)]
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreCurrency {
    pub currency_code: String,
    #[serde(default)]
    pub is_default: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: String,
    #[serde(default)]
    pub supported_currencies: Vec<StoreCurrency>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SellerListResponse {
    pub sellers: Vec<Seller>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductTypeListResponse {
    pub product_types: Vec<ProductType>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategoryListResponse {
    pub product_categories: Vec<ProductCategory>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreListResponse {
    pub stores: Vec<Store>,
}

impl From<Seller> for CatalogOption {
    fn from(s: Seller) -> Self {
        Self {
            id: s.id,
            label: s.name,
        }
    }
}

impl From<ProductType> for CatalogOption {
    fn from(t: ProductType) -> Self {
        Self {
            id: t.id,
            label: t.value,
        }
    }
}

impl From<ProductCategory> for CatalogOption {
    fn from(c: ProductCategory) -> Self {
        Self {
            id: c.id,
            label: c.name,
        }
    }
}

/// Валюты активного магазина (первого в списке), в порядке магазина
pub fn supported_currencies(stores: &[Store]) -> Vec<String> {
    stores
        .first()
        .map(|store| {
            store
                .supported_currencies
                .iter()
                .map(|c| c.currency_code.clone())
                .collect()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_currencies_uses_first_store() {
        let json = serde_json::json!({
            "stores": [
                {
                    "id": "store_1",
                    "supported_currencies": [
                        { "currency_code": "eur", "is_default": true },
                        { "currency_code": "usd" }
                    ]
                },
                { "id": "store_2", "supported_currencies": [{ "currency_code": "gbp" }] }
            ]
        });
        let resp: StoreListResponse = serde_json::from_value(json).unwrap();
        assert_eq!(supported_currencies(&resp.stores), vec!["eur", "usd"]);
    }

    #[test]
    fn test_no_store_means_no_currencies() {
        assert!(supported_currencies(&[]).is_empty());
    }

    #[test]
    fn test_product_type_label_comes_from_value() {
        let option: CatalogOption = ProductType {
            id: "ptyp_1".into(),
            value: "Shoes".into(),
        }
        .into();
        assert_eq!(option.label, "Shoes");
    }
}
