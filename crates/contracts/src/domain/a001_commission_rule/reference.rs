use serde::{Deserialize, Serialize};

use super::fields;
use crate::domain::common::FieldError;

/// К чему привязано правило комиссии
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ReferenceKind {
    #[default]
    #[serde(rename = "seller")]
    Seller,
    #[serde(rename = "product_type")]
    ProductType,
    #[serde(rename = "product_category")]
    ProductCategory,
    #[serde(rename = "seller+product_type")]
    SellerProductType,
    #[serde(rename = "seller+product_category")]
    SellerProductCategory,
}

/// Какие идентификаторы обязательны (и видимы в форме) для вида привязки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RequiredFields {
    pub needs_seller: bool,
    pub needs_type: bool,
    pub needs_category: bool,
}

impl ReferenceKind {
    /// Код, который ожидает внешний API
    pub fn code(&self) -> &'static str {
        match self {
            ReferenceKind::Seller => "seller",
            ReferenceKind::ProductType => "product_type",
            ReferenceKind::ProductCategory => "product_category",
            ReferenceKind::SellerProductType => "seller+product_type",
            ReferenceKind::SellerProductCategory => "seller+product_category",
        }
    }

    /// Человекочитаемое название для выпадающего списка
    pub fn display_name(&self) -> &'static str {
        match self {
            ReferenceKind::Seller => "Seller",
            ReferenceKind::ProductType => "Product type",
            ReferenceKind::ProductCategory => "Product category",
            ReferenceKind::SellerProductType => "Seller + Product type",
            ReferenceKind::SellerProductCategory => "Seller + Product category",
        }
    }

    pub fn all() -> Vec<ReferenceKind> {
        vec![
            ReferenceKind::Seller,
            ReferenceKind::ProductType,
            ReferenceKind::ProductCategory,
            ReferenceKind::SellerProductType,
            ReferenceKind::SellerProductCategory,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "seller" => Some(ReferenceKind::Seller),
            "product_type" => Some(ReferenceKind::ProductType),
            "product_category" => Some(ReferenceKind::ProductCategory),
            "seller+product_type" => Some(ReferenceKind::SellerProductType),
            "seller+product_category" => Some(ReferenceKind::SellerProductCategory),
            _ => None,
        }
    }

    pub fn required_fields(&self) -> RequiredFields {
        let (needs_seller, needs_type, needs_category) = match self {
            ReferenceKind::Seller => (true, false, false),
            ReferenceKind::ProductType => (false, true, false),
            ReferenceKind::ProductCategory => (false, false, true),
            ReferenceKind::SellerProductType => (true, true, false),
            ReferenceKind::SellerProductCategory => (true, false, true),
        };
        RequiredFields {
            needs_seller,
            needs_type,
            needs_category,
        }
    }
}

/// Проверка обязательных идентификаторов для выбранного вида привязки
pub fn validate_reference_fields(
    reference: ReferenceKind,
    seller_id: &str,
    type_id: &str,
    category_id: &str,
) -> Vec<FieldError> {
    let required = reference.required_fields();
    let mut errors = Vec::new();

    if required.needs_seller && seller_id.trim().is_empty() {
        errors.push(FieldError::new(
            fields::SELLER,
            "Seller is required for this rule type",
        ));
    }
    if required.needs_type && type_id.trim().is_empty() {
        errors.push(FieldError::new(
            fields::TYPE,
            "Product type is required for this rule type",
        ));
    }
    if required.needs_category && category_id.trim().is_empty() {
        errors.push(FieldError::new(
            fields::CATEGORY,
            "Product category is required for this rule type",
        ));
    }

    errors
}
