use super::section::ProductAttributesSection;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Страница товара (в этой админке только секция атрибутов)
#[component]
pub fn ProductPage(#[prop(into)] product_id: String) -> impl IntoView {
    view! {
        <div class="page product-page">
            <div class="page__header">
                {icon("products")}
                <h2>"Product " <code>{product_id.clone()}</code></h2>
            </div>
            <ProductAttributesSection product_id=product_id />
        </div>
    }
}
