use crate::domain::a001_commission_rule::ui::page::CommissionRulesPage;
use crate::domain::a002_product_attribute::ui::page::ProductPage;
use crate::domain::a003_inventory_item::ui::page::InventoryItemPage;
use crate::shared::notify::{NotificationHost, Notifier};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::params::ParamsMap;
use leptos_router::path;

#[component]
pub fn App() -> impl IntoView {
    // Уведомления доступны всем экранам через контекст
    provide_context(Notifier::new());

    view! {
        <Router>
            <main class="app">
                <NotificationHost />
                <Routes fallback=|| view! { <div class="page">"Page not found"</div> }>
                    <Route path=path!("/") view=CommissionRulesPage />
                    <Route path=path!("/commission") view=CommissionRulesPage />
                    <Route path=path!("/products/:id") view=ProductRoute />
                    <Route path=path!("/inventory/:id") view=InventoryItemRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// `:id` текущего маршрута; меняется при переходе между записями без размонтирования
fn route_id(params: Signal<ParamsMap>) -> Memo<String> {
    Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()))
}

#[component]
fn ProductRoute() -> impl IntoView {
    let id = route_id(use_params_map().into());
    move || view! { <ProductPage product_id=id.get() /> }
}

#[component]
fn InventoryItemRoute() -> impl IntoView {
    let id = route_id(use_params_map().into());
    move || view! { <InventoryItemPage item_id=id.get() /> }
}
