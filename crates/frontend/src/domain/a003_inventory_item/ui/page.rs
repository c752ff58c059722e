use super::attributes::InventoryItemAttributesDrawer;
use crate::shared::api::get_json;
use crate::shared::api_utils::path_segment;
use crate::shared::icons::icon;
use contracts::domain::a003_inventory_item::InventoryItem;
use leptos::prelude::*;
use thaw::*;

fn show(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "-".to_string())
}

fn show_number(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

/// Карточка складской позиции с атрибутами и кнопкой "Edit attributes"
#[component]
pub fn InventoryItemPage(#[prop(into)] item_id: String) -> impl IntoView {
    let item = RwSignal::new(None::<InventoryItem>);
    let error = RwSignal::new(None::<String>);
    let drawer_open = RwSignal::new(false);

    {
        let id = item_id.clone();
        leptos::task::spawn_local(async move {
            match get_json::<InventoryItem>(&format!("/api/inventory-items/{}", path_segment(&id)))
                .await
            {
                Ok(loaded) => item.set(Some(loaded)),
                Err(e) => error.set(Some(e.message)),
            }
        });
    }

    let on_saved = Callback::new(move |updated: InventoryItem| {
        item.set(Some(updated));
        drawer_open.set(false);
    });
    let on_close = Callback::new(move |_| drawer_open.set(false));

    view! {
        <div class="page inventory-item-page">
            <div class="page__header">
                <h2>
                    {move || item.get()
                        .and_then(|i| i.title.or(i.sku))
                        .unwrap_or_else(|| "Inventory item".to_string())}
                </h2>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| drawer_open.set(true)
                    disabled=Signal::derive(move || item.get().is_none())
                >
                    {icon("edit")}
                    "Edit attributes"
                </Button>
            </div>

            {move || error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            {move || item.get().map(|i| view! {
                <table class="table">
                    <tbody>
                        <tr><td class="table__cell--label">"Height"</td><td>{show_number(i.height)}</td></tr>
                        <tr><td class="table__cell--label">"Width"</td><td>{show_number(i.width)}</td></tr>
                        <tr><td class="table__cell--label">"Length"</td><td>{show_number(i.length)}</td></tr>
                        <tr><td class="table__cell--label">"Weight"</td><td>{show_number(i.weight)}</td></tr>
                        <tr><td class="table__cell--label">"MID code"</td><td>{show(&i.mid_code)}</td></tr>
                        <tr><td class="table__cell--label">"HS code"</td><td>{show(&i.hs_code)}</td></tr>
                        <tr><td class="table__cell--label">"Country of origin"</td><td>{show(&i.origin_country)}</td></tr>
                        <tr><td class="table__cell--label">"Material"</td><td>{show(&i.material)}</td></tr>
                    </tbody>
                </table>
            })}

            <Show when=move || drawer_open.get()>
                <InventoryItemAttributesDrawer
                    item_id=item_id.clone()
                    on_saved=on_saved
                    on_close=on_close
                />
            </Show>
        </div>
    }
}
