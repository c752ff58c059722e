use super::create::CommissionRuleCreate;
use crate::shared::components::drawer_frame::DrawerFrame;
use crate::shared::icons::icon;
use contracts::domain::a001_commission_rule::CommissionRuleCreated;
use leptos::prelude::*;
use thaw::*;

/// Страница правил комиссии: действие "Create commission rule" открывает drawer
#[component]
pub fn CommissionRulesPage() -> impl IntoView {
    let drawer_open = RwSignal::new(false);
    let last_created = RwSignal::new(None::<String>);

    let on_created = Callback::new(move |created: CommissionRuleCreated| {
        log::info!("Commission rule created: {:?}", created.id);
        last_created.set(created.id);
        drawer_open.set(false);
    });
    let on_close = Callback::new(move |_| drawer_open.set(false));

    view! {
        <div class="page commission-rules-page">
            <div class="page__header">
                <h2>"Commission rules"</h2>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| drawer_open.set(true)
                >
                    {icon("plus")}
                    "Create commission rule"
                </Button>
            </div>

            {move || last_created.get().map(|id| view! {
                <div class="page__hint">"Last created rule: " <code>{id}</code></div>
            })}

            <Show when=move || drawer_open.get()>
                <DrawerFrame title="Create commission rule" on_close=on_close close_on_overlay=false>
                    <CommissionRuleCreate on_created=on_created on_cancel=on_close />
                </DrawerFrame>
            </Show>
        </div>
    }
}
