use super::view_model::InventoryItemAttributesVm;
use crate::shared::components::drawer_frame::DrawerFrame;
use crate::shared::components::field_error::FieldErrorText;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use contracts::domain::a003_inventory_item::InventoryItem;
use leptos::prelude::*;
use thaw::*;

/// Drawer "Edit attributes" для складской позиции
#[component]
pub fn InventoryItemAttributesDrawer(
    #[prop(into)] item_id: String,
    on_saved: Callback<InventoryItem>,
    on_close: Callback<()>,
) -> impl IntoView {
    let vm = InventoryItemAttributesVm::new(item_id, use_notifier());
    vm.load();

    view! {
        <DrawerFrame title="Edit attributes" on_close=on_close>
            {move || vm.load_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || vm.loaded.get()
                fallback=move || view! {
                    <Show when=move || vm.load_error.get().is_none()>
                        <Spinner />
                    </Show>
                }
            >
                <div class="details-form">
                    <div class="details-grid--2col">
                        <NumberField label="Height" value=vm.height vm=vm field="height" />
                        <NumberField label="Width" value=vm.width vm=vm field="width" />
                        <NumberField label="Length" value=vm.length vm=vm field="length" />
                        <NumberField label="Weight" value=vm.weight vm=vm field="weight" />
                    </div>

                    <div class="form__group">
                        <Label>"MID code"</Label>
                        <Input value=vm.mid_code />
                    </div>
                    <div class="form__group">
                        <Label>"HS code"</Label>
                        <Input value=vm.hs_code />
                    </div>
                    <div class="form__group">
                        <Label>"Country of origin"</Label>
                        <Input value=vm.origin_country />
                    </div>
                    <div class="form__group">
                        <Label>"Material"</Label>
                        <Input value=vm.material />
                    </div>

                    <div class="details-actions">
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| vm.save(on_saved)
                            disabled=Signal::derive(move || vm.saving.get())
                        >
                            {icon("save")}
                            "Save"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| on_close.run(())
                        >
                            {icon("cancel")}
                            "Cancel"
                        </Button>
                    </div>
                </div>
            </Show>
        </DrawerFrame>
    }
}

#[component]
fn NumberField(
    label: &'static str,
    value: RwSignal<String>,
    vm: InventoryItemAttributesVm,
    field: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Input input_type=InputType::Number value=value />
            <FieldErrorText errors=vm.errors field=field />
        </div>
    }
}
