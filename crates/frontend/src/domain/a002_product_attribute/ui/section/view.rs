use super::view_model::{AttributeRow, ProductAttributesVm};
use crate::shared::components::drawer_frame::DrawerFrame;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use contracts::domain::a002_product_attribute::{AttributeUiComponent, ProductAttribute};
use leptos::prelude::*;
use thaw::*;

/// Секция "Additional attributes" на странице товара
#[component]
pub fn ProductAttributesSection(#[prop(into)] product_id: String) -> impl IntoView {
    let vm = ProductAttributesVm::new(product_id, use_notifier());
    vm.load();

    let rows = vm.rows();

    view! {
        <section class="details-section product-attributes">
            <div class="details-section__header">
                <h4 class="details-section__title">"Additional attributes"</h4>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.open_editor()
                    disabled=Signal::derive(move || vm.loading.get())
                >
                    {icon("edit")}
                    "Edit"
                </Button>
            </div>

            {move || vm.error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || !vm.loading.get()
                fallback=|| view! { <Spinner /> }
            >
                <Show
                    when=move || !rows.get().is_empty()
                    fallback=|| view! { <div class="details-section__empty">"No attributes"</div> }
                >
                    <table class="table">
                        <tbody>
                            <For
                                each=move || rows.get()
                                key=|row| row.attribute_id.clone()
                                children=|row: AttributeRow| view! {
                                    <tr>
                                        <td class="table__cell table__cell--label">{row.name}</td>
                                        <td class="table__cell">
                                            {if row.value.is_empty() { "-".to_string() } else { row.value }}
                                        </td>
                                    </tr>
                                }
                            />
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || vm.editor_open.get()>
                <DrawerFrame
                    title="Edit attributes"
                    on_close=Callback::new(move |_| vm.close_editor())
                >
                    <AttributesEditor vm=vm />
                </DrawerFrame>
            </Show>
        </section>
    }
}

#[component]
fn AttributesEditor(vm: ProductAttributesVm) -> impl IntoView {
    let attributes = vm.data.with_untracked(|d| d.attributes.clone());

    view! {
        <div class="details-form">
            {attributes
                .into_iter()
                .map(|attr| view! { <AttributeInput vm=vm attribute=attr /> })
                .collect_view()}

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.save()
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {icon("save")}
                    "Save"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.close_editor()
                >
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

/// Поле ввода одного атрибута; вид поля задаёт `ui_component`
#[component]
fn AttributeInput(vm: ProductAttributesVm, attribute: ProductAttribute) -> impl IntoView {
    let input_id = format!("attr-{}", attribute.handle);
    let attribute_id = attribute.id.clone();
    let current = move || {
        let id = attribute_id.clone();
        vm.form.with(|f| f.get(&id))
    };
    let setter = {
        let id = attribute.id.clone();
        move |value: String| vm.set_value(&id, value)
    };

    let control = match attribute.ui_component {
        AttributeUiComponent::Select => {
            let options = attribute.possible_values.clone();
            view! {
                <select
                    id=input_id.clone()
                    class="form__input"
                    prop:value=current
                    on:change=move |ev| setter(event_target_value(&ev))
                >
                    <option value="">"-- Select --"</option>
                    {options
                        .into_iter()
                        .map(|pv| view! { <option value=pv.id>{pv.value}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        AttributeUiComponent::Toggle => view! {
            <input
                id=input_id.clone()
                type="checkbox"
                prop:checked=move || current() == "true"
                on:change=move |ev| setter(event_target_checked(&ev).to_string())
            />
        }
        .into_any(),
        AttributeUiComponent::TextArea => view! {
            <textarea
                id=input_id.clone()
                class="form__input"
                rows="3"
                prop:value=current
                on:input=move |ev| setter(event_target_value(&ev))
            />
        }
        .into_any(),
        AttributeUiComponent::ColorPicker => view! {
            <input
                id=input_id.clone()
                type="color"
                prop:value=current
                on:input=move |ev| setter(event_target_value(&ev))
            />
        }
        .into_any(),
        AttributeUiComponent::Unit => view! {
            <input
                id=input_id.clone()
                class="form__input"
                type="number"
                step="any"
                prop:value=current
                on:input=move |ev| setter(event_target_value(&ev))
            />
        }
        .into_any(),
        AttributeUiComponent::Multivalue | AttributeUiComponent::Text => view! {
            <input
                id=input_id.clone()
                class="form__input"
                type="text"
                prop:value=current
                on:input=move |ev| setter(event_target_value(&ev))
            />
        }
        .into_any(),
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=input_id title=attribute.description.clone().unwrap_or_default()>
                {attribute.name.clone()}
            </label>
            {control}
        </div>
    }
}
