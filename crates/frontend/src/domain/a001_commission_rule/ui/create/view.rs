use super::view_model::CommissionRuleCreateVm;
use crate::shared::components::currency_amounts::CurrencyAmountsInput;
use crate::shared::components::field_error::FieldErrorText;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifier;
use contracts::domain::a001_commission_rule::{fields, CommissionRuleCreated, RateKind, ReferenceKind};
use contracts::domain::catalog::CatalogOption;
use contracts::domain::common::ValidationErrors;
use leptos::prelude::*;
use thaw::*;

/// Форма создания правила комиссии (содержимое drawer)
#[component]
pub fn CommissionRuleCreate(
    on_created: Callback<CommissionRuleCreated>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let vm = CommissionRuleCreateVm::new(use_notifier());
    vm.init();

    let required = vm.required_fields();
    let is_percentage = vm.is_percentage();
    let is_submitting = vm.is_submitting();
    let currencies = Signal::derive(move || vm.currencies.get());

    view! {
        <div class="details-form commission-rule-form">
            {move || vm.catalog_error.get().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Warning>{e}</MessageBar>
            })}

            <div class="form__group">
                <Label>"Name *"</Label>
                <Input value=vm.name placeholder="Rule name" />
                <FieldErrorText errors=vm.errors field=fields::NAME />
            </div>

            <div class="form__group">
                <Label>"Reference"</Label>
                <Select value=vm.reference_code>
                    {ReferenceKind::all()
                        .into_iter()
                        .map(|kind| view! { <option value=kind.code()>{kind.display_name()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <Show when=move || required.get().needs_seller>
                <CatalogSelect
                    label="Seller *"
                    options=vm.sellers
                    value=vm.seller_id
                    errors=vm.errors
                    field=fields::SELLER
                />
            </Show>
            <Show when=move || required.get().needs_type>
                <CatalogSelect
                    label="Product type *"
                    options=vm.product_types
                    value=vm.type_id
                    errors=vm.errors
                    field=fields::TYPE
                />
            </Show>
            <Show when=move || required.get().needs_category>
                <CatalogSelect
                    label="Product category *"
                    options=vm.product_categories
                    value=vm.category_id
                    errors=vm.errors
                    field=fields::CATEGORY
                />
            </Show>

            <div class="form__group">
                <Switch checked=vm.include_tax label="Include tax" />
            </div>

            <div class="form__group">
                <Label>"Rate type"</Label>
                <Select value=vm.rate_code>
                    {RateKind::all()
                        .into_iter()
                        .map(|kind| view! { <option value=kind.code()>{kind.display_name()}</option> })
                        .collect_view()}
                </Select>
            </div>

            <Show
                when=move || is_percentage.get()
                fallback=move || view! {
                    <div class="form__group">
                        <Label>"Flat fee *"</Label>
                        <CurrencyAmountsInput currencies=currencies values=vm.flat_values id_prefix="flat" />
                        <FieldErrorText errors=vm.errors field=fields::FLAT_VALUES />
                    </div>
                }
            >
                <div class="form__group">
                    <Label>"Percentage *"</Label>
                    <Input
                        input_type=InputType::Number
                        value=vm.percent_value
                        placeholder="0 - 100"
                    />
                    <FieldErrorText errors=vm.errors field=fields::PERCENT_VALUE />
                </div>

                <div class="form__group">
                    <Switch checked=vm.min_enabled label="Minimum commission" />
                    <Show when=move || vm.min_enabled.get()>
                        <CurrencyAmountsInput currencies=currencies values=vm.min_values id_prefix="min" />
                    </Show>
                    <FieldErrorText errors=vm.errors field=fields::MIN_VALUES />
                </div>

                <div class="form__group">
                    <Switch checked=vm.max_enabled label="Maximum commission" />
                    <Show when=move || vm.max_enabled.get()>
                        <CurrencyAmountsInput currencies=currencies values=vm.max_values id_prefix="max" />
                    </Show>
                    <FieldErrorText errors=vm.errors field=fields::MAX_VALUES />
                </div>
            </Show>

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| vm.submit(on_created)
                    disabled=is_submitting
                >
                    {move || if is_submitting.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                    } else {
                        icon("save")
                    }}
                    "Create"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| on_cancel.run(())
                    disabled=is_submitting
                >
                    {icon("cancel")}
                    "Cancel"
                </Button>
            </div>
        </div>
    }
}

/// Выбор записи справочника с пустым вариантом по умолчанию
#[component]
fn CatalogSelect(
    label: &'static str,
    options: RwSignal<Vec<CatalogOption>>,
    value: RwSignal<String>,
    errors: RwSignal<ValidationErrors>,
    field: &'static str,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <Label>{label}</Label>
            <Select value=value>
                <option value="">"-- Select --"</option>
                <For
                    each=move || options.get()
                    key=|o| o.id.clone()
                    children=move |o: CatalogOption| {
                        view! { <option value=o.id>{o.label}</option> }
                    }
                />
            </Select>
            <FieldErrorText errors=errors field=field />
        </div>
    }
}
