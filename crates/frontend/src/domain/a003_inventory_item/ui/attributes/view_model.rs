use super::model;
use crate::shared::notify::Notifier;
use contracts::domain::a003_inventory_item::{InventoryItem, InventoryItemAttributesForm};
use contracts::domain::common::ValidationErrors;
use leptos::prelude::*;

const UPDATED_MESSAGE: &str = "Inventory item updated successfully";

/// ViewModel for the inventory item attributes drawer
#[derive(Clone, Copy)]
pub struct InventoryItemAttributesVm {
    pub item_id: RwSignal<String>,

    // === Form fields ===
    pub height: RwSignal<String>,
    pub width: RwSignal<String>,
    pub length: RwSignal<String>,
    pub weight: RwSignal<String>,
    pub mid_code: RwSignal<String>,
    pub hs_code: RwSignal<String>,
    pub origin_country: RwSignal<String>,
    pub material: RwSignal<String>,

    // === UI state ===
    pub loaded: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub saving: RwSignal<bool>,
    pub errors: RwSignal<ValidationErrors>,
    notifier: Notifier,
}

impl InventoryItemAttributesVm {
    pub fn new(item_id: String, notifier: Notifier) -> Self {
        Self {
            item_id: RwSignal::new(item_id),
            height: RwSignal::new(String::new()),
            width: RwSignal::new(String::new()),
            length: RwSignal::new(String::new()),
            weight: RwSignal::new(String::new()),
            mid_code: RwSignal::new(String::new()),
            hs_code: RwSignal::new(String::new()),
            origin_country: RwSignal::new(String::new()),
            material: RwSignal::new(String::new()),
            loaded: RwSignal::new(false),
            load_error: RwSignal::new(None),
            saving: RwSignal::new(false),
            errors: RwSignal::new(ValidationErrors::new()),
            notifier,
        }
    }

    pub fn load(&self) {
        let this = *self;
        let id = this.item_id.get_untracked();
        this.loaded.set(false);
        this.load_error.set(None);

        leptos::task::spawn_local(async move {
            match model::fetch_by_id(&id).await {
                Ok(item) => {
                    this.from_item(&item);
                    this.loaded.set(true);
                }
                Err(e) => {
                    log::error!("Failed to load inventory item {}: {}", id, e);
                    this.load_error.set(Some(e.message));
                }
            }
        });
    }

    fn from_item(&self, item: &InventoryItem) {
        let form = InventoryItemAttributesForm::from(item);
        self.height.set(form.height);
        self.width.set(form.width);
        self.length.set(form.length);
        self.weight.set(form.weight);
        self.mid_code.set(form.mid_code);
        self.hs_code.set(form.hs_code);
        self.origin_country.set(form.origin_country);
        self.material.set(form.material);
    }

    pub fn to_form(&self) -> InventoryItemAttributesForm {
        InventoryItemAttributesForm {
            height: self.height.get_untracked(),
            width: self.width.get_untracked(),
            length: self.length.get_untracked(),
            weight: self.weight.get_untracked(),
            mid_code: self.mid_code.get_untracked(),
            hs_code: self.hs_code.get_untracked(),
            origin_country: self.origin_country.get_untracked(),
            material: self.material.get_untracked(),
        }
    }

    /// Проверить и сохранить; при успехе вызывается `on_saved`
    pub fn save(&self, on_saved: Callback<InventoryItem>) {
        if self.saving.get_untracked() {
            return;
        }

        let form = self.to_form();
        if let Err(errors) = form.to_update() {
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let this = *self;
        let id = this.item_id.get_untracked();
        this.saving.set(true);

        leptos::task::spawn_local(async move {
            match model::save_attributes(&id, &form).await {
                Ok(item) => {
                    this.saving.set(false);
                    this.notifier.success(UPDATED_MESSAGE);
                    on_saved.run(item);
                }
                Err(failure) => {
                    this.saving.set(false);
                    if failure.has_field_errors() {
                        this.errors
                            .set(ValidationErrors::from(failure.field_errors.clone()));
                    }
                    this.notifier.error(failure.message);
                }
            }
        });
    }
}
