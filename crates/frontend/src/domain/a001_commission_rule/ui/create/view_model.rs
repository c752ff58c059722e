//! ViewModel for the commission rule creation form
//!
//! Form fields are individual RwSignals for thaw two-way binding. The draft is
//! assembled from them on submit and checked by the same rules the backend runs.

use super::model;
use crate::shared::api::ApiFailure;
use crate::shared::components::currency_amounts::parse_amount;
use crate::shared::notify::Notifier;
use contracts::domain::a001_commission_rule::{
    CommissionRuleCreated, CommissionRuleDraft, RateKind, ReferenceKind, RequiredFields,
};
use contracts::domain::catalog::CatalogOption;
use contracts::domain::common::{CurrencyAmounts, ValidationErrors};
use leptos::prelude::*;

const FAILED_MESSAGE: &str = "Failed to create commission rule";

/// Состояние отправки формы
///
/// `Editing -> Submitting -> Succeeded | Failed`; из `Failed` форма
/// возвращается в `Editing` при следующей правке.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FormPhase {
    #[default]
    Editing,
    Submitting,
    Succeeded,
    Failed(String),
}

impl FormPhase {
    pub fn is_submitting(&self) -> bool {
        matches!(self, FormPhase::Submitting)
    }

    /// Начать отправку. `false`, если отправка уже идёт или завершилась успешно.
    pub fn begin_submit(&mut self) -> bool {
        match self {
            FormPhase::Editing | FormPhase::Failed(_) => {
                *self = FormPhase::Submitting;
                true
            }
            FormPhase::Submitting | FormPhase::Succeeded => false,
        }
    }

    pub fn finish(&mut self, result: Result<(), String>) {
        if !self.is_submitting() {
            return;
        }
        *self = match result {
            Ok(()) => FormPhase::Succeeded,
            Err(message) => FormPhase::Failed(message),
        };
    }

    pub fn on_edit(&mut self) {
        if matches!(self, FormPhase::Failed(_)) {
            *self = FormPhase::Editing;
        }
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            FormPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Текст уведомления об ошибке создания
pub fn failure_message(failure: &ApiFailure) -> String {
    if failure.message.trim().is_empty() {
        FAILED_MESSAGE.to_string()
    } else {
        failure.message.clone()
    }
}

#[derive(Clone, Copy)]
pub struct CommissionRuleCreateVm {
    // === Form fields ===
    pub name: RwSignal<String>,
    pub reference_code: RwSignal<String>,
    pub seller_id: RwSignal<String>,
    pub type_id: RwSignal<String>,
    pub category_id: RwSignal<String>,
    pub include_tax: RwSignal<bool>,
    pub rate_code: RwSignal<String>,
    pub percent_value: RwSignal<String>,
    pub flat_values: RwSignal<CurrencyAmounts>,
    pub min_enabled: RwSignal<bool>,
    pub min_values: RwSignal<CurrencyAmounts>,
    pub max_enabled: RwSignal<bool>,
    pub max_values: RwSignal<CurrencyAmounts>,

    // === Reference data ===
    pub sellers: RwSignal<Vec<CatalogOption>>,
    pub product_types: RwSignal<Vec<CatalogOption>>,
    pub product_categories: RwSignal<Vec<CatalogOption>>,
    pub currencies: RwSignal<Vec<String>>,
    pub catalog_error: RwSignal<Option<String>>,

    // === UI state ===
    pub errors: RwSignal<ValidationErrors>,
    pub phase: RwSignal<FormPhase>,
    notifier: Notifier,
}

impl CommissionRuleCreateVm {
    pub fn new(notifier: Notifier) -> Self {
        Self {
            name: RwSignal::new(String::new()),
            reference_code: RwSignal::new(ReferenceKind::default().code().to_string()),
            seller_id: RwSignal::new(String::new()),
            type_id: RwSignal::new(String::new()),
            category_id: RwSignal::new(String::new()),
            include_tax: RwSignal::new(false),
            rate_code: RwSignal::new(RateKind::default().code().to_string()),
            percent_value: RwSignal::new(String::new()),
            flat_values: RwSignal::new(CurrencyAmounts::new()),
            min_enabled: RwSignal::new(false),
            min_values: RwSignal::new(CurrencyAmounts::new()),
            max_enabled: RwSignal::new(false),
            max_values: RwSignal::new(CurrencyAmounts::new()),

            sellers: RwSignal::new(Vec::new()),
            product_types: RwSignal::new(Vec::new()),
            product_categories: RwSignal::new(Vec::new()),
            currencies: RwSignal::new(Vec::new()),
            catalog_error: RwSignal::new(None),

            errors: RwSignal::new(ValidationErrors::new()),
            phase: RwSignal::new(FormPhase::Editing),
            notifier,
        }
    }

    // === Derived signals ===

    pub fn reference(&self) -> Signal<ReferenceKind> {
        let code = self.reference_code;
        Signal::derive(move || ReferenceKind::from_code(&code.get()).unwrap_or_default())
    }

    /// Какие селекторы идентификаторов показывать
    pub fn required_fields(&self) -> Signal<RequiredFields> {
        let reference = self.reference();
        Signal::derive(move || reference.get().required_fields())
    }

    pub fn is_percentage(&self) -> Signal<bool> {
        let code = self.rate_code;
        Signal::derive(move || RateKind::from_code(&code.get()) == Some(RateKind::Percentage))
    }

    pub fn is_submitting(&self) -> Signal<bool> {
        let phase = self.phase;
        Signal::derive(move || phase.with(FormPhase::is_submitting))
    }

    // === Lifecycle ===

    /// Загрузка справочников и реакции формы (вызывается при монтировании)
    pub fn init(&self) {
        self.load_catalogs();
        self.watch_reference();
        self.watch_edits();
    }

    fn load_catalogs(&self) {
        load_into(self.sellers, self.catalog_error, model::fetch_sellers());
        load_into(self.product_types, self.catalog_error, model::fetch_product_types());
        load_into(
            self.product_categories,
            self.catalog_error,
            model::fetch_product_categories(),
        );
        load_into(self.currencies, self.catalog_error, model::fetch_currencies());
    }

    /// Смена вида привязки очищает ненужные идентификаторы
    fn watch_reference(&self) {
        let required = self.required_fields();
        let (seller_id, type_id, category_id) = (self.seller_id, self.type_id, self.category_id);
        Effect::new(move |_| {
            let req = required.get();
            for (needed, signal) in [
                (req.needs_seller, seller_id),
                (req.needs_type, type_id),
                (req.needs_category, category_id),
            ] {
                if !needed && !signal.get_untracked().is_empty() {
                    signal.set(String::new());
                }
            }
        });
    }

    /// Любая правка после неудачной отправки возвращает форму в Editing
    fn watch_edits(&self) {
        let this = *self;
        Effect::new(move |_| {
            this.name.track();
            this.reference_code.track();
            this.seller_id.track();
            this.type_id.track();
            this.category_id.track();
            this.include_tax.track();
            this.rate_code.track();
            this.percent_value.track();
            this.flat_values.track();
            this.min_enabled.track();
            this.min_values.track();
            this.max_enabled.track();
            this.max_values.track();
            if this.phase.with_untracked(|p| p.failure().is_some()) {
                this.phase.update(FormPhase::on_edit);
            }
        });
    }

    // === Commands ===

    pub fn to_draft(&self) -> CommissionRuleDraft {
        let mut draft = CommissionRuleDraft {
            name: self.name.get_untracked(),
            seller_id: self.seller_id.get_untracked(),
            type_id: self.type_id.get_untracked(),
            category_id: self.category_id.get_untracked(),
            include_tax: self.include_tax.get_untracked(),
            rate_kind: RateKind::from_code(&self.rate_code.get_untracked()).unwrap_or_default(),
            percent_value: parse_amount(&self.percent_value.get_untracked()),
            flat_values: self.flat_values.get_untracked(),
            min_enabled: self.min_enabled.get_untracked(),
            min_values: self.min_values.get_untracked(),
            max_enabled: self.max_enabled.get_untracked(),
            max_values: self.max_values.get_untracked(),
            ..Default::default()
        };
        draft.set_reference(
            ReferenceKind::from_code(&self.reference_code.get_untracked()).unwrap_or_default(),
        );
        draft
    }

    /// Проверка и отправка. Пока идёт отправка, повторный вызов игнорируется.
    pub fn submit(&self, on_created: Callback<CommissionRuleCreated>) {
        if self.phase.with_untracked(FormPhase::is_submitting) {
            return;
        }

        let draft = self.to_draft();
        if let Err(errors) = draft.validate() {
            log::debug!("Commission rule form invalid: {}", errors);
            self.errors.set(errors);
            return;
        }
        self.errors.set(ValidationErrors::new());

        let mut started = false;
        self.phase.update(|p| started = p.begin_submit());
        if !started {
            return;
        }

        let this = *self;
        leptos::task::spawn_local(async move {
            match model::create_rule(&draft).await {
                Ok(created) => {
                    this.phase.update(|p| p.finish(Ok(())));
                    this.notifier.success(created.message.clone());
                    on_created.run(created);
                }
                Err(failure) => {
                    if failure.has_field_errors() {
                        this.errors
                            .set(ValidationErrors::from(failure.field_errors.clone()));
                    }
                    let message = failure_message(&failure);
                    this.notifier.error(message.clone());
                    this.phase.update(|p| p.finish(Err(message)));
                }
            }
        });
    }
}

/// Загрузка одного справочника; ошибка копится в `catalog_error`
fn load_into<T, F>(target: RwSignal<Vec<T>>, catalog_error: RwSignal<Option<String>>, fetch: F)
where
    T: Send + Sync + 'static,
    F: std::future::Future<Output = Result<Vec<T>, ApiFailure>> + 'static,
{
    leptos::task::spawn_local(async move {
        match fetch.await {
            Ok(list) => target.set(list),
            Err(e) => {
                log::error!("Failed to load reference data: {}", e);
                catalog_error.update(|current| {
                    let text = match current.take() {
                        Some(prev) => format!("{}; {}", prev, e.message),
                        None => format!("Failed to load reference data: {}", e.message),
                    };
                    *current = Some(text);
                });
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_flow_success() {
        let mut phase = FormPhase::default();
        assert!(phase.begin_submit());
        assert!(phase.is_submitting());
        phase.finish(Ok(()));
        assert_eq!(phase, FormPhase::Succeeded);
    }

    #[test]
    fn test_second_submit_is_ignored_while_submitting() {
        let mut phase = FormPhase::default();
        assert!(phase.begin_submit());
        assert!(!phase.begin_submit());
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_failure_returns_to_editing_on_edit() {
        let mut phase = FormPhase::default();
        phase.begin_submit();
        phase.finish(Err("Duplicate rule".into()));
        assert_eq!(phase.failure(), Some("Duplicate rule"));

        phase.on_edit();
        assert_eq!(phase, FormPhase::Editing);
    }

    #[test]
    fn test_failed_form_can_be_resubmitted() {
        let mut phase = FormPhase::Failed("boom".into());
        assert!(phase.begin_submit());
    }

    #[test]
    fn test_on_edit_does_not_touch_other_phases() {
        let mut phase = FormPhase::Submitting;
        phase.on_edit();
        assert!(phase.is_submitting());
    }

    #[test]
    fn test_finish_outside_submitting_is_ignored() {
        let mut phase = FormPhase::Editing;
        phase.finish(Err("late".into()));
        assert_eq!(phase, FormPhase::Editing);
    }

    #[test]
    fn test_failure_message_fallback() {
        assert_eq!(failure_message(&ApiFailure::new("")), FAILED_MESSAGE);
        assert_eq!(
            failure_message(&ApiFailure::new("Rule already exists")),
            "Rule already exists"
        );
    }
}
