use contracts::domain::common::ValidationErrors;
use leptos::prelude::*;

/// Сообщение об ошибке под полем формы (если для поля есть ошибка)
#[component]
pub fn FieldErrorText(errors: RwSignal<ValidationErrors>, field: &'static str) -> impl IntoView {
    move || {
        errors
            .with(|e| e.message_for(field).map(str::to_string))
            .map(|message| view! { <div class="form__error">{message}</div> })
    }
}
