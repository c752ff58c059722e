use contracts::domain::common::CurrencyAmounts;
use leptos::prelude::*;

/// Разбор суммы из поля ввода.
///
/// Пустая строка или мусор дают `None` (сумма для валюты убирается);
/// запятая принимается как десятичный разделитель. Отрицательные числа
/// пропускаются: их отклоняет проверка черновика.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Суммы по валютам магазина: одно поле на валюту
#[component]
pub fn CurrencyAmountsInput(
    #[prop(into)] currencies: Signal<Vec<String>>,
    values: RwSignal<CurrencyAmounts>,
    /// Prefix for input ids, keeps them unique when several groups are on screen.
    id_prefix: &'static str,
) -> impl IntoView {
    view! {
        <div class="currency-amounts">
            <Show
                when=move || !currencies.get().is_empty()
                fallback=|| view! { <div class="form__hint">"No currencies configured for the store"</div> }
            >
                <For
                    each=move || currencies.get()
                    key=|code| code.clone()
                    children=move |code: String| {
                        let input_id = format!("{}-{}", id_prefix, code);
                        // Начальное значение без подписки: иначе ввод "1." затирался бы
                        let initial = values
                            .with_untracked(|v| v.get(&code))
                            .map(|v| v.to_string())
                            .unwrap_or_default();
                        let code_for_input = code.clone();
                        view! {
                            <div class="currency-amounts__row">
                                <label class="currency-amounts__code" for=input_id.clone()>
                                    {code.to_uppercase()}
                                </label>
                                <input
                                    id=input_id
                                    class="form__input"
                                    type="number"
                                    min="0"
                                    step="any"
                                    value=initial
                                    on:input=move |ev| {
                                        let raw = event_target_value(&ev);
                                        values.update(|v| match parse_amount(&raw) {
                                            Some(amount) => v.set(&code_for_input, amount),
                                            None => v.remove(&code_for_input),
                                        });
                                    }
                                />
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("12.5"), Some(12.5));
        assert_eq!(parse_amount(" 3,75 "), Some(3.75));
        assert_eq!(parse_amount("0"), Some(0.0));
        assert_eq!(parse_amount("-2"), Some(-2.0));
    }

    #[test]
    fn test_parse_amount_rejects_blank_and_garbage() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("   "), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }
}
