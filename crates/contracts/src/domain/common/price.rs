use serde::{Deserialize, Serialize};

/// Сумма в одной валюте, как её принимает внешний API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub currency_code: String,
    pub amount: f64,
}

impl Price {
    pub fn new(currency_code: impl Into<String>, amount: f64) -> Self {
        Self {
            currency_code: currency_code.into(),
            amount,
        }
    }
}

/// Суммы по валютам (currency_code -> amount).
///
/// Порядок валют сохраняется в порядке первого ввода, как их перечисляет магазин.
/// В JSON это обычный массив `[Price]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyAmounts(Vec<Price>);

impl CurrencyAmounts {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Установить сумму; существующая валюта сохраняет свою позицию
    pub fn set(&mut self, currency_code: &str, amount: f64) {
        match self.0.iter_mut().find(|p| p.currency_code == currency_code) {
            Some(existing) => existing.amount = amount,
            None => self.0.push(Price::new(currency_code, amount)),
        }
    }

    pub fn get(&self, currency_code: &str) -> Option<f64> {
        self.0
            .iter()
            .find(|p| p.currency_code == currency_code)
            .map(|p| p.amount)
    }

    pub fn remove(&mut self, currency_code: &str) {
        self.0.retain(|p| p.currency_code != currency_code);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn amounts(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().map(|p| p.amount)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Price> {
        self.0.iter()
    }

    pub fn to_price_set(&self) -> Vec<Price> {
        self.0.clone()
    }
}

impl<S: Into<String>> FromIterator<(S, f64)> for CurrencyAmounts {
    fn from_iter<I: IntoIterator<Item = (S, f64)>>(iter: I) -> Self {
        let mut amounts = CurrencyAmounts::new();
        for (code, amount) in iter {
            let code: String = code.into();
            amounts.set(&code, amount);
        }
        amounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_keeps_first_insertion_position() {
        let mut amounts = CurrencyAmounts::new();
        amounts.set("usd", 1.0);
        amounts.set("eur", 2.0);
        amounts.set("usd", 5.0);

        let codes: Vec<&str> = amounts.iter().map(|p| p.currency_code.as_str()).collect();
        assert_eq!(codes, vec!["usd", "eur"]);
        assert_eq!(amounts.get("usd"), Some(5.0));
        assert_eq!(amounts.len(), 2);
    }

    #[test]
    fn test_serializes_as_price_array() {
        let amounts: CurrencyAmounts = [("usd", 10.0), ("eur", 0.5)].into_iter().collect();
        let json = serde_json::to_value(&amounts).unwrap();
        assert_eq!(
            json,
            serde_json::json!([
                { "currency_code": "usd", "amount": 10.0 },
                { "currency_code": "eur", "amount": 0.5 }
            ])
        );
    }
}
