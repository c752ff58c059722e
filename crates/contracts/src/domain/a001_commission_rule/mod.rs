pub mod draft;
pub mod payload;
pub mod rate;
pub mod reference;

pub use draft::CommissionRuleDraft;
pub use payload::{build_payload, CommissionRuleCreated, RatePayload, RuleCreationPayload};
pub use rate::{validate_rate, RateKind};
pub use reference::{validate_reference_fields, ReferenceKind, RequiredFields};

/// Имена полей формы, к которым привязываются ошибки валидации
pub mod fields {
    pub const NAME: &str = "name";
    pub const SELLER: &str = "seller";
    pub const TYPE: &str = "type";
    pub const CATEGORY: &str = "category";
    pub const PERCENT_VALUE: &str = "percent_value";
    pub const FLAT_VALUES: &str = "flat_values";
    pub const MIN_VALUES: &str = "min_values";
    pub const MAX_VALUES: &str = "max_values";
}
