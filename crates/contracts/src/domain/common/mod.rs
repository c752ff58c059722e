pub mod field_error;
pub mod price;

pub use field_error::{FieldError, ValidationErrors};
pub use price::{CurrencyAmounts, Price};
