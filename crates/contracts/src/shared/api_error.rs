use serde::{Deserialize, Serialize};

use crate::domain::common::FieldError;

/// Тело ответа backend при ошибке
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub field_errors: Vec<FieldError>,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            field_errors: Vec::new(),
        }
    }

    pub fn with_field_errors(message: impl Into<String>, field_errors: Vec<FieldError>) -> Self {
        Self {
            message: message.into(),
            field_errors,
        }
    }
}
