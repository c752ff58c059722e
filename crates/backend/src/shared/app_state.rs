use std::sync::Arc;

use crate::shared::commerce::CommerceApi;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub commerce: Arc<dyn CommerceApi>,
}

impl AppState {
    pub fn new(commerce: Arc<dyn CommerceApi>) -> Self {
        Self { commerce }
    }
}
