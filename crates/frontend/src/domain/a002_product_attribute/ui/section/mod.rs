//! Product "additional attributes" section
//!
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: section state, editor drawer commands
//! - view.rs: read-only table + edit drawer

mod model;
mod view;
mod view_model;

pub use view::ProductAttributesSection;
pub use view_model::ProductAttributesVm;
