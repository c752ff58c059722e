//! Inventory item "Edit attributes" drawer
//!
//! - model.rs: API functions (fetch, save)
//! - view_model.rs: form fields as RwSignals, load/save commands
//! - view.rs: drawer content

mod model;
mod view;
mod view_model;

pub use view::InventoryItemAttributesDrawer;
pub use view_model::InventoryItemAttributesVm;
