//! Commission rule creation form
//!
//! MVVM:
//! - model.rs: API functions (catalogs, create)
//! - view_model.rs: form state, submit state machine, commands
//! - view.rs: Leptos component (pure UI)

mod model;
mod view;
mod view_model;

pub use view::CommissionRuleCreate;
pub use view_model::{CommissionRuleCreateVm, FormPhase};
