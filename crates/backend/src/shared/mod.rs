pub mod app_state;
pub mod commerce;
pub mod config;
pub mod error;
