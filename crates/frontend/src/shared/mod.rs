pub mod api;
pub mod api_utils;
pub mod components;
pub mod icons;
pub mod notify;
