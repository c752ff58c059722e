pub mod currency_amounts;
pub mod drawer_frame;
pub mod field_error;
