pub mod create;
pub mod page;
