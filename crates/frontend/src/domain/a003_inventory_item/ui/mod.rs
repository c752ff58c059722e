pub mod attributes;
pub mod page;
