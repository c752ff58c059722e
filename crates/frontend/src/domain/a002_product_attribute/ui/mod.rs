pub mod page;
pub mod section;
