pub mod a001_commission_rule;
pub mod a002_product_attribute;
pub mod a003_inventory_item;
pub mod catalog;
