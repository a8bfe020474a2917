pub mod common;

pub mod a001_item;
pub mod a002_supplier;
pub mod a003_supplier_item_stock;
