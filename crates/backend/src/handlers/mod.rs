pub mod a001_item;
pub mod a002_supplier;
pub mod a003_supplier_item_stock;
pub mod api_error;

pub use api_error::ApiError;
