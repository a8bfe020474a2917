pub mod aggregate;

pub use aggregate::{
    RepointItemDto, StockAmountDto, SupplierItemStock, SupplierItemStockDto, SupplierItemStockId,
};
