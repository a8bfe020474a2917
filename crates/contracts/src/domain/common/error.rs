use thiserror::Error;

use super::Quantity;

/// Ошибки операций над коллекциями склада
///
/// Любая ошибка означает, что запись в хранилище не выполнялась.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    #[error("no {collection} found with id={id}")]
    NotFound { collection: &'static str, id: String },

    #[error("can't supply quantity of {requested} from stock id={id}: only {available} available")]
    InsufficientStock {
        id: String,
        requested: Quantity,
        available: Quantity,
    },

    #[error("{collection} record of {size} bytes exceeds the {limit} byte limit")]
    RecordTooLarge {
        collection: &'static str,
        size: usize,
        limit: usize,
    },

    #[error("storage error: {0}")]
    Storage(String),
}

impl InventoryError {
    pub fn not_found(collection: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            collection,
            id: id.into(),
        }
    }
}
