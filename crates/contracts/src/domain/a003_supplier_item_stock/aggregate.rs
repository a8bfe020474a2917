use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, AggregateRoot, EntityMetadata, InventoryError, Quantity};

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор остатка поставщика
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierItemStockId(pub Uuid);

impl SupplierItemStockId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for SupplierItemStockId {
    fn generate() -> Self {
        Self::new_v4()
    }

    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(SupplierItemStockId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Остаток товара, который поставщик может отгрузить
///
/// `item_id` хранится как есть и не сверяется с каталогом товаров:
/// ссылка на удалённый или несуществующий товар допустима.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierItemStock {
    pub id: SupplierItemStockId,
    pub item_id: String,
    pub quantity: Quantity,

    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl SupplierItemStock {
    /// Создать новый остаток для вставки в хранилище
    pub fn new_for_insert(dto: SupplierItemStockDto) -> Self {
        Self {
            id: SupplierItemStockId::new_v4(),
            item_id: dto.item_id,
            quantity: dto.quantity,
            metadata: EntityMetadata::new(),
        }
    }

    /// Перепривязать остаток к другому товару
    pub fn repoint_item(&mut self, item_id: String) {
        self.item_id = item_id;
    }

    /// Увеличить остаток
    pub fn increase(&mut self, amount: &Quantity) {
        self.quantity.add(amount);
    }

    /// Списать остаток; при нехватке запись не меняется
    pub fn decrease(&mut self, amount: &Quantity) -> Result<(), InventoryError> {
        if !self.quantity.try_sub(amount) {
            return Err(InventoryError::InsufficientStock {
                id: self.to_string_id(),
                requested: amount.clone(),
                available: self.quantity.clone(),
            });
        }
        Ok(())
    }
}

impl AggregateRoot for SupplierItemStock {
    type Id = SupplierItemStockId;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn metadata(&self) -> &EntityMetadata {
        &self.metadata
    }

    fn metadata_mut(&mut self) -> &mut EntityMetadata {
        &mut self.metadata
    }

    fn aggregate_index() -> &'static str {
        "a003"
    }

    fn collection_name() -> &'static str {
        "supplier_item_stock"
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// DTO для создания остатка
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SupplierItemStockDto {
    pub item_id: String,
    pub quantity: Quantity,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepointItemDto {
    pub item_id: String,
}

/// Количество для прихода/списания
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockAmountDto {
    pub amount: Quantity,
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_POW_64: &str = "18446744073709551616";

    fn q(n: u64) -> Quantity {
        Quantity::from(n)
    }

    fn stock(quantity: Quantity) -> SupplierItemStock {
        SupplierItemStock::new_for_insert(SupplierItemStockDto {
            item_id: "X".into(),
            quantity,
        })
    }

    #[test]
    fn test_decrease_within_balance() {
        let mut s = stock(q(10));
        s.decrease(&q(4)).unwrap();
        assert_eq!(s.quantity, q(6));
    }

    #[test]
    fn test_decrease_to_zero() {
        let mut s = stock(q(3));
        s.decrease(&q(3)).unwrap();
        assert_eq!(s.quantity, Quantity::zero());
    }

    #[test]
    fn test_decrease_over_balance_is_rejected_and_unchanged() {
        let mut s = stock(q(6));
        let before = s.clone();
        let err = s.decrease(&q(10)).unwrap_err();
        assert_eq!(
            err,
            InventoryError::InsufficientStock {
                id: s.to_string_id(),
                requested: q(10),
                available: q(6),
            }
        );
        assert_eq!(s, before);
    }

    #[test]
    fn test_increase() {
        let mut s = stock(q(1));
        s.increase(&q(41));
        assert_eq!(s.quantity, q(42));
    }

    #[test]
    fn test_quantities_above_u64() {
        let mut s = stock(q(u64::MAX));
        s.increase(&q(1));
        assert_eq!(s.quantity.to_string(), TWO_POW_64);

        let big: Quantity = TWO_POW_64.parse().unwrap();
        assert!(s.decrease(&big).is_ok());
        assert_eq!(s.quantity, Quantity::zero());

        let mut s = stock(q(5));
        let err = s.decrease(&big).unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientStock { .. }));
        assert_eq!(s.quantity, q(5));
    }

    #[test]
    fn test_quantity_never_negative_over_sequence() {
        let mut s = stock(q(5));
        let ops: [(bool, u64); 8] = [
            (false, 3),
            (false, 3),
            (true, 7),
            (false, 9),
            (false, 1),
            (true, 0),
            (false, 0),
            (false, 100),
        ];
        let mut expected: u64 = 5;
        for (is_increase, amount) in ops {
            if is_increase {
                s.increase(&q(amount));
                expected += amount;
            } else if s.decrease(&q(amount)).is_ok() {
                expected -= amount;
            }
            assert_eq!(s.quantity, q(expected));
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn test_repoint_keeps_quantity() {
        let mut s = stock(q(7));
        s.repoint_item("Y".into());
        assert_eq!(s.item_id, "Y");
        assert_eq!(s.quantity, q(7));
    }

    #[test]
    fn test_payload_accepts_number_and_big_string() {
        let dto: SupplierItemStockDto =
            serde_json::from_str(r#"{"itemId":"X","quantity":10}"#).unwrap();
        assert_eq!(dto.quantity, q(10));
        let dto: SupplierItemStockDto = serde_json::from_str(&format!(
            r#"{{"itemId":"X","quantity":"{}"}}"#,
            TWO_POW_64
        ))
        .unwrap();
        assert_eq!(dto.quantity.to_string(), TWO_POW_64);
    }

    #[test]
    fn test_negative_amount_is_rejected_by_serde() {
        assert!(serde_json::from_str::<StockAmountDto>(r#"{"amount":-1}"#).is_err());
    }
}
