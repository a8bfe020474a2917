use super::repository;
use contracts::domain::a003_supplier_item_stock::{
    SupplierItemStock, SupplierItemStockDto, SupplierItemStockId,
};
use contracts::domain::common::{AggregateId, AggregateRoot, InventoryError, Quantity};

use crate::shared::data::db::Store;

fn parse_id(id: &str) -> Result<SupplierItemStockId, InventoryError> {
    SupplierItemStockId::from_string(id)
        .map_err(|_| InventoryError::not_found(SupplierItemStock::collection_name(), id))
}

/// Получение списка всех остатков
pub async fn list_all(store: &Store) -> Result<Vec<SupplierItemStock>, InventoryError> {
    repository::list_all(store.conn()).await
}

/// Получение остатка по ID
pub async fn get_by_id(store: &Store, id: &str) -> Result<SupplierItemStock, InventoryError> {
    let stock_id = parse_id(id)?;
    repository::get_by_id(store.conn(), &stock_id)
        .await?
        .ok_or_else(|| InventoryError::not_found(SupplierItemStock::collection_name(), id))
}

/// Создание остатка с начальным количеством
///
/// `item_id` не сверяется с каталогом товаров.
pub async fn create(
    store: &Store,
    dto: SupplierItemStockDto,
) -> Result<SupplierItemStock, InventoryError> {
    let aggregate = SupplierItemStock::new_for_insert(dto);
    store.check_size(&aggregate)?;

    repository::insert(store.conn(), &aggregate).await?;
    tracing::info!(
        "Stock created: id={}, item_id={}, quantity={}",
        aggregate.id.as_string(),
        aggregate.item_id,
        aggregate.quantity
    );
    Ok(aggregate)
}

/// Загрузить запись, применить изменение и сохранить
///
/// Если `change` вернул ошибку, в хранилище ничего не пишется.
/// Чтение и запись идут под блокировкой записи хранилища.
async fn modify<F>(store: &Store, id: &str, change: F) -> Result<SupplierItemStock, InventoryError>
where
    F: FnOnce(&mut SupplierItemStock) -> Result<(), InventoryError>,
{
    let _guard = store.lock_writes().await;
    let mut aggregate = get_by_id(store, id).await?;

    change(&mut aggregate)?;
    aggregate.before_write();
    store.check_size(&aggregate)?;

    repository::update(store.conn(), &aggregate).await?;
    Ok(aggregate)
}

/// Перепривязать остаток к другому товару
pub async fn repoint_item(
    store: &Store,
    id: &str,
    new_item_id: String,
) -> Result<SupplierItemStock, InventoryError> {
    let aggregate = modify(store, id, |stock| {
        stock.repoint_item(new_item_id);
        Ok(())
    })
    .await?;
    tracing::info!("Stock {} repointed to item {}", id, aggregate.item_id);
    Ok(aggregate)
}

/// Приход: увеличить остаток
pub async fn increase(
    store: &Store,
    id: &str,
    amount: &Quantity,
) -> Result<SupplierItemStock, InventoryError> {
    let aggregate = modify(store, id, |stock| {
        stock.increase(amount);
        Ok(())
    })
    .await?;
    tracing::info!("Stock {} increased by {} to {}", id, amount, aggregate.quantity);
    Ok(aggregate)
}

/// Списание: уменьшить остаток, не уходя ниже нуля
pub async fn decrease(
    store: &Store,
    id: &str,
    amount: &Quantity,
) -> Result<SupplierItemStock, InventoryError> {
    match modify(store, id, |stock| stock.decrease(amount)).await {
        Ok(aggregate) => {
            tracing::info!("Stock {} decreased by {} to {}", id, amount, aggregate.quantity);
            Ok(aggregate)
        }
        Err(e @ InventoryError::InsufficientStock { .. }) => {
            tracing::warn!("Stock decrease rejected: {}", e);
            Err(e)
        }
        Err(e) => Err(e),
    }
}

/// Удаление остатка; возвращает удалённую запись
pub async fn delete(store: &Store, id: &str) -> Result<SupplierItemStock, InventoryError> {
    let _guard = store.lock_writes().await;
    let aggregate = get_by_id(store, id).await?;
    if !repository::delete(store.conn(), &aggregate.id).await? {
        return Err(InventoryError::not_found(
            SupplierItemStock::collection_name(),
            id,
        ));
    }
    tracing::info!("Stock deleted: id={}", id);
    Ok(aggregate)
}
