use super::repository;
use contracts::domain::a001_item::{Item, ItemDto, ItemId, ItemUpdateDto};
use contracts::domain::common::{AggregateId, AggregateRoot, InventoryError};

use crate::shared::data::db::Store;

/// Нераспознанный id не может быть ключом записи, поэтому это тоже NotFound
fn parse_id(id: &str) -> Result<ItemId, InventoryError> {
    ItemId::from_string(id).map_err(|_| InventoryError::not_found(Item::collection_name(), id))
}

/// Получение списка всех товаров
pub async fn list_all(store: &Store) -> Result<Vec<Item>, InventoryError> {
    repository::list_all(store.conn()).await
}

/// Получение товара по ID
pub async fn get_by_id(store: &Store, id: &str) -> Result<Item, InventoryError> {
    let item_id = parse_id(id)?;
    repository::get_by_id(store.conn(), &item_id)
        .await?
        .ok_or_else(|| InventoryError::not_found(Item::collection_name(), id))
}

/// Создание нового товара
pub async fn create(store: &Store, dto: ItemDto) -> Result<Item, InventoryError> {
    let aggregate = Item::new_for_insert(dto);
    store.check_size(&aggregate)?;

    repository::insert(store.conn(), &aggregate).await?;
    tracing::info!("Item created: id={}, title={}", aggregate.id.as_string(), aggregate.title);
    Ok(aggregate)
}

/// Обновление существующего товара
pub async fn update(store: &Store, id: &str, dto: ItemUpdateDto) -> Result<Item, InventoryError> {
    let _guard = store.lock_writes().await;
    let mut aggregate = get_by_id(store, id).await?;

    aggregate.apply(&dto);
    aggregate.before_write();
    store.check_size(&aggregate)?;

    repository::update(store.conn(), &aggregate).await?;
    tracing::info!("Item updated: id={}", id);
    Ok(aggregate)
}

/// Удаление товара; возвращает удалённую запись
pub async fn delete(store: &Store, id: &str) -> Result<Item, InventoryError> {
    let _guard = store.lock_writes().await;
    let aggregate = get_by_id(store, id).await?;
    if !repository::delete(store.conn(), &aggregate.id).await? {
        return Err(InventoryError::not_found(Item::collection_name(), id));
    }
    tracing::info!("Item deleted: id={}", id);
    Ok(aggregate)
}
