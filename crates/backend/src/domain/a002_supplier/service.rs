use super::repository;
use contracts::domain::a002_supplier::{Supplier, SupplierDto, SupplierId, SupplierUpdateDto};
use contracts::domain::common::{AggregateId, AggregateRoot, InventoryError};

use crate::shared::data::db::Store;

fn parse_id(id: &str) -> Result<SupplierId, InventoryError> {
    SupplierId::from_string(id)
        .map_err(|_| InventoryError::not_found(Supplier::collection_name(), id))
}

pub async fn list_all(store: &Store) -> Result<Vec<Supplier>, InventoryError> {
    repository::list_all(store.conn()).await
}

pub async fn get_by_id(store: &Store, id: &str) -> Result<Supplier, InventoryError> {
    let supplier_id = parse_id(id)?;
    repository::get_by_id(store.conn(), &supplier_id)
        .await?
        .ok_or_else(|| InventoryError::not_found(Supplier::collection_name(), id))
}

pub async fn create(store: &Store, dto: SupplierDto) -> Result<Supplier, InventoryError> {
    let aggregate = Supplier::new_for_insert(dto);
    store.check_size(&aggregate)?;

    repository::insert(store.conn(), &aggregate).await?;
    tracing::info!("Supplier created: id={}, name={}", aggregate.id.as_string(), aggregate.name);
    Ok(aggregate)
}

pub async fn update(
    store: &Store,
    id: &str,
    dto: SupplierUpdateDto,
) -> Result<Supplier, InventoryError> {
    let _guard = store.lock_writes().await;
    let mut aggregate = get_by_id(store, id).await?;

    aggregate.apply(&dto);
    aggregate.before_write();
    store.check_size(&aggregate)?;

    repository::update(store.conn(), &aggregate).await?;
    tracing::info!("Supplier updated: id={}", id);
    Ok(aggregate)
}

pub async fn delete(store: &Store, id: &str) -> Result<Supplier, InventoryError> {
    let _guard = store.lock_writes().await;
    let aggregate = get_by_id(store, id).await?;
    if !repository::delete(store.conn(), &aggregate.id).await? {
        return Err(InventoryError::not_found(Supplier::collection_name(), id));
    }
    tracing::info!("Supplier deleted: id={}", id);
    Ok(aggregate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::StorageLimits;

    async fn store() -> Store {
        Store::open_in_memory(StorageLimits::default()).await.unwrap()
    }

    #[tokio::test]
    async fn test_crud_cycle() {
        let store = store().await;
        assert!(list_all(&store).await.unwrap().is_empty());

        let created = create(&store, SupplierDto { name: "Acme".into() }).await.unwrap();
        let id = created.id.as_string();
        assert_eq!(get_by_id(&store, &id).await.unwrap(), created);

        let updated = update(&store, &id, SupplierDto { name: "Acme Ltd".into() }.into())
            .await
            .unwrap();
        assert_eq!(updated.name, "Acme Ltd");
        assert!(updated.metadata.updated_at.unwrap() >= updated.metadata.created_at);
        assert_eq!(list_all(&store).await.unwrap(), vec![updated.clone()]);

        assert_eq!(delete(&store, &id).await.unwrap(), updated);
        assert!(list_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_empty_update_keeps_name_but_stamps() {
        let store = store().await;
        let created = create(&store, SupplierDto { name: "Acme".into() }).await.unwrap();
        let id = created.id.as_string();

        let updated = update(&store, &id, SupplierUpdateDto::default()).await.unwrap();
        assert_eq!(updated.name, "Acme");
        assert!(updated.metadata.updated_at.is_some());
    }

    #[tokio::test]
    async fn test_missing_supplier() {
        let store = store().await;
        let missing = SupplierId::new_v4().as_string();
        assert!(matches!(
            update(&store, &missing, SupplierUpdateDto::default()).await,
            Err(InventoryError::NotFound { collection: "supplier", .. })
        ));
        assert!(matches!(
            delete(&store, &missing).await,
            Err(InventoryError::NotFound { collection: "supplier", .. })
        ));
    }
}
