use contracts::domain::a003_supplier_item_stock::{SupplierItemStock, SupplierItemStockId};
use contracts::domain::common::{AggregateId, EntityMetadata, InventoryError, Quantity};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::storage_error;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a003_supplier_item_stock")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub item_id: String,
    /// Десятичная строка: остаток не ограничен разрядностью INTEGER
    pub quantity: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for SupplierItemStock {
    type Error = InventoryError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = SupplierItemStockId::from_string(&m.id).map_err(|e| {
            InventoryError::Storage(format!("corrupt stock id {}: {}", m.id, e))
        })?;
        let quantity = m.quantity.parse::<Quantity>().map_err(|e| {
            InventoryError::Storage(format!("corrupt quantity in stock {}: {}", m.id, e))
        })?;
        Ok(SupplierItemStock {
            id,
            item_id: m.item_id,
            quantity,
            metadata: EntityMetadata::restore(m.created_at, m.updated_at),
        })
    }
}

fn to_active(aggregate: &SupplierItemStock) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.as_string()),
        item_id: Set(aggregate.item_id.clone()),
        quantity: Set(aggregate.quantity.to_string()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    }
}

pub async fn list_all(
    conn: &DatabaseConnection,
) -> Result<Vec<SupplierItemStock>, InventoryError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await
        .map_err(storage_error)?
        .into_iter()
        .map(SupplierItemStock::try_from)
        .collect()
}

pub async fn get_by_id(
    conn: &DatabaseConnection,
    id: &SupplierItemStockId,
) -> Result<Option<SupplierItemStock>, InventoryError> {
    Entity::find_by_id(id.as_string())
        .one(conn)
        .await
        .map_err(storage_error)?
        .map(SupplierItemStock::try_from)
        .transpose()
}

pub async fn insert(
    conn: &DatabaseConnection,
    aggregate: &SupplierItemStock,
) -> Result<(), InventoryError> {
    to_active(aggregate)
        .insert(conn)
        .await
        .map_err(storage_error)?;
    Ok(())
}

pub async fn update(
    conn: &DatabaseConnection,
    aggregate: &SupplierItemStock,
) -> Result<(), InventoryError> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn).await.map_err(storage_error)?;
    Ok(())
}

pub async fn delete(
    conn: &DatabaseConnection,
    id: &SupplierItemStockId,
) -> Result<bool, InventoryError> {
    let result = Entity::delete_by_id(id.as_string())
        .exec(conn)
        .await
        .map_err(storage_error)?;
    Ok(result.rows_affected > 0)
}
