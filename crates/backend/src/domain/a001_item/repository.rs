use contracts::domain::a001_item::{Item, ItemId};
use contracts::domain::common::{AggregateId, EntityMetadata, InventoryError};
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{QueryOrder, Set};

use crate::shared::data::db::storage_error;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_item")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub description: String,
    pub illustration_url: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for Item {
    type Error = InventoryError;

    fn try_from(m: Model) -> Result<Self, Self::Error> {
        let id = ItemId::from_string(&m.id)
            .map_err(|e| InventoryError::Storage(format!("corrupt item id {}: {}", m.id, e)))?;
        Ok(Item {
            id,
            title: m.title,
            description: m.description,
            illustration_url: m.illustration_url,
            metadata: EntityMetadata::restore(m.created_at, m.updated_at),
        })
    }
}

fn to_active(aggregate: &Item) -> ActiveModel {
    ActiveModel {
        id: Set(aggregate.id.as_string()),
        title: Set(aggregate.title.clone()),
        description: Set(aggregate.description.clone()),
        illustration_url: Set(aggregate.illustration_url.clone()),
        created_at: Set(aggregate.metadata.created_at),
        updated_at: Set(aggregate.metadata.updated_at),
    }
}

/// Все товары в порядке ключей
pub async fn list_all(conn: &DatabaseConnection) -> Result<Vec<Item>, InventoryError> {
    Entity::find()
        .order_by_asc(Column::Id)
        .all(conn)
        .await
        .map_err(storage_error)?
        .into_iter()
        .map(Item::try_from)
        .collect()
}

pub async fn get_by_id(
    conn: &DatabaseConnection,
    id: &ItemId,
) -> Result<Option<Item>, InventoryError> {
    Entity::find_by_id(id.as_string())
        .one(conn)
        .await
        .map_err(storage_error)?
        .map(Item::try_from)
        .transpose()
}

pub async fn insert(conn: &DatabaseConnection, aggregate: &Item) -> Result<(), InventoryError> {
    to_active(aggregate)
        .insert(conn)
        .await
        .map_err(storage_error)?;
    Ok(())
}

pub async fn update(conn: &DatabaseConnection, aggregate: &Item) -> Result<(), InventoryError> {
    let mut active = to_active(aggregate);
    active.created_at = sea_orm::ActiveValue::NotSet;
    active.update(conn).await.map_err(storage_error)?;
    Ok(())
}

/// Удалить запись без следа; `false`, если записи не было
pub async fn delete(conn: &DatabaseConnection, id: &ItemId) -> Result<bool, InventoryError> {
    let result = Entity::delete_by_id(id.as_string())
        .exec(conn)
        .await
        .map_err(storage_error)?;
    Ok(result.rows_affected > 0)
}
