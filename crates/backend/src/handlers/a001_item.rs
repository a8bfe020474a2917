use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a001_item::{Item, ItemDto, ItemUpdateDto};

use super::ApiError;
use crate::domain::a001_item;
use crate::shared::data::db::Store;

/// GET /api/item
pub async fn list_all(State(store): State<Store>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(a001_item::service::list_all(&store).await?))
}

/// GET /api/item/:id
pub async fn get_by_id(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(a001_item::service::get_by_id(&store, &id).await?))
}

/// POST /api/item
pub async fn create(
    State(store): State<Store>,
    Json(dto): Json<ItemDto>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(a001_item::service::create(&store, dto).await?))
}

/// PUT /api/item/:id
pub async fn update(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(dto): Json<ItemUpdateDto>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(a001_item::service::update(&store, &id, dto).await?))
}

/// DELETE /api/item/:id
pub async fn delete(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    Ok(Json(a001_item::service::delete(&store, &id).await?))
}
