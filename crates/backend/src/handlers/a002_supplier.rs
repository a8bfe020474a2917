use axum::{
    extract::{Path, State},
    Json,
};
use contracts::domain::a002_supplier::{Supplier, SupplierDto, SupplierUpdateDto};

use super::ApiError;
use crate::domain::a002_supplier;
use crate::shared::data::db::Store;

/// GET /api/supplier
pub async fn list_all(State(store): State<Store>) -> Result<Json<Vec<Supplier>>, ApiError> {
    Ok(Json(a002_supplier::service::list_all(&store).await?))
}

/// GET /api/supplier/:id
pub async fn get_by_id(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(a002_supplier::service::get_by_id(&store, &id).await?))
}

/// POST /api/supplier
pub async fn create(
    State(store): State<Store>,
    Json(dto): Json<SupplierDto>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(a002_supplier::service::create(&store, dto).await?))
}

/// PUT /api/supplier/:id
pub async fn update(
    State(store): State<Store>,
    Path(id): Path<String>,
    Json(dto): Json<SupplierUpdateDto>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(a002_supplier::service::update(&store, &id, dto).await?))
}

/// DELETE /api/supplier/:id
pub async fn delete(
    State(store): State<Store>,
    Path(id): Path<String>,
) -> Result<Json<Supplier>, ApiError> {
    Ok(Json(a002_supplier::service::delete(&store, &id).await?))
}
